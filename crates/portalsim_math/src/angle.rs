//! Angle helpers
//!
//! Rotations are stored as Euler angles in radians: `x` is pitch, `y` is yaw.
//! A zero rotation looks down -Z.

use std::f32::consts::{PI, TAU};

use crate::Vec3;

/// Tolerance used when comparing angles
pub const ANGLE_EPSILON: f32 = 1.0e-4;

/// Degrees to radians
#[inline]
pub fn rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Wrap an angle into `[0, 2π)`
#[inline]
pub fn wrap_angle(radians: f32) -> f32 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest difference `a - b`, in `(-π, π]`
#[inline]
pub fn angle_difference(a: f32, b: f32) -> f32 {
    let diff = wrap_angle(a - b);
    if diff > PI {
        diff - TAU
    } else {
        diff
    }
}

/// Whether two angles name the same orientation (modulo 2π)
#[inline]
pub fn angle_eq(a: f32, b: f32) -> bool {
    angle_difference(a, b).abs() < ANGLE_EPSILON
}

/// Forward direction for a pitch/yaw rotation
pub fn to_direction(rotation: Vec3) -> Vec3 {
    let (sin_pitch, cos_pitch) = rotation.x.sin_cos();
    let (sin_yaw, cos_yaw) = rotation.y.sin_cos();
    Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPSILON, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_rad() {
        assert!((rad(180.0) - PI).abs() < EPSILON);
        assert!((rad(-90.0) + PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(-PI / 2.0) - 1.5 * PI).abs() < EPSILON);
        assert!((wrap_angle(3.0 * PI) - PI).abs() < EPSILON);
        assert_eq!(wrap_angle(0.0), 0.0);
    }

    #[test]
    fn test_angle_eq_modulo() {
        assert!(angle_eq(rad(180.0), rad(-180.0)));
        assert!(angle_eq(rad(-90.0), rad(270.0)));
        assert!(!angle_eq(rad(90.0), rad(-90.0)));
    }

    #[test]
    fn test_to_direction_cardinals() {
        assert_vec_eq(to_direction(Vec3::ZERO), -Vec3::Z);
        assert_vec_eq(to_direction(Vec3::new(0.0, rad(-90.0), 0.0)), Vec3::X);
        assert_vec_eq(to_direction(Vec3::new(0.0, rad(90.0), 0.0)), -Vec3::X);
        assert_vec_eq(to_direction(Vec3::new(0.0, rad(180.0), 0.0)), Vec3::Z);
        assert_vec_eq(to_direction(Vec3::new(rad(90.0), 0.0, 0.0)), Vec3::Y);
        assert_vec_eq(to_direction(Vec3::new(rad(-90.0), 0.0, 0.0)), -Vec3::Y);
    }

    #[test]
    fn test_to_direction_is_unit() {
        let dir = to_direction(Vec3::new(0.3, 1.2, 0.0));
        assert!((dir.length() - 1.0).abs() < EPSILON);
    }
}
