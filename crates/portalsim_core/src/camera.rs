//! Scene camera

use portalsim_math::{rad, to_direction, Vec3};

/// Perspective camera, parented to the player every tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Pitch (x) and yaw (y) in radians
    pub rotation: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            fov: rad(60.0),
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Unit view direction
    pub fn direction(&self) -> Vec3 {
        to_direction(self.rotation)
    }

    /// Set the aspect ratio from a viewport size; a zero-height viewport is ignored
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_looks_down_negative_z() {
        let dir = Camera::default().direction();
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 0.0001);
    }

    #[test]
    fn test_viewport_aspect() {
        let mut camera = Camera::default();
        camera.set_viewport(1600, 800);
        assert_eq!(camera.aspect, 2.0);

        camera.set_viewport(640, 0);
        assert_eq!(camera.aspect, 2.0);
    }
}
