//! Ray casting against boxes

use portalsim_math::Vec3;

use crate::shapes::BoxCollider;

/// A ray with origin and normalized direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Point at parameter `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test against a box
    ///
    /// Returns `(t_near, t_far)` when the ray line crosses the box and the exit
    /// point is not behind the origin. `t_near` is negative when the origin is
    /// inside the box.
    pub fn intersect(&self, collider: &BoxCollider) -> Option<(f32, f32)> {
        let min = collider.min();
        let max = collider.max();

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for (origin, dir, lo, hi) in [
            (self.origin.x, self.direction.x, min.x, max.x),
            (self.origin.y, self.direction.y, min.y, max.y),
            (self.origin.z, self.direction.z, min.z, max.z),
        ] {
            if dir.abs() < f32::EPSILON {
                // Parallel to this slab: must already be between the planes
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (lo - origin) * inv;
            let mut t1 = (hi - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            None
        } else {
            Some((t_near, t_far))
        }
    }
}
