//! Collision shapes
//!
//! Everything in the level is an axis-aligned box. Colliders are value types
//! rebuilt from entity position/scale whenever they are needed.

use portalsim_math::{Axis, Vec3};

/// Axis-aligned box given by its center and full size
///
/// `size` is the entity scale, so the half extents are `size * 0.5`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxCollider {
    pub center: Vec3,
    pub size: Vec3,
}

impl BoxCollider {
    /// Create a box at `center` spanning `size`
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Half the size in each dimension
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents()
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents()
    }

    /// Check whether two boxes overlap
    ///
    /// Boxes that only touch along a face do not collide.
    pub fn collides_with(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        a_min.x < b_max.x
            && a_max.x > b_min.x
            && a_min.y < b_max.y
            && a_max.y > b_min.y
            && a_min.z < b_max.z
            && a_max.z > b_min.z
    }

    /// Check whether `other` lies entirely inside this box
    pub fn contains(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        b_min.x >= a_min.x
            && b_max.x <= a_max.x
            && b_min.y >= a_min.y
            && b_max.y <= a_max.y
            && b_min.z >= a_min.z
            && b_max.z <= a_max.z
    }

    /// Check whether a point is inside or on the box
    pub fn contains_point(&self, point: Vec3) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }

    /// Move the box along a single axis
    pub fn offset_along(&self, axis: Axis, delta: f32) -> Self {
        let mut center = self.center;
        center.set(axis, center.get(axis) + delta);
        Self::new(center, self.size)
    }
}
