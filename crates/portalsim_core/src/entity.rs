//! Static level geometry
//!
//! Walls and hazard volumes are both [`PhysicsEntity`]s: boxes with a
//! material. Start and end points are [`Marker`]s.

use portalsim_math::Vec3;
use portalsim_physics::BoxCollider;

use crate::assets::TextureHandle;

/// Surface properties of a wall
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Material {
    /// Portals may be opened on this surface
    pub portalable: bool,
    /// Surface texture
    pub diffuse: Option<TextureHandle>,
}

impl Material {
    /// Plain material that accepts portals
    pub const PORTALABLE: Self = Self { portalable: true, diffuse: None };

    /// Plain material that rejects portals
    pub const SOLID: Self = Self { portalable: false, diffuse: None };

    /// Set the diffuse texture
    pub fn with_diffuse(mut self, texture: TextureHandle) -> Self {
        self.diffuse = Some(texture);
        self
    }
}

/// An axis-aligned box in the level (wall or hazard volume)
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsEntity {
    pub position: Vec3,
    /// Full box size
    pub scale: Vec3,
    /// Rotation in radians; only used for rendering
    pub rotation: Vec3,
    pub material: Material,
}

impl PhysicsEntity {
    /// Create an unrotated box
    pub fn new(position: Vec3, scale: Vec3, material: Material) -> Self {
        Self {
            position,
            scale,
            rotation: Vec3::ZERO,
            material,
        }
    }

    /// Collision box of this entity
    pub fn collider(&self) -> BoxCollider {
        BoxCollider::new(self.position, self.scale)
    }
}

/// A point with an orientation (level start and end)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Marker {
    pub position: Vec3,
    /// Rotation in radians
    pub rotation: Vec3,
}

impl Marker {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Marker at `position` with no rotation
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }
}
