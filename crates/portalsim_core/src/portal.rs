//! Portals
//!
//! A portal is a flat opening anchored on a wall surface. Its rotation puts
//! the local -Z axis on the outward face normal, so [`Portal::direction`]
//! points away from the wall. Behind the surface the portal owns a thin
//! volume reaching [`PORTAL_DEPTH`] into the wall; a player box inside that
//! volume may pass through the wall, and a player whose center crosses the
//! surface into it is teleported.

use std::f32::consts::{FRAC_PI_2, PI};

use portalsim_math::{angle_eq, to_direction, Axis, Vec3};
use portalsim_physics::BoxCollider;

use crate::assets::TextureHandle;

/// Aperture size in the portal's local frame (width, height, unused)
pub const PORTAL_SCALE: Vec3 = Vec3::new(1.0, 2.0, 1.0);

/// How far the portal volume reaches behind the wall surface
pub const PORTAL_DEPTH: f32 = 1.0;

/// Mask texture shared by both portals
pub const PORTAL_MASK_TEXTURE: &str = "portalmask.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortalColor {
    Blue,
    Orange,
}

impl PortalColor {
    /// Mouse button 1 shoots blue, every other button orange
    pub fn from_button(button: u32) -> Self {
        if button == 1 {
            PortalColor::Blue
        } else {
            PortalColor::Orange
        }
    }

    /// Diffuse texture for this color
    pub fn texture_name(self) -> &'static str {
        match self {
            PortalColor::Blue => "blueportal.png",
            PortalColor::Orange => "orangeportal.png",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Portal {
    /// Anchor point on the wall surface
    pub position: Vec3,
    /// Pitch (x) and yaw (y) in radians
    pub rotation: Vec3,
    pub scale: Vec3,
    pub open: bool,
    /// Milliseconds timestamp of the shot that opened this portal
    pub open_since: u64,
    pub color: PortalColor,
    pub diffuse: Option<TextureHandle>,
    pub mask: Option<TextureHandle>,
}

impl Portal {
    /// A portal that has never been placed
    pub fn closed(color: PortalColor) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: PORTAL_SCALE,
            open: false,
            open_since: 0,
            color,
            diffuse: None,
            mask: None,
        }
    }

    /// Open a portal at `impact` on the face of `wall` closest to it
    pub fn on_wall(color: PortalColor, wall: &BoxCollider, impact: Vec3, open_since: u64) -> Self {
        Self {
            position: impact,
            rotation: face_rotation(wall, impact),
            open: true,
            open_since,
            ..Self::closed(color)
        }
    }

    /// Outward face normal
    pub fn direction(&self) -> Vec3 {
        to_direction(self.rotation)
    }

    /// World axis the portal faces along, if its rotation is axis-aligned
    pub fn facing(&self) -> Option<Axis> {
        let (pitch, yaw) = (self.rotation.x, self.rotation.y);

        if angle_eq(pitch, FRAC_PI_2) || angle_eq(pitch, -FRAC_PI_2) {
            Some(Axis::Y)
        } else if !angle_eq(pitch, 0.0) {
            None
        } else if angle_eq(yaw, FRAC_PI_2) || angle_eq(yaw, -FRAC_PI_2) {
            Some(Axis::X)
        } else if angle_eq(yaw, 0.0) || angle_eq(yaw, PI) {
            Some(Axis::Z)
        } else {
            None
        }
    }

    /// Box behind the surface covering the aperture
    pub fn volume(&self) -> Option<BoxCollider> {
        let axis = self.facing()?;
        let normal = axis.unit() * self.direction().get(axis).signum();
        let (width, height) = (self.scale.x, self.scale.y);

        let size = match axis {
            Axis::X => Vec3::new(PORTAL_DEPTH, height, width),
            Axis::Y => Vec3::new(width, PORTAL_DEPTH, height),
            Axis::Z => Vec3::new(width, height, PORTAL_DEPTH),
        };
        let center = self.position - normal * (PORTAL_DEPTH * 0.5);
        Some(BoxCollider::new(center, size))
    }

    /// Whether `probe` reaches into this portal's volume while fitting
    /// inside its aperture
    pub fn in_portal(&self, probe: &BoxCollider) -> bool {
        if !self.open {
            return false;
        }
        let (Some(axis), Some(volume)) = (self.facing(), self.volume()) else {
            return false;
        };
        if !probe.collides_with(&volume) {
            return false;
        }

        let (inner_min, inner_max) = (probe.min(), probe.max());
        let (outer_min, outer_max) = (volume.min(), volume.max());
        Axis::RESOLUTION_ORDER
            .into_iter()
            .filter(|&lateral| lateral != axis)
            .all(|lateral| {
                inner_min.get(lateral) >= outer_min.get(lateral)
                    && inner_max.get(lateral) <= outer_max.get(lateral)
            })
    }

    /// Whether a blocked motion along `axis` may continue through this portal
    pub fn allows_passage(&self, probe: &BoxCollider, axis: Axis) -> bool {
        self.facing() == Some(axis) && self.in_portal(probe)
    }

    /// Whether the center of `probe` has crossed the surface into the volume
    pub fn through_portal(&self, probe: &BoxCollider) -> bool {
        if !self.open {
            return false;
        }
        let Some(volume) = self.volume() else {
            return false;
        };

        let behind = (probe.center - self.position).dot(self.direction()) < 0.0;
        behind && probe.collides_with(&volume) && volume.contains_point(probe.center)
    }
}

/// Rotation of a portal on the face of `wall` nearest to `impact`
fn face_rotation(wall: &BoxCollider, impact: Vec3) -> Vec3 {
    let (min, max) = (wall.min(), wall.max());

    let faces = [
        ((impact.x - max.x).abs(), Vec3::new(0.0, -FRAC_PI_2, 0.0)),
        ((impact.x - min.x).abs(), Vec3::new(0.0, FRAC_PI_2, 0.0)),
        ((impact.z - max.z).abs(), Vec3::new(0.0, PI, 0.0)),
        ((impact.z - min.z).abs(), Vec3::new(0.0, 0.0, 0.0)),
        ((impact.y - max.y).abs(), Vec3::new(FRAC_PI_2, 0.0, 0.0)),
        ((impact.y - min.y).abs(), Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
    ];

    faces
        .into_iter()
        .fold((f32::INFINITY, Vec3::ZERO), |best, face| if face.0 < best.0 { face } else { best })
        .1
}
