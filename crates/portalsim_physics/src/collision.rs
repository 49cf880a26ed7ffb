//! Overlap queries against static geometry
//!
//! Resolution is binary per axis: a probe box either hits some wall or it
//! doesn't. There is no penetration-depth correction, so the order of the
//! wall list never changes the result.

use bitflags::bitflags;

use crate::shapes::BoxCollider;
use portalsim_math::Axis;

bitflags! {
    /// Set of axes touched during a resolution pass
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BlockedAxes: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
    }
}

impl BlockedAxes {
    /// Flag for a single axis
    pub fn from_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => BlockedAxes::X,
            Axis::Y => BlockedAxes::Y,
            Axis::Z => BlockedAxes::Z,
        }
    }
}

/// Check a probe box against every wall
pub fn collides_with_any(probe: &BoxCollider, walls: &[BoxCollider]) -> bool {
    walls.iter().any(|wall| probe.collides_with(wall))
}
