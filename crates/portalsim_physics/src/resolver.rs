//! Axis-separated motion resolution against static walls
//!
//! Each tick the player's requested velocity is checked one axis at a time,
//! always in the order Y, X, Z. For every axis a probe box is built at the
//! current position with only that axis advanced. A probe that hits a wall
//! zeroes that velocity component, unless the probe sits inside an open
//! portal facing along the same axis, in which case the motion is left alone
//! so the teleport step can carry the player through.

use portalsim_math::{Axis, Vec3};
use serde::{Deserialize, Serialize};

use crate::collision::{collides_with_any, BlockedAxes};
use crate::shapes::BoxCollider;

/// Simulation tuning, passed explicitly to every physics call
///
/// All speeds are in units per tick: the simulation integrates one velocity
/// step per frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration added to `velocity.y` each tick
    pub gravity: f32,
    /// Fraction of horizontal velocity lost per tick with no movement input
    pub friction: f32,
    /// Fastest the player can fall
    pub terminal_velocity: f32,
    /// Horizontal speed while walking
    pub move_speed: f32,
    /// Upward velocity applied when jumping
    pub jump_velocity: f32,
    /// Downward speed above which a landing counts as a hard landing
    pub hurt_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.008,
            friction: 0.2,
            terminal_velocity: 0.9,
            move_speed: 0.1,
            jump_velocity: 0.15,
            hurt_velocity: 0.18,
        }
    }
}

/// Answers whether a blocked probe may pass through a portal instead
pub trait PortalGate {
    /// True when `probe` is inside an open portal whose face is
    /// perpendicular to `axis`
    fn allows_passage(&self, probe: &BoxCollider, axis: Axis) -> bool;
}

/// Gate for levels without portals: nothing ever passes
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPortals;

impl PortalGate for NoPortals {
    fn allows_passage(&self, _probe: &BoxCollider, _axis: Axis) -> bool {
        false
    }
}

/// The moving body handed to the resolver
#[derive(Clone, Copy, Debug)]
pub struct Motion {
    /// Current center
    pub position: Vec3,
    /// Requested displacement for this tick
    pub velocity: Vec3,
    /// Full box size
    pub size: Vec3,
}

/// Outcome of a resolution pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// Velocity with blocked components zeroed
    pub velocity: Vec3,
    /// A downward motion was stopped by a wall
    pub landed: bool,
    /// The stopped downward speed exceeded the hurt threshold
    pub hard_landing: bool,
    /// Axes whose velocity was zeroed
    pub blocked: BlockedAxes,
    /// Axes that hit a wall but were let through by a portal
    pub bypassed: BlockedAxes,
}

/// Per-axis sweep of a box against static walls
pub struct CollisionResolver;

impl CollisionResolver {
    /// Resolve one tick of motion
    ///
    /// Each axis is tested with the velocity requested at the start of the
    /// tick; zeroing one axis never changes the probe of another.
    pub fn resolve<G: PortalGate + ?Sized>(
        motion: &Motion,
        walls: &[BoxCollider],
        gate: &G,
        config: &PhysicsConfig,
    ) -> Resolution {
        let requested = motion.velocity;
        let body = BoxCollider::new(motion.position, motion.size);

        let mut resolution = Resolution {
            velocity: requested,
            landed: false,
            hard_landing: false,
            blocked: BlockedAxes::empty(),
            bypassed: BlockedAxes::empty(),
        };

        for axis in Axis::RESOLUTION_ORDER {
            let probe = body.offset_along(axis, requested.get(axis));
            if !collides_with_any(&probe, walls) {
                continue;
            }

            if gate.allows_passage(&probe, axis) {
                resolution.bypassed |= BlockedAxes::from_axis(axis);
                continue;
            }

            if axis == Axis::Y && requested.y < 0.0 {
                resolution.landed = true;
                if requested.y < -config.hurt_velocity {
                    resolution.hard_landing = true;
                }
            }

            resolution.velocity.set(axis, 0.0);
            resolution.blocked |= BlockedAxes::from_axis(axis);
        }

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> BoxCollider {
        // Top face at y = 0
        BoxCollider::new(Vec3::new(0.0, -0.5, 0.0), Vec3::new(20.0, 1.0, 20.0))
    }

    fn player_at(position: Vec3, velocity: Vec3) -> Motion {
        Motion {
            position,
            velocity,
            size: Vec3::new(0.5, 1.0, 0.5),
        }
    }

    /// Gate that lets everything through on one axis
    struct OpenOn(Axis);

    impl PortalGate for OpenOn {
        fn allows_passage(&self, _probe: &BoxCollider, axis: Axis) -> bool {
            axis == self.0
        }
    }

    #[test]
    fn test_no_walls_no_collision() {
        let motion = player_at(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.1, -0.5, 0.2));
        let res = CollisionResolver::resolve(&motion, &[], &NoPortals, &PhysicsConfig::default());

        assert_eq!(res.velocity, motion.velocity);
        assert!(!res.landed);
        assert!(res.blocked.is_empty());
    }

    #[test]
    fn test_landing_zeroes_only_y() {
        // Bottom at y = 0.05, falling 0.1 puts the probe into the floor
        let motion = player_at(Vec3::new(0.0, 0.55, 0.0), Vec3::new(0.1, -0.1, -0.05));
        let res = CollisionResolver::resolve(&motion, &[floor()], &NoPortals, &PhysicsConfig::default());

        assert_eq!(res.velocity, Vec3::new(0.1, 0.0, -0.05));
        assert!(res.landed);
        assert!(!res.hard_landing);
        assert_eq!(res.blocked, BlockedAxes::Y);
    }

    #[test]
    fn test_hard_landing_threshold() {
        let config = PhysicsConfig::default();
        let fast = player_at(Vec3::new(0.0, 0.6, 0.0), Vec3::new(0.0, -0.5, 0.0));
        let res = CollisionResolver::resolve(&fast, &[floor()], &NoPortals, &config);
        assert!(res.landed);
        assert!(res.hard_landing);

        let slow = player_at(Vec3::new(0.0, 0.6, 0.0), Vec3::new(0.0, -0.15, 0.0));
        let res = CollisionResolver::resolve(&slow, &[floor()], &NoPortals, &config);
        assert!(res.landed);
        assert!(!res.hard_landing);
    }

    #[test]
    fn test_ceiling_zeroes_y_without_landing() {
        let ceiling = BoxCollider::new(Vec3::new(0.0, 2.5, 0.0), Vec3::new(20.0, 1.0, 20.0));
        let motion = player_at(Vec3::new(0.0, 1.4, 0.0), Vec3::new(0.0, 0.2, 0.0));
        let res = CollisionResolver::resolve(&motion, &[ceiling], &NoPortals, &PhysicsConfig::default());

        assert_eq!(res.velocity.y, 0.0);
        assert!(!res.landed);
    }

    #[test]
    fn test_wall_blocks_x_only() {
        // Wall face at x = 1
        let wall = BoxCollider::new(Vec3::new(1.5, 1.0, 0.0), Vec3::new(1.0, 4.0, 20.0));
        let motion = player_at(Vec3::new(0.7, 1.0, 0.0), Vec3::new(0.1, 0.0, 0.3));
        let res = CollisionResolver::resolve(&motion, &[wall], &NoPortals, &PhysicsConfig::default());

        assert_eq!(res.velocity, Vec3::new(0.0, 0.0, 0.3));
        assert_eq!(res.blocked, BlockedAxes::X);
    }

    #[test]
    fn test_wall_order_does_not_matter() {
        let wall = BoxCollider::new(Vec3::new(1.5, 1.0, 0.0), Vec3::new(1.0, 4.0, 20.0));
        let motion = player_at(Vec3::new(0.7, 0.55, 0.0), Vec3::new(0.1, -0.1, 0.0));
        let config = PhysicsConfig::default();

        let a = CollisionResolver::resolve(&motion, &[wall, floor()], &NoPortals, &config);
        let b = CollisionResolver::resolve(&motion, &[floor(), wall], &NoPortals, &config);
        assert_eq!(a, b);
        assert_eq!(a.blocked, BlockedAxes::X | BlockedAxes::Y);
    }

    #[test]
    fn test_portal_gate_bypasses_matching_axis() {
        let wall = BoxCollider::new(Vec3::new(1.5, 1.0, 0.0), Vec3::new(1.0, 4.0, 20.0));
        let motion = player_at(Vec3::new(0.7, 1.0, 0.0), Vec3::new(0.1, 0.0, 0.0));
        let config = PhysicsConfig::default();

        let res = CollisionResolver::resolve(&motion, &[wall], &OpenOn(Axis::X), &config);
        assert_eq!(res.velocity.x, 0.1);
        assert_eq!(res.bypassed, BlockedAxes::X);

        // A portal facing along Z does not help an X collision
        let res = CollisionResolver::resolve(&motion, &[wall], &OpenOn(Axis::Z), &config);
        assert_eq!(res.velocity.x, 0.0);
    }

    #[test]
    fn test_bypassed_fall_does_not_land() {
        let motion = player_at(Vec3::new(0.0, 0.6, 0.0), Vec3::new(0.0, -0.5, 0.0));
        let res = CollisionResolver::resolve(&motion, &[floor()], &OpenOn(Axis::Y), &PhysicsConfig::default());

        assert_eq!(res.velocity.y, -0.5);
        assert!(!res.landed);
        assert!(!res.hard_landing);
    }
}
