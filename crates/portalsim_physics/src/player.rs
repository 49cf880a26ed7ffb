//! First-person locomotion
//!
//! Turns mouse motion and movement keys into the player's rotation and the
//! velocity requested for this tick. Collision is handled afterwards by the
//! [`CollisionResolver`](crate::CollisionResolver).

use portalsim_math::{rad, to_direction, Vec3};

use crate::resolver::PhysicsConfig;

/// Pitch is clamped to straight up / straight down
const PITCH_LIMIT_DEGREES: f32 = 90.0;

/// Movement requested by the player for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    /// +1 forward, -1 backward
    pub forward: f32,
    /// +1 right, -1 left
    pub strafe: f32,
    /// Jump held
    pub jump: bool,
}

impl MoveIntent {
    /// Whether any horizontal movement is requested
    pub fn is_moving(&self) -> bool {
        self.forward != 0.0 || self.strafe != 0.0
    }
}

/// Apply mouse look to a pitch/yaw rotation
///
/// Moving the mouse right turns right, moving it down looks down.
pub fn look(rotation: &mut Vec3, delta_x: f32, delta_y: f32, sensitivity: f32) {
    let limit = rad(PITCH_LIMIT_DEGREES);
    rotation.y -= delta_x * sensitivity;
    rotation.x = (rotation.x - delta_y * sensitivity).clamp(-limit, limit);
}

/// Update the requested velocity for one tick
///
/// Horizontal velocity follows the intent in the yaw frame; without input it
/// decays by `config.friction`. A grounded player holding jump leaves the
/// ground. Gravity is applied last and clamped at terminal velocity.
pub fn walk(
    velocity: &mut Vec3,
    grounded: &mut bool,
    yaw: f32,
    intent: &MoveIntent,
    config: &PhysicsConfig,
) {
    if intent.is_moving() {
        let forward = to_direction(Vec3::new(0.0, yaw, 0.0));
        let right = Vec3::new(yaw.cos(), 0.0, -yaw.sin());
        let wish = (forward * intent.forward + right * intent.strafe).normalized() * config.move_speed;
        velocity.x = wish.x;
        velocity.z = wish.z;
    } else {
        let keep = 1.0 - config.friction;
        velocity.x *= keep;
        velocity.z *= keep;
    }

    if intent.jump && *grounded {
        velocity.y = config.jump_velocity;
        *grounded = false;
    }

    velocity.y = (velocity.y - config.gravity).max(-config.terminal_velocity);
}
