//! The player body

use portalsim_math::Vec3;
use portalsim_physics::BoxCollider;

/// Health of a freshly spawned player
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Default player box size
pub const PLAYER_SCALE: Vec3 = Vec3::new(0.5, 1.0, 0.5);

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Box center
    pub position: Vec3,
    /// Displacement requested for the current tick
    pub velocity: Vec3,
    /// Pitch (x) and yaw (y) in radians
    pub rotation: Vec3,
    /// Full box size
    pub scale: Vec3,
    pub grounded: bool,
    alive: bool,
    health: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Player {
    /// Spawn a player standing at `position`
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: PLAYER_SCALE,
            grounded: false,
            alive: true,
            health: PLAYER_MAX_HEALTH,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Take damage; dies when health reaches zero
    pub fn harm(&mut self, amount: i32) {
        self.health -= amount;
        if self.health <= 0 {
            self.kill();
        }
    }

    pub fn kill(&mut self) {
        self.health = 0;
        self.alive = false;
    }

    /// Restore full health and bring the player back to life
    pub fn revive(&mut self) {
        self.health = PLAYER_MAX_HEALTH;
        self.alive = true;
    }

    /// Current speed in units per tick
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Box at the current position
    pub fn collider(&self) -> BoxCollider {
        BoxCollider::new(self.position, self.scale)
    }

    /// Box at `position + velocity`
    pub fn provisional_collider(&self) -> BoxCollider {
        BoxCollider::new(self.position + self.velocity, self.scale)
    }
}
