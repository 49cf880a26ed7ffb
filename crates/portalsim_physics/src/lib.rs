//! Box physics for portalsim
//!
//! This crate provides the collision side of the simulation:
//! - Axis-aligned box colliders and ray/box intersection
//! - Per-axis motion resolution against static walls, with a hook that lets
//!   open portals suspend collision
//! - First-person locomotion (mouse look, walking, jumping, gravity)

pub mod collision;
pub mod player;
pub mod ray;
pub mod resolver;
pub mod shapes;

// Re-export commonly used types
pub use collision::{collides_with_any, BlockedAxes};
pub use player::{look, walk, MoveIntent};
pub use ray::Ray;
pub use resolver::{CollisionResolver, Motion, NoPortals, PhysicsConfig, PortalGate, Resolution};
pub use shapes::BoxCollider;
