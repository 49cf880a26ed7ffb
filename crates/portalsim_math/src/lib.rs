//! 3D Mathematics Library
//!
//! Vector and angle types shared by the portalsim crates.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Axis`] - World axis selector used by per-axis collision
//! - [`angle`] - Degree to radian conversion, wrapping and rotation → direction

mod vec3;
pub mod angle;

pub use vec3::{Axis, Vec3};
pub use angle::{angle_eq, rad, to_direction, wrap_angle};
