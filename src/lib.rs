//! portalsim: per-frame world simulation for a first-person portal puzzle game
//!
//! The heavy lifting lives in the workspace crates; this crate wires them
//! together behind [`systems::WorldSimulator`] and loads [`config::AppConfig`].

pub mod config;
pub mod input;
pub mod systems;
