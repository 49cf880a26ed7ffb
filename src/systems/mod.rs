//! Application systems
//!
//! The per-tick world simulation and the collaborators it drives.

mod audio;
mod render;
mod simulation;

pub use audio::LogAudio;
pub use render::{HeadlessRenderer, Renderer};
pub use simulation::WorldSimulator;
