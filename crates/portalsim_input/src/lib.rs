//! First-person input handling
//!
//! This crate turns winit keyboard and mouse events into the polled key
//! state the simulation reads once per tick.

mod keyboard_state;

pub use keyboard_state::{InputSource, Key, KeyboardState};
