//! Key state tracking for first-person controls
//!
//! Controls:
//! - W/S: Forward/backward
//! - A/D: Strafe left/right
//! - Space: Jump
//! - F5: Reload the current map
//! - Mouse motion: Look

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Logical keys the simulation asks about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
    Reload,
}

impl Key {
    /// Logical key bound to a physical key, if any
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(Key::Forward),
            KeyCode::KeyS => Some(Key::Backward),
            KeyCode::KeyA => Some(Key::Left),
            KeyCode::KeyD => Some(Key::Right),
            KeyCode::Space => Some(Key::Jump),
            KeyCode::F5 => Some(Key::Reload),
            _ => None,
        }
    }
}

/// Polled input as seen by one simulation tick
pub trait InputSource {
    /// Whether the key is currently held
    fn is_key_down(&self, key: Key) -> bool;

    /// Mouse motion accumulated since the last frame
    fn mouse_delta(&self) -> (f32, f32);
}

/// Input source fed from window events
#[derive(Debug, Default)]
pub struct KeyboardState {
    down: HashSet<Key>,
    pending_x: f32,
    pending_y: f32,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is bound to a logical key.
    pub fn process_keyboard(&mut self, code: KeyCode, state: ElementState) -> bool {
        let Some(key) = Key::from_key_code(code) else {
            return false;
        };

        match state {
            ElementState::Pressed => self.down.insert(key),
            ElementState::Released => self.down.remove(&key),
        };
        true
    }

    /// Process raw mouse movement
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_x += delta_x as f32;
        self.pending_y += delta_y as f32;
    }

    /// Reset accumulated mouse movement; call once per frame after the update
    pub fn end_frame(&mut self) {
        self.pending_x = 0.0;
        self.pending_y = 0.0;
    }

    /// Release every key (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.down.clear();
        self.end_frame();
    }
}

impl InputSource for KeyboardState {
    fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    fn mouse_delta(&self) -> (f32, f32) {
        (self.pending_x, self.pending_y)
    }
}
