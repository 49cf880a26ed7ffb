//! Input mapping from raw events to semantic actions
//!
//! Maps mouse buttons and special keys to actions like ShootPortal and Exit.
//! Movement keys (WASD, Space, F5) are NOT mapped here - they go to
//! `KeyboardState` and are polled by the simulation each tick.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Fire a portal; 1 is blue, 2 is orange
    ShootPortal(u32),
    /// Toggle cursor capture (Escape when captured, click when released)
    ToggleCursor,
    /// Exit application (Escape when not captured)
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for movement keys
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        cursor_captured: bool,
    ) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => {
                if cursor_captured {
                    Some(InputAction::ToggleCursor)
                } else {
                    Some(InputAction::Exit)
                }
            }
            _ => None,
        }
    }

    /// Map mouse button to an action
    ///
    /// With the cursor captured, left and right click shoot the blue and
    /// orange portal. Otherwise a left click captures the cursor.
    pub fn map_mouse_button(
        button: MouseButton,
        state: ElementState,
        cursor_captured: bool,
    ) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match (button, cursor_captured) {
            (MouseButton::Left, true) => Some(InputAction::ShootPortal(1)),
            (MouseButton::Right, true) => Some(InputAction::ShootPortal(2)),
            (MouseButton::Left, false) => Some(InputAction::ToggleCursor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_when_captured_releases() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, true);
        assert_eq!(action, Some(InputAction::ToggleCursor));
    }

    #[test]
    fn test_escape_when_released_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, false);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_movement_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD, KeyCode::F5] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed, true);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released, true);
        assert_eq!(action, None);
    }

    #[test]
    fn test_click_to_capture() {
        let action = InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, false);
        assert_eq!(action, Some(InputAction::ToggleCursor));
    }

    #[test]
    fn test_clicks_shoot_when_captured() {
        assert_eq!(
            InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, true),
            Some(InputAction::ShootPortal(1))
        );
        assert_eq!(
            InputMapper::map_mouse_button(MouseButton::Right, ElementState::Pressed, true),
            Some(InputAction::ShootPortal(2))
        );
    }

    #[test]
    fn test_right_click_uncaptured_and_releases_ignored() {
        assert_eq!(InputMapper::map_mouse_button(MouseButton::Right, ElementState::Pressed, false), None);
        assert_eq!(InputMapper::map_mouse_button(MouseButton::Left, ElementState::Released, true), None);
    }
}
