//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like ResetRotation, Exit, etc.
//! Rotation keys (A-F, arrows) are NOT mapped here - they go directly to
//! RotationController.

use winit::event::ElementState;
use winit::keyboard::{KeyCode, ModifiersState};

/// Actions triggered by special input (not rotation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape or Ctrl+C)
    Exit,
    /// Zero every rotation angle (0 key)
    ResetRotation,
    /// Show or hide vertex labels (L key)
    ToggleLabels,
    /// Show or hide the coordinate axes (K key)
    ToggleAxes,
    /// Toggle fullscreen mode (F11)
    ToggleFullscreen,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for rotation keys
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        modifiers: ModifiersState,
    ) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyC if modifiers.control_key() => Some(InputAction::Exit),
            KeyCode::Digit0 | KeyCode::Numpad0 => Some(InputAction::ResetRotation),
            KeyCode::KeyL => Some(InputAction::ToggleLabels),
            KeyCode::KeyK => Some(InputAction::ToggleAxes),
            KeyCode::F11 => Some(InputAction::ToggleFullscreen),
            _ => None, // Rotation keys handled by controller
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: KeyCode) -> Option<InputAction> {
        InputMapper::map_keyboard(key, ElementState::Pressed, ModifiersState::empty())
    }

    #[test]
    fn test_escape_exits() {
        assert_eq!(press(KeyCode::Escape), Some(InputAction::Exit));
    }

    #[test]
    fn test_ctrl_c_exits() {
        let action =
            InputMapper::map_keyboard(KeyCode::KeyC, ElementState::Pressed, ModifiersState::CONTROL);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_rotation_keys_not_mapped() {
        for key in [KeyCode::KeyA, KeyCode::KeyC, KeyCode::KeyF, KeyCode::ArrowUp] {
            assert_eq!(press(key), None, "Key {:?} should not be mapped", key);
        }
        let shifted =
            InputMapper::map_keyboard(KeyCode::KeyC, ElementState::Pressed, ModifiersState::SHIFT);
        assert_eq!(shifted, None);
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(
            KeyCode::Escape,
            ElementState::Released,
            ModifiersState::empty(),
        );
        assert_eq!(action, None);
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(press(KeyCode::Digit0), Some(InputAction::ResetRotation));
        assert_eq!(press(KeyCode::KeyL), Some(InputAction::ToggleLabels));
        assert_eq!(press(KeyCode::KeyK), Some(InputAction::ToggleAxes));
        assert_eq!(press(KeyCode::F11), Some(InputAction::ToggleFullscreen));
    }
}
