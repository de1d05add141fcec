//! Rotation controller for keyboard-driven plane rotation
//!
//! Controls:
//! - A..F: rotate in XY, XZ, XW, YZ, YW, ZW (Shift reverses)
//! - Left/Right: XZ backward/forward
//! - Up/Down: YZ backward/forward
//!
//! A plane keeps rotating while its key is held and stops on release.

use hyperview_core::{RotationPlane, RotationRate, RotationState};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, ModifiersState};

/// What a rotation key does when pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyBinding {
    /// Letter key: forward, or backward with Shift
    Letter(RotationPlane),
    /// Arrow key: fixed direction regardless of modifiers
    Arrow(RotationPlane, RotationRate),
}

impl KeyBinding {
    pub fn plane(self) -> RotationPlane {
        match self {
            KeyBinding::Letter(plane) | KeyBinding::Arrow(plane, _) => plane,
        }
    }
}

/// Binding of a key, if it drives a rotation plane
pub fn binding_for(key: KeyCode) -> Option<KeyBinding> {
    use KeyBinding::*;

    let binding = match key {
        KeyCode::KeyA => Letter(RotationPlane::XY),
        KeyCode::KeyB => Letter(RotationPlane::XZ),
        KeyCode::KeyC => Letter(RotationPlane::XW),
        KeyCode::KeyD => Letter(RotationPlane::YZ),
        KeyCode::KeyE => Letter(RotationPlane::YW),
        KeyCode::KeyF => Letter(RotationPlane::ZW),
        KeyCode::ArrowRight => Arrow(RotationPlane::XZ, RotationRate::Positive),
        KeyCode::ArrowLeft => Arrow(RotationPlane::XZ, RotationRate::Negative),
        KeyCode::ArrowDown => Arrow(RotationPlane::YZ, RotationRate::Positive),
        KeyCode::ArrowUp => Arrow(RotationPlane::YZ, RotationRate::Negative),
        _ => return None,
    };
    Some(binding)
}

/// Turns key events into rotation rates
#[derive(Clone, Debug, Default)]
pub struct RotationController {
    modifiers: ModifiersState,
}

impl RotationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the current modifier keys
    pub fn process_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    pub fn modifiers(&self) -> ModifiersState {
        self.modifiers
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a rotation key and `rotation` was updated.
    pub fn process_keyboard(
        &mut self,
        key: KeyCode,
        state: ElementState,
        rotation: &mut RotationState,
    ) -> bool {
        let Some(binding) = binding_for(key) else {
            return false;
        };

        // Ctrl+C is reserved for quitting; releasing C always stops XW
        if key == KeyCode::KeyC && state == ElementState::Pressed && self.modifiers.control_key() {
            return false;
        }

        let plane = binding.plane();
        let rate = match (state, binding) {
            (ElementState::Released, _) => RotationRate::Stopped,
            (ElementState::Pressed, KeyBinding::Letter(_)) => {
                RotationRate::forward(self.modifiers.shift_key())
            }
            (ElementState::Pressed, KeyBinding::Arrow(_, rate)) => rate,
        };

        if rotation.rate(plane) != rate {
            log::debug!("{:?} rate -> {:?}", plane, rate);
        }
        rotation.set_rate(plane, rate);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: &mut RotationController, key: KeyCode, rotation: &mut RotationState) -> bool {
        c.process_keyboard(key, ElementState::Pressed, rotation)
    }

    fn release(c: &mut RotationController, key: KeyCode, rotation: &mut RotationState) -> bool {
        c.process_keyboard(key, ElementState::Released, rotation)
    }

    #[test]
    fn test_letters_map_to_planes_in_order() {
        let keys = [KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE, KeyCode::KeyF];
        for (key, plane) in keys.into_iter().zip(RotationPlane::ALL) {
            assert_eq!(binding_for(key), Some(KeyBinding::Letter(plane)));
        }
    }

    #[test]
    fn test_press_and_release() {
        let mut c = RotationController::new();
        let mut rotation = RotationState::new();

        assert!(press(&mut c, KeyCode::KeyA, &mut rotation));
        assert_eq!(rotation.rate(RotationPlane::XY), RotationRate::Positive);

        assert!(release(&mut c, KeyCode::KeyA, &mut rotation));
        assert_eq!(rotation.rate(RotationPlane::XY), RotationRate::Stopped);
    }

    #[test]
    fn test_shift_reverses() {
        let mut c = RotationController::new();
        let mut rotation = RotationState::new();
        c.process_modifiers(ModifiersState::SHIFT);

        press(&mut c, KeyCode::KeyF, &mut rotation);
        assert_eq!(rotation.rate(RotationPlane::ZW), RotationRate::Negative);
    }

    #[test]
    fn test_arrows_ignore_shift() {
        let mut c = RotationController::new();
        let mut rotation = RotationState::new();
        c.process_modifiers(ModifiersState::SHIFT);

        press(&mut c, KeyCode::ArrowUp, &mut rotation);
        press(&mut c, KeyCode::ArrowRight, &mut rotation);
        assert_eq!(rotation.rate(RotationPlane::YZ), RotationRate::Negative);
        assert_eq!(rotation.rate(RotationPlane::XZ), RotationRate::Positive);

        release(&mut c, KeyCode::ArrowUp, &mut rotation);
        assert_eq!(rotation.rate(RotationPlane::YZ), RotationRate::Stopped);
    }

    #[test]
    fn test_ctrl_c_leaves_rates_alone() {
        let mut c = RotationController::new();
        let mut rotation = RotationState::new();
        c.process_modifiers(ModifiersState::CONTROL);

        assert!(!press(&mut c, KeyCode::KeyC, &mut rotation));
        assert!(!rotation.is_rotating());
    }

    #[test]
    fn test_release_under_ctrl_stops_rotation() {
        let mut c = RotationController::new();
        let mut rotation = RotationState::new();

        press(&mut c, KeyCode::KeyC, &mut rotation);
        assert_eq!(rotation.rate(RotationPlane::XW), RotationRate::Positive);

        c.process_modifiers(ModifiersState::CONTROL);
        assert!(release(&mut c, KeyCode::KeyC, &mut rotation));
        assert_eq!(rotation.rate(RotationPlane::XW), RotationRate::Stopped);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut c = RotationController::new();
        let mut rotation = RotationState::new();
        assert!(!press(&mut c, KeyCode::KeyZ, &mut rotation));
        assert!(!press(&mut c, KeyCode::Digit0, &mut rotation));
        assert!(!rotation.is_rotating());
    }
}
