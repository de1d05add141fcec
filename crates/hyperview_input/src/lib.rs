//! Keyboard rotation control
//!
//! This crate maps key presses onto per-plane rotation rates.

mod rotation_controller;

pub use rotation_controller::{binding_for, KeyBinding, RotationController};
