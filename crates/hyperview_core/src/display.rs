//! Display toggles and the per-frame scene state

use bitflags::bitflags;

use crate::rotation_state::RotationState;

bitflags! {
    /// Optional overlays drawn with the tesseract
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DisplayFlags: u8 {
        /// Annotate each vertex with its rotated 4D coordinates
        const LABELS = 1 << 0;
        /// Draw the four coordinate axes
        const AXES = 1 << 1;
    }
}

impl DisplayFlags {
    /// Build from the two booleans used in configuration
    pub fn from_options(show_labels: bool, show_axes: bool) -> Self {
        let mut flags = DisplayFlags::empty();
        flags.set(DisplayFlags::LABELS, show_labels);
        flags.set(DisplayFlags::AXES, show_axes);
        flags
    }

    /// Flip a flag and return whether it is now set
    pub fn flip(&mut self, flag: DisplayFlags) -> bool {
        self.toggle(flag);
        self.contains(flag)
    }
}

/// Everything input may change between frames
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneState {
    pub rotation: RotationState,
    pub display: DisplayFlags,
}

impl SceneState {
    pub fn new(rotation: RotationState, display: DisplayFlags) -> Self {
        Self { rotation, display }
    }
}
