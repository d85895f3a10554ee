//! Keyboard layout tables and held-key state.

use rustc_hash::FxHashSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::event::Key;

/// Physical keyboard layout, selecting which letter keys drive panning and
/// yaw.
///
/// Serialized as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// keyboard_layout = "azerty"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardLayout {
    /// W/A/S/D panning, Q/E yaw.
    #[default]
    Qwerty,
    /// Z/Q/S/D panning, A/E yaw.
    Azerty,
}

/// Which held keys pan the camera along each local axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PanKeys {
    pub front: Key,
    pub back: Key,
    pub left: Key,
    pub right: Key,
    pub up: Key,
    pub down: Key,
}

impl KeyboardLayout {
    /// Literal pan-key table for this layout.
    ///
    /// These are carried over verbatim from the reference bindings,
    /// including the historical Z-for-up mapping on QWERTY.
    pub(crate) fn pan_keys(self) -> PanKeys {
        match self {
            Self::Qwerty => PanKeys {
                front: Key::W,
                back: Key::S,
                left: Key::A,
                right: Key::D,
                up: Key::Z,
                down: Key::X,
            },
            Self::Azerty => PanKeys {
                front: Key::Z,
                back: Key::S,
                left: Key::Q,
                right: Key::D,
                up: Key::W,
                down: Key::X,
            },
        }
    }

    /// (rotate-left, rotate-right) yaw keys for this layout.
    pub(crate) fn yaw_keys(self) -> (Key, Key) {
        match self {
            Self::Qwerty => (Key::Q, Key::E),
            Self::Azerty => (Key::A, Key::E),
        }
    }
}

/// Held-key and modifier state, plus the pointer-over and keyboard-focus
/// gates.
#[derive(Debug, Default)]
pub(crate) struct KeyState {
    held: FxHashSet<Key>,
    /// Control held; platform command/meta is treated as control.
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Pointer is over the canvas. Keyboard impulses only apply while true.
    pub over: bool,
    /// Host gate: false while a text-input element has focus.
    pub keyboard_active: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            keyboard_active: true,
            ..Self::default()
        }
    }

    pub fn set_pressed(&mut self, key: Key, pressed: bool) {
        if pressed {
            let _ = self.held.insert(key);
        } else {
            let _ = self.held.remove(&key);
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop everything held; used on deactivation.
    pub fn clear(&mut self) {
        self.held.clear();
        self.ctrl = false;
        self.alt = false;
        self.shift = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qwerty_pan_table() {
        let keys = KeyboardLayout::Qwerty.pan_keys();
        assert_eq!(keys.front, Key::W);
        assert_eq!(keys.left, Key::A);
        // Z doubles as move-up on QWERTY; preserved from the reference
        // bindings.
        assert_eq!(keys.up, Key::Z);
        assert_eq!(keys.down, Key::X);
    }

    #[test]
    fn azerty_pan_table_remaps_letters() {
        let keys = KeyboardLayout::Azerty.pan_keys();
        assert_eq!(keys.front, Key::Z);
        assert_eq!(keys.left, Key::Q);
        assert_eq!(keys.up, Key::W);
        assert_eq!(KeyboardLayout::Azerty.yaw_keys(), (Key::A, Key::E));
    }

    #[test]
    fn held_keys_round_trip() {
        let mut state = KeyState::new();
        assert!(state.keyboard_active);
        state.set_pressed(Key::W, true);
        assert!(state.is_down(Key::W));
        state.set_pressed(Key::W, false);
        assert!(!state.is_down(Key::W));
    }
}
