//! Input handling: platform-agnostic events, per-device state machines,
//! and keyboard layout tables.
//!
//! Each device class (mouse, touch, keyboard) keeps its own state so a
//! quirk in one path cannot corrupt another's velocity contributions.

/// Platform-agnostic input events.
pub mod event;
/// Keyboard layout tables and held-key state.
pub mod keyboard;
/// Mouse drag accumulation and the click disambiguator.
pub(crate) mod mouse;
/// Touch gesture mode gate and tap tracker.
pub(crate) mod touch;

/// Adapter converting winit window events into [`InputEvent`]s.
#[cfg(feature = "winit")]
pub mod winit;

pub use event::{InputEvent, Key, MouseButton};
pub use keyboard::KeyboardLayout;
