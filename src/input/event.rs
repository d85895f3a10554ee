//! Platform-agnostic input events.
//!
//! These are fed into
//! [`CameraControl::handle_event`](crate::control::CameraControl::handle_event),
//! which converts them into velocity impulses, pick requests, and discrete
//! gestures. Hosts on winit can produce them through the adapter in
//! `input::winit` (behind the `winit` feature); other platforms construct
//! them directly.

use glam::Vec2;

/// A normalized input event from any device.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute canvas position, in pixels.
    CursorMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel; positive is toward the scene (zoom in). Only the sign
    /// is used — magnitude is derived from scene size.
    Wheel {
        /// Scroll amount.
        delta: f32,
    },
    /// Pointer entered the canvas.
    PointerEntered,
    /// Pointer left the canvas.
    PointerLeft,
    /// Keyboard key pressed or released.
    KeyboardKey {
        /// Which key changed.
        key: Key,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Control (or platform command) key held.
        ctrl: bool,
        /// Alt key held.
        alt: bool,
        /// Shift key held.
        shift: bool,
    },
    /// One or more touch points went down. `touches` is the complete set of
    /// active points, `changed` the points that changed in this event.
    TouchStart {
        /// All active touch positions, in canvas pixels.
        touches: Vec<Vec2>,
        /// Positions that started in this event.
        changed: Vec<Vec2>,
    },
    /// Active touch points moved.
    TouchMove {
        /// All active touch positions, in canvas pixels.
        touches: Vec<Vec2>,
    },
    /// One or more touch points lifted.
    TouchEnd {
        /// Touch positions still active after the event.
        touches: Vec<Vec2>,
        /// Positions that lifted in this event.
        changed: Vec<Vec2>,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button — orbit drag.
    Left,
    /// Secondary (right) mouse button — pan drag.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Keys the control reacts to. Adapters drop any key not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Letter W.
    W,
    /// Letter A.
    A,
    /// Letter S.
    S,
    /// Letter D.
    D,
    /// Letter Q.
    Q,
    /// Letter E.
    E,
    /// Letter Z.
    Z,
    /// Letter X.
    X,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Plus / numpad add — zoom in.
    Plus,
    /// Minus / numpad subtract — zoom out.
    Minus,
    /// Digit row 1 — canonical right view.
    Digit1,
    /// Digit row 2 — canonical back view.
    Digit2,
    /// Digit row 3 — canonical left view.
    Digit3,
    /// Digit row 4 — canonical front view.
    Digit4,
    /// Digit row 5 — canonical top view.
    Digit5,
    /// Digit row 6 — canonical bottom view.
    Digit6,
}
