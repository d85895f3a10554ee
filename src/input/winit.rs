//! Adapter converting [`winit`] window events into [`InputEvent`]s.
//!
//! winit reports touch contacts one at a time, keyed by finger id, while the
//! control wants the complete set of active points per event. The adapter
//! keeps that set, so it must be stateful and live as long as the window.

use glam::Vec2;
use winit::event::{
    ElementState, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::event::{InputEvent, Key, MouseButton};

/// Pixel-delta wheel events (trackpads) are scaled down to line-ish units.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// Stateful winit-to-[`InputEvent`] converter.
#[derive(Debug, Default)]
pub struct WinitAdapter {
    touches: Vec<(u64, Vec2)>,
}

impl WinitAdapter {
    /// Create an adapter with no active touches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one window event. Returns `None` for events the control
    /// does not react to.
    pub fn convert(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::CursorEntered { .. } => {
                Some(InputEvent::PointerEntered)
            }
            WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    _ => return None,
                };
                Some(InputEvent::MouseButton {
                    button,
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * PIXEL_SCROLL_SCALE
                    }
                };
                Some(InputEvent::Wheel { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let key = map_key(code)?;
                Some(InputEvent::KeyboardKey {
                    key,
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                Some(InputEvent::ModifiersChanged {
                    // Platform command/meta acts as control.
                    ctrl: state.control_key() || state.super_key(),
                    alt: state.alt_key(),
                    shift: state.shift_key(),
                })
            }
            WindowEvent::Touch(touch) => Some(self.convert_touch(touch)),
            _ => None,
        }
    }

    fn convert_touch(&mut self, touch: &Touch) -> InputEvent {
        let pos =
            Vec2::new(touch.location.x as f32, touch.location.y as f32);
        self.track_touch(touch.id, pos, touch.phase)
    }

    fn track_touch(
        &mut self,
        id: u64,
        pos: Vec2,
        phase: TouchPhase,
    ) -> InputEvent {
        match phase {
            TouchPhase::Started => {
                self.touches.push((id, pos));
                InputEvent::TouchStart {
                    touches: self.positions(),
                    changed: vec![pos],
                }
            }
            TouchPhase::Moved => {
                if let Some(entry) =
                    self.touches.iter_mut().find(|(tid, _)| *tid == id)
                {
                    entry.1 = pos;
                }
                InputEvent::TouchMove {
                    touches: self.positions(),
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|(tid, _)| *tid != id);
                InputEvent::TouchEnd {
                    touches: self.positions(),
                    changed: vec![pos],
                }
            }
        }
    }

    fn positions(&self) -> Vec<Vec2> {
        self.touches.iter().map(|(_, pos)| *pos).collect()
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyZ => Key::Z,
        KeyCode::KeyX => Key::X,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::NumpadAdd | KeyCode::Equal => Key::Plus,
        KeyCode::NumpadSubtract | KeyCode::Minus => Key::Minus,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key(KeyCode::KeyP), None);
        assert_eq!(map_key(KeyCode::Digit5), Some(Key::Digit5));
        assert_eq!(map_key(KeyCode::Equal), Some(Key::Plus));
    }

    #[test]
    fn touch_set_tracks_finger_lifecycle() {
        let mut adapter = WinitAdapter::new();

        let start = adapter.track_touch(
            1,
            Vec2::new(10.0, 0.0),
            TouchPhase::Started,
        );
        assert_eq!(
            start,
            InputEvent::TouchStart {
                touches: vec![Vec2::new(10.0, 0.0)],
                changed: vec![Vec2::new(10.0, 0.0)],
            }
        );

        let _ = adapter.track_touch(
            2,
            Vec2::new(50.0, 0.0),
            TouchPhase::Started,
        );
        let moved =
            adapter.track_touch(1, Vec2::new(20.0, 0.0), TouchPhase::Moved);
        assert_eq!(
            moved,
            InputEvent::TouchMove {
                touches: vec![Vec2::new(20.0, 0.0), Vec2::new(50.0, 0.0)],
            }
        );

        let end =
            adapter.track_touch(1, Vec2::new(20.0, 0.0), TouchPhase::Ended);
        assert_eq!(
            end,
            InputEvent::TouchEnd {
                touches: vec![Vec2::new(50.0, 0.0)],
                changed: vec![Vec2::new(20.0, 0.0)],
            }
        );
    }
}
