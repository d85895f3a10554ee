//! Touch navigation gestures and tap classification.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::control::velocity::VelocityState;

/// Single-finger rotate rate.
const TOUCH_ROTATE_RATE: f32 = 0.3;
/// Two-finger same-direction pan rate.
const TOUCH_PAN_RATE: f32 = 0.2;
/// Pinch-zoom rate, applied on top of the scene zoom rate.
const TOUCH_ZOOM_RATE: f32 = 0.05;
/// A gesture mode switch must hold this long before it is acted on.
const MODE_DWELL: Duration = Duration::from_millis(50);

/// Maximum duration of a tap.
const TAP_INTERVAL: Duration = Duration::from_millis(150);
/// Two taps within this window pair into a double-tap.
const DOUBLE_TAP_INTERVAL: Duration = Duration::from_millis(325);
/// Maximum movement between tap start and end.
const TAP_DISTANCE_PX: f32 = 4.0;

// ── Gesture mode gate ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TouchMode {
    None,
    Rotate,
    Pan,
    Zoom,
}

/// Dwell-gated gesture mode.
///
/// The first claim after a touch start is granted immediately; switching to
/// a *different* mode only takes effect once the new mode has held for the
/// dwell time. This suppresses pan/zoom flapping when two noisy fingers
/// hover near the classification boundary.
#[derive(Debug)]
struct ModeGate {
    mode: TouchMode,
    since: Instant,
}

impl ModeGate {
    fn new(now: Instant) -> Self {
        Self {
            mode: TouchMode::None,
            since: now,
        }
    }

    fn reset(&mut self, now: Instant) {
        self.mode = TouchMode::None;
        self.since = now;
    }

    /// Try to act as `mode` at `now`. Returns true when the mode is
    /// confirmed.
    fn claim(&mut self, mode: TouchMode, now: Instant) -> bool {
        if self.mode == TouchMode::None {
            self.mode = mode;
            return true;
        }
        if self.mode == mode {
            return now.duration_since(self.since) > MODE_DWELL;
        }
        self.mode = mode;
        self.since = now;
        false
    }
}

// ── Navigation (rotate / pan / pinch) ────────────────────────────────────

/// Converts touch movement into velocity impulses.
#[derive(Debug)]
pub(crate) struct TouchNav {
    last: Vec<Vec2>,
    fingers: usize,
    gate: ModeGate,
}

impl TouchNav {
    pub fn new(now: Instant) -> Self {
        Self {
            last: Vec::new(),
            fingers: 0,
            gate: ModeGate::new(now),
        }
    }

    /// Fingers went down; re-anchor tracking and reset the mode gate.
    pub fn on_start(&mut self, touches: &[Vec2], now: Instant) {
        self.last.clear();
        self.last.extend_from_slice(touches);
        self.fingers = touches.len();
        self.gate.reset(now);
    }

    /// Fingers lifted; keep tracking whatever remains.
    pub fn on_end(&mut self, touches: &[Vec2], now: Instant) {
        self.last.clear();
        self.last.extend_from_slice(touches);
        self.fingers = touches.len();
        self.gate.reset(now);
    }

    /// Fingers moved; classify the gesture and write velocity impulses.
    ///
    /// `zoom_rate` is the scene-size-derived zoom rate sampled by the
    /// caller.
    pub fn on_move(
        &mut self,
        touches: &[Vec2],
        now: Instant,
        zoom_rate: f32,
        velocity: &mut VelocityState,
    ) {
        if self.fingers == 1 && touches.len() == 1 {
            if self.gate.claim(TouchMode::Rotate, now) {
                let delta = touches[0] - self.last[0];
                velocity.rotate_vx = delta.y * TOUCH_ROTATE_RATE;
                velocity.rotate_vy = -delta.x * TOUCH_ROTATE_RATE;
            }
        } else if self.fingers == 2 && touches.len() >= 2 {
            let move0 = touches[0] - self.last[0];
            let move1 = touches[1] - self.last[1];
            let panning = move0.dot(move1) > 0.0;

            if panning && self.gate.claim(TouchMode::Pan, now) {
                velocity.pan_vx = move0.x * TOUCH_PAN_RATE;
                velocity.pan_vy = move0.y * TOUCH_PAN_RATE;
            }
            if !panning && self.gate.claim(TouchMode::Zoom, now) {
                let cur = touches[0].distance(touches[1]);
                let prev = self.last[0].distance(self.last[1]);
                velocity.zoom_v =
                    (prev - cur) * zoom_rate * TOUCH_ZOOM_RATE;
            }
        }

        self.last.clear();
        self.last.extend_from_slice(touches);
    }

    /// Forget tracked fingers and the gesture mode; used on deactivation.
    pub fn reset(&mut self, now: Instant) {
        self.last.clear();
        self.fingers = 0;
        self.gate.reset(now);
    }
}

// ── Tap classification ───────────────────────────────────────────────────

/// Outcome of a touch-end fed through the [`TapTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TapDecision {
    /// Not a tap (too slow, too far, or multi-finger).
    None,
    /// A lone tap at the given position.
    Single(Vec2),
    /// Second tap of a pair at the given position.
    Double(Vec2),
}

/// Tracks tap start/end timing and pairs taps into double-taps.
#[derive(Debug, Default)]
pub(crate) struct TapTracker {
    /// Armed when exactly one finger went down cleanly.
    tap_start: Option<(Instant, Vec2)>,
    /// End time of the previous resolved single tap.
    last_tap: Option<Instant>,
}

impl TapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingers went down. Only a clean single-finger press arms a tap.
    pub fn on_start(
        &mut self,
        touches: &[Vec2],
        changed: &[Vec2],
        now: Instant,
    ) {
        if touches.len() == 1 && changed.len() == 1 {
            self.tap_start = Some((now, touches[0]));
        } else {
            self.tap_start = None;
        }
    }

    /// Fingers lifted; classify. A candidate tap must end within
    /// [`TAP_INTERVAL`] of its start and within [`TAP_DISTANCE_PX`] of the
    /// start position — for the second tap of a pair as well.
    pub fn on_end(
        &mut self,
        touches: &[Vec2],
        changed: &[Vec2],
        now: Instant,
    ) -> TapDecision {
        if !touches.is_empty() || changed.len() != 1 {
            return TapDecision::None;
        }
        let Some((start_time, start_pos)) = self.tap_start.take() else {
            return TapDecision::None;
        };
        if now.duration_since(start_time) >= TAP_INTERVAL {
            return TapDecision::None;
        }
        let pos = changed[0];
        if pos.distance(start_pos) >= TAP_DISTANCE_PX {
            return TapDecision::None;
        }

        if let Some(last) = self.last_tap {
            if start_time.duration_since(last) < DOUBLE_TAP_INTERVAL {
                self.last_tap = None;
                return TapDecision::Double(pos);
            }
        }
        self.last_tap = Some(now);
        TapDecision::Single(pos)
    }

    /// Forget any pending pairing; used on deactivation.
    pub fn reset(&mut self) {
        self.tap_start = None;
        self.last_tap = None;
    }
}
