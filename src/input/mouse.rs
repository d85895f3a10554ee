//! Mouse drag accumulation and the single/double-click disambiguator.

use glam::Vec2;
use web_time::{Duration, Instant};

/// Per-pixel rate applied to raw mouse deltas as they accumulate.
pub(crate) const MOUSE_ORBIT_RATE: f32 = 0.4;
/// Rate applied when draining accumulated deltas into pan velocity.
pub(crate) const MOUSE_PAN_RATE: f32 = 0.4;
/// Multiplier on the scene zoom rate for wheel zoom.
pub(crate) const MOUSE_ZOOM_RATE: f32 = 0.8;
/// Forward-pan velocity per wheel notch in first-person mode.
pub(crate) const MOUSE_WHEEL_PAN_RATE: f32 = 1.4;

/// Movement beyond this many pixels between down and up is a drag, not a
/// click.
const CLICK_JITTER_PX: f32 = 3.0;
/// How long a first click waits for a possible second one.
const CLICK_COMMIT: Duration = Duration::from_millis(250);

// ── Drag accumulation ────────────────────────────────────────────────────

/// Accumulates pointer movement while a drag button is held.
///
/// Deltas pile up across however many move events arrive between ticks and
/// are drained exactly once per tick by the integrator.
#[derive(Debug, Default)]
pub(crate) struct DragAccumulator {
    last: Vec2,
    delta: Vec2,
    pub left_down: bool,
    pub right_down: bool,
}

impl DragAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A drag button went down at `pos`; anchor and restart accumulation.
    pub fn begin(&mut self, pos: Vec2) {
        self.last = pos;
        self.delta = Vec2::ZERO;
    }

    /// All buttons released, or the pointer crossed the canvas boundary.
    pub fn reset(&mut self) {
        self.delta = Vec2::ZERO;
    }

    /// Whether any drag button is currently held.
    pub fn dragging(&self) -> bool {
        self.left_down || self.right_down
    }

    /// Pointer moved; accumulate if a drag is in progress.
    pub fn accumulate(&mut self, pos: Vec2) {
        if self.dragging() {
            self.delta += (pos - self.last) * MOUSE_ORBIT_RATE;
        }
        self.last = pos;
    }

    /// Take the accumulated delta, leaving zero behind.
    pub fn drain(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }
}

// ── Click disambiguation ─────────────────────────────────────────────────

/// Outcome of feeding a mouse-up (or a tick poll) to the [`ClickArbiter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ClickDecision {
    /// Nothing to resolve.
    None,
    /// Resolve as a single pick at the given position.
    Single(Vec2),
    /// Resolve as a double pick at the given position.
    Double(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ClickState {
    Idle,
    /// A first click is waiting for either a second click or its deadline.
    PendingSingle { deadline: Instant, pos: Vec2 },
}

/// Explicit single/double-click automaton.
///
/// Guarantees exactly one resolution per click gesture: a second click
/// before the commit deadline cancels the pending single and resolves as a
/// double; otherwise the tick poll commits the single once the deadline
/// passes.
#[derive(Debug)]
pub(crate) struct ClickArbiter {
    state: ClickState,
    down_pos: Vec2,
}

impl ClickArbiter {
    pub fn new() -> Self {
        Self {
            state: ClickState::Idle,
            down_pos: Vec2::ZERO,
        }
    }

    /// Record where the button went down, for jitter rejection on release.
    pub fn on_mouse_down(&mut self, pos: Vec2) {
        self.down_pos = pos;
    }

    /// Classify a button release.
    ///
    /// `double_aware` is false when nothing observes double-pick outcomes;
    /// singles then resolve immediately, skipping the commit latency.
    pub fn on_mouse_up(
        &mut self,
        now: Instant,
        pos: Vec2,
        double_aware: bool,
    ) -> ClickDecision {
        let moved = (pos - self.down_pos).abs();
        if moved.x > CLICK_JITTER_PX || moved.y > CLICK_JITTER_PX {
            // Drag, not a click. A pending single still commits on its own.
            return ClickDecision::None;
        }
        if !double_aware {
            return ClickDecision::Single(pos);
        }
        match self.state {
            ClickState::Idle => {
                self.state = ClickState::PendingSingle {
                    deadline: now + CLICK_COMMIT,
                    pos,
                };
                ClickDecision::None
            }
            ClickState::PendingSingle { .. } => {
                self.state = ClickState::Idle;
                ClickDecision::Double(pos)
            }
        }
    }

    /// Commit an expired pending single. Called once per tick.
    pub fn poll(&mut self, now: Instant) -> ClickDecision {
        if let ClickState::PendingSingle { deadline, pos } = self.state {
            if now >= deadline {
                self.state = ClickState::Idle;
                return ClickDecision::Single(pos);
            }
        }
        ClickDecision::None
    }

    /// Cancel any pending resolution; used on deactivation.
    pub fn reset(&mut self) {
        self.state = ClickState::Idle;
    }
}
