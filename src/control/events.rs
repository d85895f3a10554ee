//! Events the control emits toward its host, and the subscription flags
//! that gate the costly ones.

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::PickHit;

/// A discrete outcome produced by the control and queued for the host.
///
/// Events accumulate in order inside [`CameraControl`] and are taken with
/// [`CameraControl::drain_events`] once per frame.
///
/// [`CameraControl`]: crate::control::CameraControl
/// [`CameraControl::drain_events`]: crate::control::CameraControl::drain_events
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// The cursor dwells over an entity.
    Hover(PickHit),
    /// Hover pick that also resolved a world-space surface position.
    HoverSurface(PickHit),
    /// The cursor left an entity it was hovering.
    HoverOut {
        /// The entity that was hovered until now.
        entity: crate::scene::EntityId,
    },
    /// The cursor is over empty space.
    HoverOff {
        /// Cursor position in canvas pixels.
        canvas_pos: Vec2,
    },
    /// A click or tap landed on an entity.
    Picked(PickHit),
    /// Click pick that also resolved a world-space surface position.
    PickedSurface(PickHit),
    /// A double-click or double-tap landed on an entity.
    DoublePicked(PickHit),
    /// Double pick that also resolved a world-space surface position.
    DoublePickedSurface(PickHit),
    /// A click or tap landed on empty space.
    PickedNothing {
        /// Click position in canvas pixels.
        canvas_pos: Vec2,
    },
    /// A double-click or double-tap landed on empty space.
    DoublePickedNothing {
        /// Click position in canvas pixels.
        canvas_pos: Vec2,
    },
}

/// Which event families the host wants.
///
/// Hover picking runs a scene query per dwell, and double-click awareness
/// adds commit latency to single clicks, so both stay off unless asked for.
/// Click picking itself is always on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(default)]
pub struct Subscriptions {
    /// Emit [`ControlEvent::Hover`] while the cursor dwells on an entity.
    pub hover: bool,
    /// Emit [`ControlEvent::HoverOut`] when the cursor leaves an entity.
    pub hover_out: bool,
    /// Emit [`ControlEvent::HoverOff`] while the cursor is over empty space.
    pub hover_off: bool,
    /// Resolve surface positions for hover picks and emit
    /// [`ControlEvent::HoverSurface`].
    pub hover_surface: bool,
    /// Resolve surface positions for click picks and emit
    /// [`ControlEvent::PickedSurface`].
    pub picked_surface: bool,
    /// Emit [`ControlEvent::DoublePicked`] family events.
    pub double_picked: bool,
    /// Resolve surface positions for double picks.
    pub double_picked_surface: bool,
    /// Emit [`ControlEvent::DoublePickedNothing`] on empty double picks.
    pub double_picked_nothing: bool,
}

impl Subscriptions {
    /// Whether any hover family event is wanted; hover picking runs only
    /// when this is true.
    #[must_use]
    pub fn any_hover(&self) -> bool {
        self.hover || self.hover_out || self.hover_off || self.hover_surface
    }

    /// Whether any double-pick outcome is observed.
    #[must_use]
    pub fn any_double(&self) -> bool {
        self.double_picked
            || self.double_picked_surface
            || self.double_picked_nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_subscribe_to_nothing() {
        let subs = Subscriptions::default();
        assert!(!subs.any_hover());
        assert!(!subs.any_double());
    }

    #[test]
    fn any_hover_covers_every_hover_flag() {
        for set in 0..4 {
            let mut subs = Subscriptions::default();
            match set {
                0 => subs.hover = true,
                1 => subs.hover_out = true,
                2 => subs.hover_off = true,
                _ => subs.hover_surface = true,
            }
            assert!(subs.any_hover());
        }
    }
}
