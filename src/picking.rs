//! Deferred hover picking and shared pick resolution.
//!
//! Cursor movement only records the latest position and sets a dirty flag;
//! the actual scene query happens at most once per tick, so a burst of move
//! events between frames costs one pick.

use glam::Vec2;

use crate::control::events::{ControlEvent, Subscriptions};
use crate::scene::{EntityId, PickHit, PickRequest, SceneView};

/// Coalesces hover pick requests and tracks hover enter/leave state.
#[derive(Debug, Default)]
pub(crate) struct PickCoordinator {
    cursor: Vec2,
    need_pick: bool,
    last_hovered: Option<EntityId>,
}

impl PickCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest known cursor position.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Cursor moved; remember where and mark the hover pick dirty.
    pub fn set_cursor(&mut self, pos: Vec2) {
        self.cursor = pos;
        self.need_pick = true;
    }

    /// Run the deferred hover pick if one is pending and anything observes
    /// hover outcomes. Called once per tick.
    pub fn evaluate(
        &mut self,
        scene: &impl SceneView,
        subs: &Subscriptions,
        events: &mut Vec<ControlEvent>,
    ) {
        if !self.need_pick || !subs.any_hover() {
            return;
        }
        self.need_pick = false;

        let request = PickRequest {
            canvas_pos: self.cursor,
            surface: subs.hover_surface,
        };
        match scene.pick(&request) {
            Some(hit) => {
                // Hover fires once per entity; hover-surface fires on every
                // evaluation that resolved a world position.
                if self.last_hovered != Some(hit.entity) {
                    if let Some(old) = self.last_hovered.take() {
                        if subs.hover_out {
                            events.push(ControlEvent::HoverOut { entity: old });
                        }
                    }
                    self.last_hovered = Some(hit.entity);
                    if subs.hover {
                        events.push(ControlEvent::Hover(hit.clone()));
                    }
                }
                if subs.hover_surface && hit.world_pos.is_some() {
                    events.push(ControlEvent::HoverSurface(hit));
                }
            }
            None => {
                if let Some(old) = self.last_hovered.take() {
                    if subs.hover_out {
                        events.push(ControlEvent::HoverOut { entity: old });
                    }
                }
                if subs.hover_off {
                    events.push(ControlEvent::HoverOff {
                        canvas_pos: self.cursor,
                    });
                }
            }
        }
    }

    /// Run a fresh pick for a click or tap at `pos`.
    ///
    /// Click picks never reuse the hover result: the hover pick may be
    /// stale or suppressed entirely when no hover subscription is active.
    pub fn resolve_at(
        &self,
        pos: Vec2,
        surface: bool,
        scene: &impl SceneView,
    ) -> Option<PickHit> {
        let request = PickRequest {
            canvas_pos: pos,
            surface,
        };
        scene.pick(&request)
    }

    /// Forget hover state and pending work; used on deactivation. The
    /// pointer leaving the canvas keeps hover state, so re-entering over
    /// the same entity does not re-fire hover.
    pub fn clear(&mut self) {
        self.need_pick = false;
        self.last_hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubScene;

    fn hover_subs() -> Subscriptions {
        Subscriptions {
            hover: true,
            hover_out: true,
            hover_off: true,
            ..Subscriptions::default()
        }
    }

    #[test]
    fn move_burst_costs_one_pick() {
        let scene = StubScene::hitting(7);
        let mut picking = PickCoordinator::new();
        let mut events = Vec::new();
        picking.set_cursor(Vec2::new(1.0, 1.0));
        picking.set_cursor(Vec2::new(2.0, 2.0));
        picking.set_cursor(Vec2::new(3.0, 3.0));
        picking.evaluate(&scene, &hover_subs(), &mut events);
        assert_eq!(scene.pick_count(), 1);
        // Nothing pending afterwards.
        picking.evaluate(&scene, &hover_subs(), &mut events);
        assert_eq!(scene.pick_count(), 1);
    }

    #[test]
    fn no_pick_without_hover_subscription() {
        let scene = StubScene::hitting(7);
        let mut picking = PickCoordinator::new();
        let mut events = Vec::new();
        picking.set_cursor(Vec2::ZERO);
        picking.evaluate(&scene, &Subscriptions::default(), &mut events);
        assert_eq!(scene.pick_count(), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn dwelling_on_one_entity_emits_hover_once() {
        let scene = StubScene::hitting(4);
        let mut picking = PickCoordinator::new();
        let mut events = Vec::new();
        picking.set_cursor(Vec2::ZERO);
        picking.evaluate(&scene, &hover_subs(), &mut events);
        picking.set_cursor(Vec2::new(0.5, 0.0));
        picking.evaluate(&scene, &hover_subs(), &mut events);
        let hovers = events
            .iter()
            .filter(|e| matches!(e, ControlEvent::Hover(_)))
            .count();
        assert_eq!(hovers, 1);
        assert!(!events
            .iter()
            .any(|e| matches!(e, ControlEvent::HoverOut { .. })));
    }

    #[test]
    fn hover_surface_repeats_while_hover_does_not() {
        let scene = StubScene::hitting(4);
        let mut picking = PickCoordinator::new();
        let mut events = Vec::new();
        let subs = Subscriptions {
            hover: true,
            hover_surface: true,
            ..Subscriptions::default()
        };
        for step in 0..3_u8 {
            picking.set_cursor(Vec2::new(f32::from(step), 0.0));
            picking.evaluate(&scene, &subs, &mut events);
        }
        let hovers = events
            .iter()
            .filter(|e| matches!(e, ControlEvent::Hover(_)))
            .count();
        let surfaces = events
            .iter()
            .filter(|e| matches!(e, ControlEvent::HoverSurface(_)))
            .count();
        assert_eq!(hovers, 1);
        assert_eq!(surfaces, 3);
    }

    #[test]
    fn leaving_an_entity_emits_hover_out_then_off() {
        let scene = StubScene::hitting(4);
        let mut picking = PickCoordinator::new();
        let mut events = Vec::new();
        picking.set_cursor(Vec2::ZERO);
        picking.evaluate(&scene, &hover_subs(), &mut events);
        events.clear();

        let empty = StubScene::missing();
        picking.set_cursor(Vec2::new(50.0, 0.0));
        picking.evaluate(&empty, &hover_subs(), &mut events);
        assert_eq!(
            events,
            vec![
                ControlEvent::HoverOut { entity: 4 },
                ControlEvent::HoverOff {
                    canvas_pos: Vec2::new(50.0, 0.0)
                },
            ]
        );

        // Still over empty space: hover-off repeats, hover-out does not.
        events.clear();
        picking.set_cursor(Vec2::new(51.0, 0.0));
        picking.evaluate(&empty, &hover_subs(), &mut events);
        assert_eq!(
            events,
            vec![ControlEvent::HoverOff {
                canvas_pos: Vec2::new(51.0, 0.0)
            }]
        );
    }
}
