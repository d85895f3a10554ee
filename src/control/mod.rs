//! The camera interaction facade.
//!
//! [`CameraControl`] owns every per-device state machine and the shared
//! velocity state. Hosts feed it normalized [`InputEvent`]s as they arrive
//! and call [`tick`](CameraControl::tick) once per frame with the frame
//! delta; camera motion, picking, and gesture resolution all happen inside
//! the tick. Discrete outcomes queue up as [`ControlEvent`]s until the host
//! drains them.

/// Host-facing events and subscription flags.
pub mod events;
pub(crate) mod velocity;

pub use events::{ControlEvent, Subscriptions};

use glam::{Vec2, Vec3};
use web_time::{Duration, Instant};

use crate::camera::{CameraFlight, CameraPose, CameraRig, FlightTarget};
use crate::config::ControlConfig;
use crate::input::event::{InputEvent, Key, MouseButton};
use crate::input::keyboard::KeyState;
use crate::input::mouse::{
    ClickArbiter, ClickDecision, DragAccumulator, MOUSE_ORBIT_RATE,
    MOUSE_PAN_RATE, MOUSE_WHEEL_PAN_RATE, MOUSE_ZOOM_RATE,
};
use crate::input::touch::{TapDecision, TapTracker, TouchNav};
use crate::picking::PickCoordinator;
use crate::scene::{scene_zoom_rate, PickHit, SceneView};
use velocity::VelocityState;

/// Degrees of orbit per held-key millisecond.
const KEYBOARD_ORBIT_RATE: f32 = 0.02;
/// Pan velocity per held-key millisecond.
const KEYBOARD_PAN_RATE: f32 = 0.02;
/// Zoom velocity per held-key millisecond, on top of the scene zoom rate.
const KEYBOARD_ZOOM_RATE: f32 = 0.02;

/// The collaborators a control call acts on.
///
/// Borrowed fresh for each [`CameraControl::handle_event`] or
/// [`CameraControl::tick`] call, so hosts keep ownership of their camera,
/// scene, and flight animator between calls.
pub struct ControlContext<'a, C, S, F>
where
    C: CameraRig,
    S: SceneView,
    F: CameraFlight,
{
    /// The camera being driven.
    pub camera: &'a mut C,
    /// The pickable scene.
    pub scene: &'a S,
    /// The flight animator used for fly-to transitions.
    pub flight: &'a mut F,
}

/// Mouse, keyboard, and touch camera control with picking.
///
/// See the [crate docs](crate) for the full event/tick protocol.
pub struct CameraControl {
    config: ControlConfig,
    active: bool,
    velocity: VelocityState,
    keys: KeyState,
    drag: DragAccumulator,
    clicks: ClickArbiter,
    touch_nav: TouchNav,
    taps: TapTracker,
    picking: PickCoordinator,
    events: Vec<ControlEvent>,
}

impl CameraControl {
    /// Create an active control with the given configuration.
    #[must_use]
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            active: true,
            velocity: VelocityState::new(),
            keys: KeyState::new(),
            drag: DragAccumulator::new(),
            clicks: ClickArbiter::new(),
            touch_nav: TouchNav::new(Instant::now()),
            taps: TapTracker::new(),
            picking: PickCoordinator::new(),
            events: Vec::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Mutable configuration access; changes take effect immediately.
    pub fn config_mut(&mut self) -> &mut ControlConfig {
        &mut self.config
    }

    /// Whether the control reacts to input.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate or deactivate the control. Deactivating drops all
    /// transient state: velocities, held keys, drags, and pending clicks.
    pub fn set_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;
        log::debug!("camera control active: {active}");
        if !active {
            self.velocity.reset();
            self.keys.clear();
            self.drag.left_down = false;
            self.drag.right_down = false;
            self.drag.reset();
            self.clicks.reset();
            self.touch_nav.reset(Instant::now());
            self.taps.reset();
            self.picking.clear();
            self.events.clear();
        }
    }

    /// Gate keyboard input off while a host text field has focus.
    pub fn set_keyboard_enabled(&mut self, enabled: bool) {
        self.keys.keyboard_active = enabled;
    }

    /// Latest known cursor position, in canvas pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.picking.cursor()
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    /// Feed one input event, stamped with the current time.
    pub fn handle_event<C, S, F>(
        &mut self,
        event: &InputEvent,
        ctx: &mut ControlContext<'_, C, S, F>,
    ) where
        C: CameraRig,
        S: SceneView,
        F: CameraFlight,
    {
        self.handle_event_at(event, Instant::now(), ctx);
    }

    /// Feed one input event with an explicit timestamp.
    pub fn handle_event_at<C, S, F>(
        &mut self,
        event: &InputEvent,
        now: Instant,
        ctx: &mut ControlContext<'_, C, S, F>,
    ) where
        C: CameraRig,
        S: SceneView,
        F: CameraFlight,
    {
        if !self.active {
            return;
        }
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(*x, *y);
                self.picking.set_cursor(pos);
                if self.keys.over {
                    self.drag.accumulate(pos);
                }
            }
            InputEvent::MouseButton { button, pressed } => {
                self.on_mouse_button(*button, *pressed, now, ctx);
            }
            InputEvent::Wheel { delta } => {
                let d = if *delta > 0.0 {
                    1.0
                } else if *delta < 0.0 {
                    -1.0
                } else {
                    return;
                };
                if self.config.first_person {
                    self.velocity.pan_vz += -d * MOUSE_WHEEL_PAN_RATE;
                } else {
                    self.velocity.zoom_v =
                        -d * scene_zoom_rate(ctx.scene) * MOUSE_ZOOM_RATE;
                }
            }
            InputEvent::PointerEntered => {
                self.keys.over = true;
                self.drag.reset();
            }
            InputEvent::PointerLeft => {
                self.keys.over = false;
                self.drag.reset();
            }
            InputEvent::KeyboardKey { key, pressed } => {
                if !self.keys.keyboard_active {
                    return;
                }
                self.keys.set_pressed(*key, *pressed);
                if *pressed && self.keys.over {
                    self.canonical_view(*key, ctx);
                }
            }
            InputEvent::ModifiersChanged { ctrl, alt, shift } => {
                self.keys.ctrl = *ctrl;
                self.keys.alt = *alt;
                self.keys.shift = *shift;
            }
            InputEvent::TouchStart { touches, changed } => {
                self.touch_nav.on_start(touches, now);
                self.taps.on_start(touches, changed, now);
            }
            InputEvent::TouchMove { touches } => {
                self.touch_nav.on_move(
                    touches,
                    now,
                    scene_zoom_rate(ctx.scene),
                    &mut self.velocity,
                );
            }
            InputEvent::TouchEnd { touches, changed } => {
                self.touch_nav.on_end(touches, now);
                match self.taps.on_end(touches, changed, now) {
                    TapDecision::Single(pos) => {
                        self.picking.set_cursor(pos);
                        self.resolve_single(pos, ctx);
                    }
                    TapDecision::Double(pos) => {
                        self.picking.set_cursor(pos);
                        self.resolve_double(pos, ctx);
                    }
                    TapDecision::None => {}
                }
            }
        }
    }

    /// Advance one frame, stamped with the current time.
    pub fn tick<C, S, F>(
        &mut self,
        dt: Duration,
        ctx: &mut ControlContext<'_, C, S, F>,
    ) where
        C: CameraRig,
        S: SceneView,
        F: CameraFlight,
    {
        self.tick_at(dt, Instant::now(), ctx);
    }

    /// Advance one frame with an explicit timestamp.
    ///
    /// Order within a tick: decay and apply the velocity state, fold held
    /// keys and drained drag deltas into fresh impulses (integrated on the
    /// *next* tick), run the deferred hover pick, then commit any expired
    /// pending click.
    pub fn tick_at<C, S, F>(
        &mut self,
        dt: Duration,
        now: Instant,
        ctx: &mut ControlContext<'_, C, S, F>,
    ) where
        C: CameraRig,
        S: SceneView,
        F: CameraFlight,
    {
        if !self.active {
            return;
        }
        self.velocity.decay();
        self.velocity.apply(
            ctx.camera,
            self.config.first_person,
            self.config.walking,
        );

        let elapsed_ms = dt.as_secs_f32() * 1000.0;
        self.keyboard_impulses(elapsed_ms, ctx.scene);
        self.drag_impulses();

        self.picking.evaluate(
            ctx.scene,
            &self.config.subscriptions,
            &mut self.events,
        );

        if let ClickDecision::Single(pos) = self.clicks.poll(now) {
            self.resolve_single(pos, ctx);
        }
    }

    fn on_mouse_button<C, S, F>(
        &mut self,
        button: MouseButton,
        pressed: bool,
        now: Instant,
        ctx: &mut ControlContext<'_, C, S, F>,
    ) where
        C: CameraRig,
        S: SceneView,
        F: CameraFlight,
    {
        match button {
            MouseButton::Left => self.drag.left_down = pressed,
            MouseButton::Right => self.drag.right_down = pressed,
            MouseButton::Middle => {}
        }
        if pressed {
            self.drag.begin(self.picking.cursor());
            if button == MouseButton::Left {
                self.clicks.on_mouse_down(self.picking.cursor());
            }
            return;
        }
        if !self.drag.dragging() {
            self.drag.reset();
        }
        if button == MouseButton::Left {
            let decision = self.clicks.on_mouse_up(
                now,
                self.picking.cursor(),
                self.config.double_aware(),
            );
            match decision {
                ClickDecision::Single(pos) => self.resolve_single(pos, ctx),
                ClickDecision::Double(pos) => self.resolve_double(pos, ctx),
                ClickDecision::None => {}
            }
        }
    }

    /// Fold held keys into velocity impulses for the next tick.
    fn keyboard_impulses(&mut self, elapsed_ms: f32, scene: &impl SceneView) {
        if !self.keys.over || !self.keys.keyboard_active {
            return;
        }
        let velocity = &mut self.velocity;
        let keys = &self.keys;

        // Zoom keys are suppressed while ctrl or alt chords are held.
        if !keys.ctrl && !keys.alt {
            if keys.is_down(Key::Minus) {
                velocity.zoom_v =
                    elapsed_ms * scene_zoom_rate(scene) * KEYBOARD_ZOOM_RATE;
            } else if keys.is_down(Key::Plus) {
                velocity.zoom_v =
                    -elapsed_ms * scene_zoom_rate(scene) * KEYBOARD_ZOOM_RATE;
            }
        }

        let pan = self.config.keyboard_layout.pan_keys();
        if keys.is_down(pan.down) {
            velocity.pan_vy += elapsed_ms * KEYBOARD_PAN_RATE;
        } else if keys.is_down(pan.up) {
            velocity.pan_vy -= elapsed_ms * KEYBOARD_PAN_RATE;
        }
        if keys.is_down(pan.right) {
            velocity.pan_vx -= elapsed_ms * KEYBOARD_PAN_RATE;
        } else if keys.is_down(pan.left) {
            velocity.pan_vx += elapsed_ms * KEYBOARD_PAN_RATE;
        }
        if keys.is_down(pan.back) {
            velocity.pan_vz += elapsed_ms * KEYBOARD_PAN_RATE;
        } else if keys.is_down(pan.front) {
            velocity.pan_vz -= elapsed_ms * KEYBOARD_PAN_RATE;
        }

        if keys.is_down(Key::ArrowRight) {
            velocity.rotate_vy -= elapsed_ms * KEYBOARD_ORBIT_RATE;
        } else if keys.is_down(Key::ArrowLeft) {
            velocity.rotate_vy += elapsed_ms * KEYBOARD_ORBIT_RATE;
        }
        if keys.is_down(Key::ArrowDown) {
            velocity.rotate_vx += elapsed_ms * KEYBOARD_ORBIT_RATE;
        } else if keys.is_down(Key::ArrowUp) {
            velocity.rotate_vx -= elapsed_ms * KEYBOARD_ORBIT_RATE;
        }

        let (yaw_left, yaw_right) = self.config.keyboard_layout.yaw_keys();
        if keys.is_down(yaw_left) {
            velocity.rotate_vy += elapsed_ms * KEYBOARD_ORBIT_RATE;
        } else if keys.is_down(yaw_right) {
            velocity.rotate_vy -= elapsed_ms * KEYBOARD_ORBIT_RATE;
        }
    }

    /// Drain accumulated drag movement into pan or orbit impulses.
    fn drag_impulses(&mut self) {
        let delta = self.drag.drain();
        if delta == Vec2::ZERO {
            return;
        }
        if self.keys.shift || self.drag.right_down {
            self.velocity.pan_vx = delta.x * MOUSE_PAN_RATE;
            self.velocity.pan_vy = delta.y * MOUSE_PAN_RATE;
        } else {
            self.velocity.rotate_vy = -delta.x * MOUSE_ORBIT_RATE;
            self.velocity.rotate_vx = delta.y * MOUSE_ORBIT_RATE;
        }
    }

    /// Resolve a committed single click or tap at `pos`.
    fn resolve_single<C, S, F>(
        &mut self,
        pos: Vec2,
        ctx: &mut ControlContext<'_, C, S, F>,
    ) where
        C: CameraRig,
        S: SceneView,
        F: CameraFlight,
    {
        let surface = self.config.subscriptions.picked_surface;
        match self.picking.resolve_at(pos, surface, ctx.scene) {
            Some(hit) => {
                self.events.push(ControlEvent::Picked(hit.clone()));
                if surface && hit.world_pos.is_some() {
                    self.events.push(ControlEvent::PickedSurface(hit));
                }
            }
            None => {
                self.events
                    .push(ControlEvent::PickedNothing { canvas_pos: pos });
            }
        }
    }

    /// Resolve a double click or double tap at `pos`.
    fn resolve_double<C, S, F>(
        &mut self,
        pos: Vec2,
        ctx: &mut ControlContext<'_, C, S, F>,
    ) where
        C: CameraRig,
        S: SceneView,
        F: CameraFlight,
    {
        let fly = self.config.double_pick_fly_to;
        let surface = fly || self.config.subscriptions.double_picked_surface;
        match self.picking.resolve_at(pos, surface, ctx.scene) {
            Some(hit) => {
                self.events.push(ControlEvent::DoublePicked(hit.clone()));
                if self.config.subscriptions.double_picked_surface
                    && hit.world_pos.is_some()
                {
                    self.events
                        .push(ControlEvent::DoublePickedSurface(hit.clone()));
                }
                if fly {
                    self.fly_to_hit(Some(&hit), ctx);
                }
            }
            None => {
                self.events
                    .push(ControlEvent::DoublePickedNothing { canvas_pos: pos });
                if fly {
                    self.fly_to_hit(None, ctx);
                }
            }
        }
    }

    /// Frame a picked entity's bounds, or the whole scene on a miss.
    fn fly_to_hit<C, S, F>(
        &mut self,
        hit: Option<&PickHit>,
        ctx: &mut ControlContext<'_, C, S, F>,
    ) where
        C: CameraRig,
        S: SceneView,
        F: CameraFlight,
    {
        let aabb = hit
            .and_then(|h| h.aabb)
            .unwrap_or_else(|| ctx.scene.aabb());
        let target = FlightTarget::Bounds(aabb);
        if ctx.flight.duration() > Duration::ZERO {
            ctx.flight.fly_to(ctx.camera, &target);
        } else {
            ctx.flight.jump_to(ctx.camera, &target);
        }
    }

    /// Snap or fly to one of the six axis-aligned canonical views.
    fn canonical_view<C, S, F>(
        &mut self,
        key: Key,
        ctx: &mut ControlContext<'_, C, S, F>,
    ) where
        C: CameraRig,
        S: SceneView,
        F: CameraFlight,
    {
        let camera = &*ctx.camera;
        let (axis, up) = match key {
            Key::Digit1 => (camera.world_right(), camera.world_up()),
            Key::Digit2 => (camera.world_forward(), camera.world_up()),
            Key::Digit3 => (-camera.world_right(), camera.world_up()),
            Key::Digit4 => (-camera.world_forward(), camera.world_up()),
            Key::Digit5 => (camera.world_up(), camera.world_forward()),
            Key::Digit6 => (-camera.world_up(), -camera.world_forward()),
            _ => return,
        };
        let aabb = ctx.scene.aabb();
        let center = aabb.center();
        let dist =
            (aabb.diagonal() / (ctx.flight.fit_fov() * 0.5).tan()).abs();
        let pose = CameraPose {
            eye: center + axis * dist,
            look: center,
            up: up.normalize_or(Vec3::Y),
        };
        log::debug!("canonical view {key:?}: eye {:?}", pose.eye);
        let target = FlightTarget::Pose(pose);
        if ctx.flight.duration() > Duration::ZERO {
            ctx.flight.fly_to(ctx.camera, &target);
        } else {
            ctx.flight.jump_to(ctx.camera, &target);
        }
    }
}

impl Default for CameraControl {
    fn default() -> Self {
        Self::new(ControlConfig::new())
    }
}
