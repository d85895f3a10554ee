//! Shared test doubles: a call-recording camera, a scriptable scene, and a
//! target-recording flight animator.

use std::cell::Cell;

use glam::{Vec2, Vec3};
use web_time::Duration;

use crate::camera::{CameraFlight, CameraRig, FlightTarget};
use crate::scene::{Aabb, EntityId, PickHit, PickRequest, SceneView};

/// A camera that records every primitive call it receives.
///
/// Pan offsets translate eye and look directly in world space, so assertions
/// can read offsets back without frame math.
#[derive(Debug, Default)]
pub struct RecordingCamera {
    eye: Vec3,
    look: Vec3,
    up: Vec3,
    pub ortho_scale: f32,
    pub pans: Vec<Vec3>,
    pub zooms: Vec<f32>,
    pub pitches: Vec<f32>,
    pub yaws: Vec<f32>,
    pub orbit_pitches: Vec<f32>,
    pub orbit_yaws: Vec<f32>,
}

impl RecordingCamera {
    /// Camera on the +Z axis at the given distance, looking at the origin.
    pub fn at_distance(dist: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, dist),
            look: Vec3::ZERO,
            up: Vec3::Y,
            ortho_scale: 1.0,
            ..Self::default()
        }
    }
}

impl CameraRig for RecordingCamera {
    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    fn look(&self) -> Vec3 {
        self.look
    }

    fn set_look(&mut self, look: Vec3) {
        self.look = look;
    }

    fn up(&self) -> Vec3 {
        self.up
    }

    fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    fn pitch(&mut self, degrees: f32) {
        self.pitches.push(degrees);
    }

    fn yaw(&mut self, degrees: f32) {
        self.yaws.push(degrees);
    }

    fn orbit_pitch(&mut self, degrees: f32) {
        self.orbit_pitches.push(degrees);
    }

    fn orbit_yaw(&mut self, degrees: f32) {
        self.orbit_yaws.push(degrees);
    }

    fn pan(&mut self, offset: Vec3) {
        self.pans.push(offset);
        self.eye += offset;
        self.look += offset;
    }

    fn zoom(&mut self, delta: f32) {
        self.zooms.push(delta);
        self.eye.z += delta;
    }

    fn world_forward(&self) -> Vec3 {
        Vec3::NEG_Z
    }

    fn world_up(&self) -> Vec3 {
        Vec3::Y
    }

    fn world_right(&self) -> Vec3 {
        Vec3::X
    }

    fn ortho_scale(&self) -> f32 {
        self.ortho_scale
    }

    fn set_ortho_scale(&mut self, scale: f32) {
        self.ortho_scale = scale;
    }
}

/// A scene with a scripted pick result and a pick-call counter.
#[derive(Debug)]
pub struct StubScene {
    aabb: Aabb,
    hit_entity: Option<EntityId>,
    hit_aabb: Option<Aabb>,
    surface_pos: Vec3,
    pick_count: Cell<usize>,
}

impl StubScene {
    /// Every pick hits the given entity.
    pub fn hitting(entity: EntityId) -> Self {
        Self {
            aabb: Aabb::default(),
            hit_entity: Some(entity),
            hit_aabb: None,
            surface_pos: Vec3::ZERO,
            pick_count: Cell::new(0),
        }
    }

    /// Every pick misses.
    pub fn missing() -> Self {
        Self {
            aabb: Aabb::default(),
            hit_entity: None,
            hit_aabb: None,
            surface_pos: Vec3::ZERO,
            pick_count: Cell::new(0),
        }
    }

    /// Override the scene bounding box.
    pub fn with_aabb(mut self, aabb: Aabb) -> Self {
        self.aabb = aabb;
        self
    }

    /// Attach a bounding box to every hit.
    pub fn with_hit_aabb(mut self, aabb: Aabb) -> Self {
        self.hit_aabb = Some(aabb);
        self
    }

    /// How many pick queries have run.
    pub fn pick_count(&self) -> usize {
        self.pick_count.get()
    }
}

impl SceneView for StubScene {
    fn pick(&self, request: &PickRequest) -> Option<PickHit> {
        self.pick_count.set(self.pick_count.get() + 1);
        let entity = self.hit_entity?;
        Some(PickHit {
            entity,
            canvas_pos: request.canvas_pos,
            world_pos: request.surface.then_some(self.surface_pos),
            aabb: self.hit_aabb,
        })
    }

    fn aabb(&self) -> Aabb {
        self.aabb
    }
}

/// A flight animator that records the targets it is asked to reach.
#[derive(Debug)]
pub struct RecordingFlight {
    pub duration: Duration,
    pub fit_fov: f32,
    pub flights: Vec<FlightTarget>,
    pub jumps: Vec<FlightTarget>,
}

impl RecordingFlight {
    /// Zero-duration animator: every transition records as a jump.
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            fit_fov: 45.0_f32.to_radians(),
            flights: Vec::new(),
            jumps: Vec::new(),
        }
    }

    /// Animator with a positive duration: transitions record as flights.
    pub fn animated(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::instant()
        }
    }
}

impl CameraFlight for RecordingFlight {
    fn duration(&self) -> Duration {
        self.duration
    }

    fn fit_fov(&self) -> f32 {
        self.fit_fov
    }

    fn fly_to(&mut self, _camera: &mut dyn CameraRig, target: &FlightTarget) {
        self.flights.push(*target);
    }

    fn jump_to(&mut self, _camera: &mut dyn CameraRig, target: &FlightTarget) {
        self.jumps.push(*target);
    }
}
