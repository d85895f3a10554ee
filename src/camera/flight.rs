//! Animated camera transitions.
//!
//! The control only *initiates* flights; the animation itself is a
//! collaborator behind the [`CameraFlight`] trait. [`EasedFlight`] is the
//! bundled implementation: an eased pose interpolation advanced by the
//! host once per frame.

use glam::Vec3;
use web_time::Duration;

use super::CameraRig;
use crate::scene::Aabb;
use crate::util::easing::EasingFunction;

/// A complete camera pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position.
    pub eye: Vec3,
    /// Look-at target.
    pub look: Vec3,
    /// Up vector.
    pub up: Vec3,
}

impl CameraPose {
    /// Capture the current pose of a camera.
    #[must_use]
    pub fn of(camera: &dyn CameraRig) -> Self {
        Self {
            eye: camera.eye(),
            look: camera.look(),
            up: camera.up(),
        }
    }

    /// Write this pose onto a camera.
    pub fn apply(&self, camera: &mut dyn CameraRig) {
        camera.set_eye(self.eye);
        camera.set_look(self.look);
        camera.set_up(self.up);
    }
}

/// What a flight should frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightTarget {
    /// An explicit destination pose.
    Pose(CameraPose),
    /// A bounding box to fit into view.
    Bounds(Aabb),
}

/// Camera flight collaborator.
///
/// The control decides between `fly_to` and `jump_to` based on
/// [`duration`](CameraFlight::duration): an animated transition when the
/// duration is positive, an instantaneous jump otherwise.
pub trait CameraFlight {
    /// Flight duration. Zero means transitions are instantaneous.
    fn duration(&self) -> Duration;

    /// Field of view, in radians, used when fitting a bounding box.
    fn fit_fov(&self) -> f32;

    /// Begin an animated transition toward the target.
    fn fly_to(&mut self, camera: &mut dyn CameraRig, target: &FlightTarget);

    /// Move the camera to the target immediately.
    fn jump_to(&mut self, camera: &mut dyn CameraRig, target: &FlightTarget);
}

struct ActiveFlight {
    start: CameraPose,
    end: CameraPose,
    elapsed: Duration,
}

/// Eased pose-interpolation flight.
///
/// Call [`advance`](EasedFlight::advance) once per frame to progress an
/// in-flight transition.
pub struct EasedFlight {
    duration: Duration,
    fit_fov: f32,
    easing: EasingFunction,
    active: Option<ActiveFlight>,
}

impl EasedFlight {
    /// Default flight duration.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

    /// Create a flight animator with the given duration and a 45° fit FOV.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            fit_fov: 45.0_f32.to_radians(),
            easing: EasingFunction::DEFAULT,
            active: None,
        }
    }

    /// Override the field of view used for bounding-box fitting (radians).
    #[must_use]
    pub fn with_fit_fov(mut self, fit_fov: f32) -> Self {
        self.fit_fov = fit_fov;
        self
    }

    /// Whether a flight is currently in progress.
    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.active.is_some()
    }

    /// Advance an active flight by `dt`, writing the interpolated pose onto
    /// the camera. Returns `true` while a flight remains in progress.
    pub fn advance(
        &mut self,
        dt: Duration,
        camera: &mut dyn CameraRig,
    ) -> bool {
        let Some(flight) = self.active.as_mut() else {
            return false;
        };
        flight.elapsed += dt;
        let t = if self.duration.is_zero() {
            1.0
        } else {
            flight.elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        let k = self.easing.evaluate(t);
        let pose = CameraPose {
            eye: flight.start.eye.lerp(flight.end.eye, k),
            look: flight.start.look.lerp(flight.end.look, k),
            up: flight
                .start
                .up
                .lerp(flight.end.up, k)
                .normalize_or(flight.end.up),
        };
        pose.apply(camera);
        if t >= 1.0 {
            self.active = None;
        }
        self.active.is_some()
    }

    /// Resolve a target into a destination pose. Bounding boxes are framed
    /// by backing off along the current view direction far enough for the
    /// box's bounding sphere to fit inside `fit_fov`.
    fn resolve(
        &self,
        camera: &dyn CameraRig,
        target: &FlightTarget,
    ) -> CameraPose {
        match target {
            FlightTarget::Pose(pose) => *pose,
            FlightTarget::Bounds(aabb) => {
                let center = aabb.center();
                let dir = (camera.look() - camera.eye())
                    .normalize_or(camera.world_forward());
                let dist =
                    (aabb.diagonal() * 0.5) / (self.fit_fov * 0.5).tan();
                CameraPose {
                    eye: center - dir * dist,
                    look: center,
                    up: camera.up(),
                }
            }
        }
    }
}

impl Default for EasedFlight {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

impl CameraFlight for EasedFlight {
    fn duration(&self) -> Duration {
        self.duration
    }

    fn fit_fov(&self) -> f32 {
        self.fit_fov
    }

    fn fly_to(&mut self, camera: &mut dyn CameraRig, target: &FlightTarget) {
        let end = self.resolve(camera, target);
        if self.duration.is_zero() {
            end.apply(camera);
            self.active = None;
            return;
        }
        log::debug!(
            "flight start: eye {:?} -> {:?}",
            camera.eye(),
            end.eye
        );
        self.active = Some(ActiveFlight {
            start: CameraPose::of(camera),
            end,
            elapsed: Duration::ZERO,
        });
    }

    fn jump_to(&mut self, camera: &mut dyn CameraRig, target: &FlightTarget) {
        let end = self.resolve(camera, target);
        end.apply(camera);
        self.active = None;
    }
}
