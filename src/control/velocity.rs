//! Damped motion integrator.
//!
//! All camera motion funnels through one velocity state: input handlers
//! add impulses, and once per tick the integrator applies exponential
//! friction and converts what remains into camera deltas.

use glam::Vec3;

use crate::camera::CameraRig;

/// Exponential friction applied to every axis each tick.
pub(crate) const FRICTION: f32 = 0.85;
/// Velocities below this magnitude snap to exactly zero.
pub(crate) const EPSILON: f32 = 0.001;
/// Pan velocity is scaled by eye-look distance over this constant, making
/// pan displacement proportional to how far out the camera sits.
pub(crate) const PAN_DISTANCE_DIVISOR: f32 = 80.0;

/// Velocity state for the rotate, pan, and zoom axes.
///
/// Owned by the integrator; input handlers add impulses, the integrator
/// decays and applies them. Velocities are never hard-clamped — friction is
/// the only limiter.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct VelocityState {
    /// Rotation about the camera's right axis (vertical drag).
    pub rotate_vx: f32,
    /// Rotation about the up axis (horizontal drag).
    pub rotate_vy: f32,
    pub pan_vx: f32,
    pub pan_vy: f32,
    pub pan_vz: f32,
    pub zoom_v: f32,
}

impl VelocityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply friction to every axis and snap sub-epsilon values to zero.
    pub fn decay(&mut self) {
        for v in [
            &mut self.rotate_vx,
            &mut self.rotate_vy,
            &mut self.pan_vx,
            &mut self.pan_vy,
            &mut self.pan_vz,
            &mut self.zoom_v,
        ] {
            *v *= FRICTION;
            if v.abs() < EPSILON {
                *v = 0.0;
            }
        }
    }

    /// Convert the current velocities into camera deltas.
    ///
    /// In orbit mode rotation orbits the look target and zoom is a dolly
    /// paired with an ortho-scale change (so projection switches mid-zoom
    /// show no scale jump). In first-person mode rotation moves the look
    /// about the eye and zoom becomes an axial pan. Walking mode pins the
    /// eye's vertical coordinate after every translation.
    pub fn apply(
        &self,
        camera: &mut impl CameraRig,
        first_person: bool,
        walking: bool,
    ) {
        if self.rotate_vx != 0.0 {
            if first_person {
                camera.pitch(-self.rotate_vx);
            } else {
                camera.orbit_pitch(self.rotate_vx);
            }
        }
        if self.rotate_vy != 0.0 {
            if first_person {
                camera.yaw(self.rotate_vy);
            } else {
                camera.orbit_yaw(self.rotate_vy);
            }
        }

        if self.pan_vx != 0.0 || self.pan_vy != 0.0 || self.pan_vz != 0.0 {
            let f = camera.eye_look_distance() / PAN_DISTANCE_DIVISOR;
            let offset =
                Vec3::new(self.pan_vx * f, self.pan_vy * f, self.pan_vz * f);
            if walking {
                let y = camera.eye().y;
                camera.pan(offset);
                let mut eye = camera.eye();
                eye.y = y;
                camera.set_eye(eye);
            } else {
                camera.pan(offset);
            }
        }

        if self.zoom_v != 0.0 {
            if first_person {
                let y = camera.eye().y;
                camera.pan(Vec3::new(0.0, 0.0, self.zoom_v));
                if walking {
                    let mut eye = camera.eye();
                    eye.y = y;
                    camera.set_eye(eye);
                }
            } else {
                camera.zoom(self.zoom_v);
                camera.set_ortho_scale(camera.ortho_scale() + self.zoom_v);
            }
        }
    }

    /// Zero every axis; used on deactivation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
