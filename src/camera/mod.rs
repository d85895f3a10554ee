//! Camera seam and bundled implementations.
//!
//! The control drives its host camera exclusively through the [`CameraRig`]
//! trait: orbit/pitch/yaw/pan/zoom primitives plus a world-space basis. A
//! concrete [`OrbitCamera`](orbit::OrbitCamera) and an eased
//! [`EasedFlight`](flight::EasedFlight) animation are provided for hosts
//! that do not bring their own.

/// Animated camera transitions (fly-to / jump-to).
pub mod flight;
/// Concrete eye/look/up camera with orbit and first-person primitives.
pub mod orbit;

pub use flight::{CameraFlight, CameraPose, EasedFlight, FlightTarget};
pub use orbit::OrbitCamera;

use glam::Vec3;

/// Camera primitives the control needs from its host.
///
/// Angles are in degrees. Orbit variants rotate the eye about the look
/// target; plain `pitch`/`yaw` rotate the look about the eye (first-person).
pub trait CameraRig {
    /// Eye (camera) position in world space.
    fn eye(&self) -> Vec3;
    /// Move the eye.
    fn set_eye(&mut self, eye: Vec3);
    /// Look-at target position.
    fn look(&self) -> Vec3;
    /// Move the look target.
    fn set_look(&mut self, look: Vec3);
    /// Up direction vector.
    fn up(&self) -> Vec3;
    /// Replace the up vector.
    fn set_up(&mut self, up: Vec3);

    /// Rotate the look about the eye around the camera's right axis.
    fn pitch(&mut self, degrees: f32);
    /// Rotate the look about the eye around the world up axis.
    fn yaw(&mut self, degrees: f32);
    /// Rotate the eye about the look around the camera's right axis.
    fn orbit_pitch(&mut self, degrees: f32);
    /// Rotate the eye about the look around the world up axis.
    fn orbit_yaw(&mut self, degrees: f32);

    /// Translate eye and look by an offset given in the camera's local
    /// frame (x right, y up, z away from the look target).
    fn pan(&mut self, offset: Vec3);
    /// Dolly the eye along the view direction; positive moves away from
    /// the look target.
    fn zoom(&mut self, delta: f32);

    /// World-space forward axis of the camera's coordinate system.
    fn world_forward(&self) -> Vec3;
    /// World-space up axis of the camera's coordinate system.
    fn world_up(&self) -> Vec3;
    /// World-space right axis of the camera's coordinate system.
    fn world_right(&self) -> Vec3;

    /// Current orthographic projection scale.
    fn ortho_scale(&self) -> f32;
    /// Set the orthographic projection scale.
    fn set_ortho_scale(&mut self, scale: f32);

    /// Distance from the eye to the look target.
    fn eye_look_distance(&self) -> f32 {
        (self.look() - self.eye()).length()
    }
}
