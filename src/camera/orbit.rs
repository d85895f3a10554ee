//! Quaternion-based eye/look/up camera.

use glam::{Quat, Vec3};

use super::CameraRig;

/// World coordinate axes the camera's canonical views are defined against.
const WORLD_RIGHT: Vec3 = Vec3::X;
const WORLD_UP: Vec3 = Vec3::Y;
const WORLD_FORWARD: Vec3 = Vec3::NEG_Z;

/// Minimum eye-to-look distance; dollying closer than this is clamped so
/// the view direction never degenerates.
const MIN_EYE_LOOK_DIST: f32 = 0.01;

/// A concrete [`CameraRig`]: eye/look/up state with orbit and first-person
/// rotation, local-frame panning, dolly zoom, and an orthographic scale
/// kept for projection switching.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    eye: Vec3,
    look: Vec3,
    up: Vec3,
    ortho_scale: f32,
}

impl OrbitCamera {
    /// Create a camera at `eye` looking at `look` with the given up vector.
    #[must_use]
    pub fn new(eye: Vec3, look: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            look,
            up,
            ortho_scale: 1.0,
        }
    }

    /// Normalized view direction from eye toward look.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.look - self.eye).normalize_or(WORLD_FORWARD)
    }

    /// Normalized right vector of the camera frame.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or(WORLD_RIGHT)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y)
    }
}

impl CameraRig for OrbitCamera {
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
        let rot = Quat::from_axis_angle(self.right(), degrees.to_radians());
        self.look = self.eye + rot * (self.look - self.eye);
        self.up = rot * self.up;
    }

    fn yaw(&mut self, degrees: f32) {
        let rot = Quat::from_axis_angle(WORLD_UP, degrees.to_radians());
        self.look = self.eye + rot * (self.look - self.eye);
        self.up = rot * self.up;
    }

    fn orbit_pitch(&mut self, degrees: f32) {
        let rot = Quat::from_axis_angle(self.right(), degrees.to_radians());
        self.eye = self.look + rot * (self.eye - self.look);
        self.up = rot * self.up;
    }

    fn orbit_yaw(&mut self, degrees: f32) {
        let rot = Quat::from_axis_angle(WORLD_UP, degrees.to_radians());
        self.eye = self.look + rot * (self.eye - self.look);
        self.up = rot * self.up;
    }

    fn pan(&mut self, offset: Vec3) {
        let forward = self.forward();
        let right = self.right();
        let up = right.cross(forward).normalize_or(WORLD_UP);
        let translation =
            right * offset.x + up * offset.y - forward * offset.z;
        self.eye += translation;
        self.look += translation;
    }

    fn zoom(&mut self, delta: f32) {
        let dist = (self.look - self.eye).length();
        let new_dist = (dist + delta).max(MIN_EYE_LOOK_DIST);
        self.eye = self.look - self.forward() * new_dist;
    }

    fn world_forward(&self) -> Vec3 {
        WORLD_FORWARD
    }

    fn world_up(&self) -> Vec3 {
        WORLD_UP
    }

    fn world_right(&self) -> Vec3 {
        WORLD_RIGHT
    }

    fn ortho_scale(&self) -> f32 {
        self.ortho_scale
    }

    fn set_ortho_scale(&mut self, scale: f32) {
        self.ortho_scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < 1e-4,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn orbit_yaw_preserves_eye_look_distance() {
        let mut camera = OrbitCamera::default();
        let before = camera.eye_look_distance();
        camera.orbit_yaw(37.0);
        assert!((camera.eye_look_distance() - before).abs() < 1e-4);
        assert_close(camera.look(), Vec3::ZERO);
    }

    #[test]
    fn orbit_yaw_quarter_turn_moves_eye_onto_x_axis() {
        let mut camera = OrbitCamera::default();
        camera.orbit_yaw(90.0);
        assert_close(camera.eye(), Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn first_person_yaw_keeps_eye_fixed() {
        let mut camera = OrbitCamera::default();
        let eye = camera.eye();
        camera.yaw(45.0);
        assert_close(camera.eye(), eye);
        assert!((camera.look() - eye).length() > 1.0);
    }

    #[test]
    fn pan_moves_eye_and_look_together() {
        let mut camera = OrbitCamera::default();
        camera.pan(Vec3::new(2.0, 1.0, 0.0));
        let delta = camera.look() - Vec3::ZERO;
        assert_close(camera.eye() - Vec3::new(0.0, 0.0, 10.0), delta);
        // Default pose looks down -Z with +Y up, so local x/y map onto
        // world X/Y directly.
        assert_close(delta, Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn zoom_changes_distance_and_clamps() {
        let mut camera = OrbitCamera::default();
        camera.zoom(5.0);
        assert!((camera.eye_look_distance() - 15.0).abs() < 1e-4);
        camera.zoom(-100.0);
        assert!(camera.eye_look_distance() >= MIN_EYE_LOOK_DIST);
    }
}
