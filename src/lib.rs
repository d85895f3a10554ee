//! Damped camera interaction and picking for 3D scene viewers.
//!
//! Vantage turns raw mouse, keyboard, and touch input into smooth camera
//! motion and entity picking, without owning a renderer or a scene graph.
//! All motion runs through one velocity state with exponential friction, so
//! every gesture glides to a stop the same way.
//!
//! # Key entry points
//!
//! - [`CameraControl`] - the interaction facade: feed it events, tick it
//!   once per frame, drain its [`ControlEvent`]s
//! - [`CameraRig`] / [`SceneView`] / [`CameraFlight`] - the traits a host
//!   implements (or borrows from [`OrbitCamera`] and [`EasedFlight`])
//! - [`ControlConfig`] - behavior toggles, loadable from TOML presets
//!
//! # Protocol
//!
//! ```
//! use std::time::Duration;
//! use vantage::{
//!     Aabb, CameraControl, ControlContext, EasedFlight, InputEvent,
//!     OrbitCamera, PickHit, PickRequest, SceneView,
//! };
//!
//! struct EmptyScene;
//! impl SceneView for EmptyScene {
//!     fn pick(&self, _request: &PickRequest) -> Option<PickHit> {
//!         None
//!     }
//!     fn aabb(&self) -> Aabb {
//!         Aabb::default()
//!     }
//! }
//!
//! let mut camera = OrbitCamera::default();
//! let mut flight = EasedFlight::default();
//! let scene = EmptyScene;
//! let mut control = CameraControl::default();
//!
//! // Per frame: forward window events, then tick with the frame delta.
//! let mut ctx = ControlContext {
//!     camera: &mut camera,
//!     scene: &scene,
//!     flight: &mut flight,
//! };
//! control.handle_event(&InputEvent::PointerEntered, &mut ctx);
//! control.tick(Duration::from_millis(16), &mut ctx);
//! for event in control.drain_events() {
//!     // react to picks and hovers
//!     let _ = event;
//! }
//! ```

/// Camera seam and bundled implementations.
pub mod camera;
/// Control configuration and TOML presets.
pub mod config;
/// The interaction facade, velocity state, and host-facing events.
pub mod control;
/// Crate-level error types.
pub mod error;
/// Platform-agnostic input events and per-device state machines.
pub mod input;
mod picking;
/// The scene seam: pick queries and bounding boxes.
pub mod scene;
/// Small math helpers.
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

pub use camera::{
    CameraFlight, CameraPose, CameraRig, EasedFlight, FlightTarget,
    OrbitCamera,
};
pub use config::ControlConfig;
pub use control::{
    CameraControl, ControlContext, ControlEvent, Subscriptions,
};
pub use error::VantageError;
pub use input::{InputEvent, Key, KeyboardLayout, MouseButton};
pub use scene::{Aabb, EntityId, PickHit, PickRequest, SceneView};
