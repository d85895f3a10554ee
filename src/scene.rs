//! The scene seam: everything the control needs from its host scene.
//!
//! The control never owns a scene graph. It sees the host through the
//! narrow [`SceneView`] trait — a synchronous pick query and a bounding box
//! of visible content — and receives typed [`PickHit`] values back.

use glam::{Vec2, Vec3};

/// Identifier of a pickable scene entity.
pub type EntityId = u32;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its two corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Length of the main diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        (self.max - self.min).length()
    }

    /// Extent of the largest axis.
    #[must_use]
    pub fn longest_extent(&self) -> f32 {
        let size = self.max - self.min;
        size.x.max(size.y).max(size.z)
    }
}

impl Default for Aabb {
    /// Unit box centered on the origin.
    fn default() -> Self {
        Self {
            min: Vec3::splat(-0.5),
            max: Vec3::splat(0.5),
        }
    }
}

/// A pick query built by the control, at most once per tick.
///
/// `surface` requests the costlier surface-precision variant that also
/// resolves the exact world-space intersection point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRequest {
    /// Cursor position in canvas pixels.
    pub canvas_pos: Vec2,
    /// Whether surface-precision intersection detail is wanted.
    pub surface: bool,
}

/// Result of a successful pick query. Consumed read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    /// The entity that was hit.
    pub entity: EntityId,
    /// Cursor position the query was made at, in canvas pixels.
    pub canvas_pos: Vec2,
    /// World-space surface intersection, present for surface-precision
    /// picks.
    pub world_pos: Option<Vec3>,
    /// Bounding box of the hit entity, used for fly-to framing.
    pub aabb: Option<Aabb>,
}

/// Read-only view of the host scene.
///
/// Pick queries are synchronous and must complete within the calling tick;
/// an empty result is a valid miss, never an error.
pub trait SceneView {
    /// Ray-pick the scene at the request's canvas position. Returns `None`
    /// on a miss.
    fn pick(&self, request: &PickRequest) -> Option<PickHit>;

    /// Axis-aligned bounding box of all visible content.
    fn aabb(&self) -> Aabb;
}

/// Scene-size-derived zoom rate: one thirtieth of the largest AABB axis
/// extent, so wheel and pinch zoom speed track the magnitude of the content.
pub(crate) fn scene_zoom_rate(scene: &impl SceneView) -> f32 {
    scene.aabb().longest_extent() / 30.0
}
