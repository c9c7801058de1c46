//! Camera snapshots and the host camera interface.

use glam::{Mat4, Vec2, Vec3};

use crate::bounds::{Aabb, Frustum};
use crate::error::{OverlayError, Result};

/// Clip `w` within this many rounding units of its inputs counts as zero.
const CLIP_W_ULPS: f32 = 64.0;

/// Pixel size of the render target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Creates a viewport. Both dimensions must be positive and finite.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(OverlayError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns `(width, height)` as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns the viewport center.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Returns `width / height`.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Read-only snapshot of the main camera for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    position: Vec3,
    forward: Vec3,
    viewport: Viewport,
    view_projection: Mat4,
}

impl CameraState {
    /// Creates a snapshot. `forward` is normalized here.
    pub fn new(
        position: Vec3,
        forward: Vec3,
        viewport: Viewport,
        view_projection: Mat4,
    ) -> Result<Self> {
        let forward = forward
            .try_normalize()
            .ok_or(OverlayError::InvalidForward(forward))?;
        Ok(Self {
            position,
            forward,
            viewport,
            view_projection,
        })
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Render target size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    /// Projects a world point to pixel coordinates with a bottom-left origin.
    ///
    /// The result is only meaningful for points in front of the camera plane.
    /// A clip `w` lost in rounding is raised to a small positive floor, so a
    /// point on the plane lands far out along its projected direction
    /// instead of producing infinities.
    #[must_use]
    pub fn world_to_screen(&self, world: Vec3) -> Vec2 {
        let clip = self.view_projection * world.extend(1.0);
        let min_w = self.min_clip_w(world);
        let w = if clip.w.abs() <= min_w { min_w } else { clip.w };
        let ndc = clip.truncate() / w;
        Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.viewport.width,
            (ndc.y * 0.5 + 0.5) * self.viewport.height,
        )
    }

    /// Rounding floor for clip `w`, scaled by the terms that feed clip x, y and w.
    ///
    /// `|clip.x|` and `|clip.y|` never exceed the summed magnitude, so dividing
    /// by the floor stays finite.
    fn min_clip_w(&self, world: Vec3) -> f32 {
        let p = world.abs().extend(1.0);
        let vp = &self.view_projection;
        let magnitude: f32 = [vp.row(0), vp.row(1), vp.row(3)]
            .iter()
            .map(|row| row.abs().dot(p))
            .sum();
        (CLIP_W_ULPS * f32::EPSILON * magnitude).max(f32::MIN_POSITIVE)
    }

    /// Returns the clipping frustum of this camera.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection)
    }
}

/// The camera side of the host framework.
///
/// Only [`CameraHost::main_camera`] is required; projection and visibility
/// default to the snapshot's view-projection matrix.
pub trait CameraHost {
    /// Returns the current main camera, if there is one.
    fn main_camera(&self) -> Option<CameraState>;

    /// Projects a world point to pixels, bottom-left origin.
    fn world_to_screen(&self, camera: &CameraState, world: Vec3) -> Vec2 {
        camera.world_to_screen(world)
    }

    /// Returns whether any of the bounds intersects the camera frustum.
    ///
    /// An object without bounds is never visible.
    fn is_visible(&self, camera: &CameraState, bounds: &[Aabb]) -> bool {
        let frustum = camera.frustum();
        bounds.iter().any(|b| frustum.intersects_aabb(b))
    }
}

impl CameraHost for CameraState {
    fn main_camera(&self) -> Option<CameraState> {
        Some(*self)
    }
}

impl CameraHost for Option<CameraState> {
    fn main_camera(&self) -> Option<CameraState> {
        *self
    }
}

impl<C: CameraHost + ?Sized> CameraHost for &C {
    fn main_camera(&self) -> Option<CameraState> {
        (**self).main_camera()
    }

    fn world_to_screen(&self, camera: &CameraState, world: Vec3) -> Vec2 {
        (**self).world_to_screen(camera, world)
    }

    fn is_visible(&self, camera: &CameraState, bounds: &[Aabb]) -> bool {
        (**self).is_visible(camera, bounds)
    }
}
