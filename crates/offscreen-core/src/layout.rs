//! Screen-space placement of offscreen markers.
//!
//! The pipeline for one marker is: bring the world point in front of the
//! camera plane, project it, flip it to a top-left origin, clamp it into the
//! viewport inset by the icon half extent plus the margin, and derive the
//! arrow direction from the clamped position toward the raw one.

use glam::{Affine2, Vec2, Vec3, Vec4};

use crate::camera::{CameraHost, CameraState, Viewport};
use crate::camera_plane::CameraPlane;
use crate::draw::{DrawCommand, DrawKind, Rect, TextureId};
use crate::options::{MarkerMetrics, OverlayOptions};

/// Converts a bottom-left origin screen point to a top-left origin.
#[must_use]
pub fn flip_y(screen: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(screen.x, viewport.height() - screen.y)
}

/// The allowed range for an icon center on one axis.
///
/// Returns `None` when the viewport is too small to fit the icon and margin.
#[must_use]
pub fn inset_range(dimension: f32, icon_ext: f32, margin: f32) -> Option<(f32, f32)> {
    let lo = icon_ext + margin;
    let hi = dimension - icon_ext - margin;
    (lo <= hi).then_some((lo, hi))
}

fn clamp_axis(value: f32, dimension: f32, icon_ext: f32, margin: f32) -> f32 {
    match inset_range(dimension, icon_ext, margin) {
        Some((lo, hi)) => value.max(lo).min(hi),
        None => dimension * 0.5,
    }
}

/// Clamps a top-left origin screen point into the inset viewport rectangle.
///
/// On an axis where the inset range is empty the result is the viewport center.
#[must_use]
pub fn clamp_to_inset(raw: Vec2, viewport: Viewport, icon_ext: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        clamp_axis(raw.x, viewport.width(), icon_ext.x, margin),
        clamp_axis(raw.y, viewport.height(), icon_ext.y, margin),
    )
}

/// Transform placing an arrow quad of `arrow_ext * 2` at `position`, its top
/// edge facing `direction`.
///
/// The quad is first centered on the origin, then mapped with the basis
/// `x' = (d.y, -d.x)`, `y' = (-d.x, -d.y)`.
#[must_use]
pub fn arrow_transform(direction: Vec2, position: Vec2, arrow_ext: Vec2) -> Affine2 {
    let basis = Affine2::from_cols(
        Vec2::new(direction.y, -direction.x),
        Vec2::new(-direction.x, -direction.y),
        position,
    );
    basis * Affine2::from_translation(-arrow_ext)
}

/// Where one marker lands on screen this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPlacement {
    /// Unclamped projection, top-left origin.
    pub raw: Vec2,
    /// `raw` clamped into the inset viewport.
    pub clamped: Vec2,
    /// Unit vector from `clamped` toward `raw`, if they are meaningfully apart.
    pub direction: Option<Vec2>,
}

impl ScreenPlacement {
    /// Clamps `raw` and derives the arrow direction.
    #[must_use]
    pub fn new(raw: Vec2, viewport: Viewport, metrics: &MarkerMetrics, threshold_sq: f32) -> Self {
        let clamped = clamp_to_inset(raw, viewport, metrics.icon_ext, metrics.margin);
        let toward = raw - clamped;
        let direction = if toward.length_squared() > threshold_sq {
            toward.try_normalize()
        } else {
            None
        };
        Self {
            raw,
            clamped,
            direction,
        }
    }

    /// Returns whether the marker was pushed back onto the screen.
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.direction.is_some()
    }

    /// Icon rectangle centered on the clamped position.
    #[must_use]
    pub fn icon_rect(&self, metrics: &MarkerMetrics) -> Rect {
        Rect::from_center_size(self.clamped, metrics.icon_size)
    }

    /// Arrow center, just outside the icon along the direction.
    #[must_use]
    pub fn arrow_position(&self, metrics: &MarkerMetrics) -> Option<Vec2> {
        self.direction
            .map(|dir| self.clamped + dir * metrics.arrow_offset())
    }

    /// Draw command for the icon.
    #[must_use]
    pub fn icon_command(&self, icon: TextureId, metrics: &MarkerMetrics) -> DrawCommand {
        DrawCommand {
            kind: DrawKind::Icon,
            rect: self.icon_rect(metrics),
            texture: icon,
            transform: None,
            tint: None,
        }
    }

    /// Draw command for the arrow, or `None` when the marker is not clamped.
    #[must_use]
    pub fn arrow_command(
        &self,
        arrow: TextureId,
        tint: Vec4,
        metrics: &MarkerMetrics,
    ) -> Option<DrawCommand> {
        let dir = self.direction?;
        let position = self.arrow_position(metrics)?;
        Some(DrawCommand {
            kind: DrawKind::Arrow,
            rect: Rect::new(Vec2::ZERO, metrics.arrow_size),
            texture: arrow,
            transform: Some(arrow_transform(dir, position, metrics.arrow_ext)),
            tint: Some(tint),
        })
    }
}

/// Runs the full placement pipeline for one world point.
pub fn place_world_point<C: CameraHost + ?Sized>(
    host: &C,
    camera: &CameraState,
    world: Vec3,
    metrics: &MarkerMetrics,
    options: &OverlayOptions,
) -> ScreenPlacement {
    let viewport = camera.viewport();
    let corrected = CameraPlane::from_camera(camera).bring_in_front(world, options.plane_epsilon);
    let mut raw = flip_y(host.world_to_screen(camera, corrected), viewport);
    if !raw.is_finite() {
        log::trace!("offscreen markers: non-finite projection of {world}, using the viewport center");
        raw = viewport.center();
    }
    ScreenPlacement::new(raw, viewport, metrics, options.arrow_threshold_sq)
}
