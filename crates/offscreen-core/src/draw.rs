//! Draw instructions handed back to the host.

use glam::{Affine2, Vec2, Vec4};

/// Opaque handle to a texture owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Axis-aligned rectangle in pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Creates a rectangle of `size` centered at `center`.
    #[must_use]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Returns whether `other` lies entirely inside this rectangle.
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.cmpge(self.min).all() && other.max().cmple(self.max()).all()
    }
}

/// What a draw command paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    /// The marker icon, axis aligned.
    Icon,
    /// The direction arrow, rotated toward the marker.
    Arrow,
}

/// One textured quad for the host to draw in the overlay pass.
///
/// When `transform` is set, `rect` is in the arrow's local space and the
/// transform maps it to screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub kind: DrawKind,
    pub rect: Rect,
    pub texture: TextureId,
    pub transform: Option<Affine2>,
    pub tint: Option<Vec4>,
}

impl DrawCommand {
    /// Returns the four corners of the quad in screen pixels.
    ///
    /// Order: top-left, top-right, bottom-right, bottom-left of `rect`.
    #[must_use]
    pub fn screen_corners(&self) -> [Vec2; 4] {
        let min = self.rect.min;
        let max = self.rect.max();
        let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
        match self.transform {
            Some(t) => corners.map(|c| t.transform_point2(c)),
            None => corners,
        }
    }

    /// Center of the quad in screen pixels.
    #[must_use]
    pub fn screen_center(&self) -> Vec2 {
        let center = self.rect.center();
        self.transform
            .map_or(center, |t| t.transform_point2(center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_center() {
        let rect = Rect::from_center_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(rect.min, Vec2::new(8.0, 17.0));
        assert_eq!(rect.max(), Vec2::new(12.0, 23.0));
        assert_eq!(rect.center(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        assert!(outer.contains_rect(&Rect::new(Vec2::ONE, Vec2::splat(9.0))));
        assert!(!outer.contains_rect(&Rect::new(Vec2::ONE, Vec2::splat(9.5))));
    }

    #[test]
    fn test_screen_corners_with_transform() {
        let cmd = DrawCommand {
            kind: DrawKind::Arrow,
            rect: Rect::new(Vec2::ZERO, Vec2::new(2.0, 4.0)),
            texture: TextureId(1),
            transform: Some(Affine2::from_translation(Vec2::new(5.0, 5.0))),
            tint: None,
        };
        let corners = cmd.screen_corners();
        assert_eq!(corners[0], Vec2::new(5.0, 5.0));
        assert_eq!(corners[2], Vec2::new(7.0, 9.0));
        assert_eq!(cmd.screen_center(), Vec2::new(6.0, 7.0));
    }
}
