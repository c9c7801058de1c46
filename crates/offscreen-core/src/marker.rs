//! Tracked markers and the scene interface they are read from.

use glam::{Vec3, Vec4};

use crate::bounds::Aabb;
use crate::draw::TextureId;

/// Display attributes of one tracked world object.
///
/// `id` is a lightweight handle into the host's scene; the marker never owns
/// the object and never caches its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedMarker<K> {
    /// Handle of the owning world object.
    pub id: K,
    /// Icon texture.
    pub icon: TextureId,
    /// Arrow texture.
    pub arrow: TextureId,
    /// RGBA tint applied to the arrow.
    pub color: Vec4,
}

impl<K> TrackedMarker<K> {
    /// Creates a marker with a white arrow tint.
    pub fn new(id: K, icon: TextureId, arrow: TextureId) -> Self {
        Self {
            id,
            icon,
            arrow,
            color: Vec4::ONE,
        }
    }

    /// Sets the arrow tint.
    #[must_use]
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }
}

/// The object side of the host framework.
///
/// Implementations answer questions about the objects markers are attached
/// to, by handle. A handle whose object was destroyed must report
/// `is_alive == false`.
pub trait MarkerScene<K> {
    /// Current world position of the object, `None` if it no longer exists.
    fn world_position(&self, id: K) -> Option<Vec3>;

    /// Whether the object still exists.
    fn is_alive(&self, id: K) -> bool {
        self.world_position(id).is_some()
    }

    /// World-space bounds of everything the object renders.
    fn renderable_bounds(&self, id: K) -> &[Aabb];
}

impl<K, S: MarkerScene<K> + ?Sized> MarkerScene<K> for &S {
    fn world_position(&self, id: K) -> Option<Vec3> {
        (**self).world_position(id)
    }

    fn is_alive(&self, id: K) -> bool {
        (**self).is_alive(id)
    }

    fn renderable_bounds(&self, id: K) -> &[Aabb] {
        (**self).renderable_bounds(id)
    }
}
