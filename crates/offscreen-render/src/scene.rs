//! A minimal world of positioned objects with generational handles.
//!
//! Despawned objects leave their key dangling; the slot map's generation
//! check makes such keys report as dead, which is what the marker registry
//! prunes on.

use glam::Vec3;
use offscreen_core::{Aabb, MarkerScene};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle of an object in a [`Scene`].
    pub struct ObjectKey;
}

/// One object in the scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// World-space position of the object's origin.
    pub position: Vec3,
    /// Bounds of each renderable part, relative to `position`.
    local_bounds: Vec<Aabb>,
    /// `local_bounds` moved to `position`; refreshed on every move.
    world_bounds: Vec<Aabb>,
}

impl SceneObject {
    /// Creates an object without renderable parts.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            local_bounds: Vec::new(),
            world_bounds: Vec::new(),
        }
    }

    /// Adds a renderable part with bounds given relative to the object origin.
    #[must_use]
    pub fn with_part(mut self, local: Aabb) -> Self {
        self.local_bounds.push(local);
        self.world_bounds.push(local.translated(self.position));
        self
    }

    /// Adds a unit cube centered on the object origin.
    #[must_use]
    pub fn with_unit_cube(self) -> Self {
        self.with_part(Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5)))
    }

    /// World-space bounds of the renderable parts.
    pub fn world_bounds(&self) -> &[Aabb] {
        &self.world_bounds
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        for (world, local) in self.world_bounds.iter_mut().zip(&self.local_bounds) {
            *world = local.translated(position);
        }
    }
}

/// Owns the scene's objects.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectKey, SceneObject>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object and returns its handle.
    pub fn spawn(&mut self, object: SceneObject) -> ObjectKey {
        self.objects.insert(object)
    }

    /// Removes an object. Returns it if the handle was live.
    pub fn despawn(&mut self, key: ObjectKey) -> Option<SceneObject> {
        self.objects.remove(key)
    }

    /// Moves an object. Returns false if the handle is dead.
    pub fn set_position(&mut self, key: ObjectKey, position: Vec3) -> bool {
        match self.objects.get_mut(key) {
            Some(object) => {
                object.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Gets an object by handle.
    pub fn get(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Returns the number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl MarkerScene<ObjectKey> for Scene {
    fn world_position(&self, id: ObjectKey) -> Option<Vec3> {
        self.objects.get(id).map(|o| o.position)
    }

    fn is_alive(&self, id: ObjectKey) -> bool {
        self.objects.contains_key(id)
    }

    fn renderable_bounds(&self, id: ObjectKey) -> &[Aabb] {
        match self.objects.get(id) {
            Some(object) => object.world_bounds(),
            None => &[],
        }
    }
}
