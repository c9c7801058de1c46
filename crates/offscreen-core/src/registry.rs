//! Registry of tracked markers.

use std::fmt::Debug;

use crate::marker::TrackedMarker;

/// Outcome of [`MarkerRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The marker was added.
    Added,
    /// A marker for the same object was already tracked; nothing changed.
    Duplicate,
}

/// Registry of all markers the overlay draws.
///
/// Markers are kept in registration order and handed out back-to-front.
/// There is no explicit removal: entries whose object has died are dropped the
/// next time the registry is iterated.
#[derive(Debug, Clone)]
pub struct MarkerRegistry<K> {
    markers: Vec<TrackedMarker<K>>,
}

impl<K> Default for MarkerRegistry<K> {
    fn default() -> Self {
        Self {
            markers: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq + Debug> MarkerRegistry<K> {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a marker.
    ///
    /// Registering an object that is already tracked logs a warning and
    /// leaves the registry untouched.
    pub fn register(&mut self, marker: TrackedMarker<K>) -> Registration {
        if self.contains(marker.id) {
            log::warn!(
                "offscreen markers: object {:?} is already tracked",
                marker.id
            );
            return Registration::Duplicate;
        }
        self.markers.push(marker);
        Registration::Added
    }

    /// Checks if a marker for the given object is tracked.
    pub fn contains(&self, id: K) -> bool {
        self.markers.iter().any(|m| m.id == id)
    }

    /// Gets the marker for the given object.
    pub fn get(&self, id: K) -> Option<&TrackedMarker<K>> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Returns the number of tracked markers, including not yet pruned dead ones.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true if nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Drops every marker whose object is no longer alive.
    ///
    /// Returns the number of removed markers.
    pub fn prune(&mut self, mut is_alive: impl FnMut(K) -> bool) -> usize {
        let before = self.markers.len();
        self.markers.retain(|m| {
            let alive = is_alive(m.id);
            if !alive {
                log::trace!("offscreen markers: pruning {:?}", m.id);
            }
            alive
        });
        before - self.markers.len()
    }

    /// Prunes dead markers and returns the survivors back-to-front.
    pub fn iterate(
        &mut self,
        is_alive: impl FnMut(K) -> bool,
    ) -> impl Iterator<Item = &TrackedMarker<K>> + '_ {
        self.prune(is_alive);
        self.markers.iter().rev()
    }

    /// Returns the markers back-to-front without pruning.
    pub fn iter(&self) -> impl Iterator<Item = &TrackedMarker<K>> + '_ {
        self.markers.iter().rev()
    }
}
