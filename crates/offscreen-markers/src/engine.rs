//! The per-frame overlay pass.

use std::fmt::Debug;

use glam::Vec3;
use offscreen_core::{
    place_world_point, CameraHost, CameraState, DrawCommand, MarkerMetrics, MarkerRegistry,
    MarkerScene, OverlayOptions, Registration, Result, ScreenPlacement, TrackedMarker,
};

/// Computes offscreen marker draw commands for one camera.
///
/// The engine is built once around the host's camera interface and owns the
/// marker registry. Nothing carries over between frames except the registry
/// contents.
#[derive(Debug)]
pub struct OverlayEngine<K, C> {
    host: C,
    options: OverlayOptions,
    registry: MarkerRegistry<K>,
}

impl<K, C> OverlayEngine<K, C>
where
    K: Copy + PartialEq + Debug,
    C: CameraHost,
{
    /// Creates an engine with default options.
    pub fn new(host: C) -> Self {
        Self {
            host,
            options: OverlayOptions::default(),
            registry: MarkerRegistry::new(),
        }
    }

    /// Creates an engine with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn with_options(host: C, options: OverlayOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            host,
            options,
            registry: MarkerRegistry::new(),
        })
    }

    /// Returns the camera host.
    pub fn host(&self) -> &C {
        &self.host
    }

    /// Returns the camera host for modification.
    pub fn host_mut(&mut self) -> &mut C {
        &mut self.host
    }

    /// Returns the active options.
    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Returns the marker registry.
    pub fn registry(&self) -> &MarkerRegistry<K> {
        &self.registry
    }

    /// Starts tracking a marker. Called once per object, on its initialization.
    pub fn register(&mut self, marker: TrackedMarker<K>) -> Registration {
        self.registry.register(marker)
    }

    /// Runs the overlay pass against the host's main camera.
    ///
    /// Without a main camera this logs a warning and returns nothing; the next
    /// call simply tries again.
    pub fn render_frame<S: MarkerScene<K>>(&mut self, scene: &S) -> Vec<DrawCommand> {
        let Some(camera) = self.host.main_camera() else {
            log::warn!("offscreen markers: no main camera, skipping frame");
            return Vec::new();
        };
        self.render_overlay(&camera, scene)
    }

    /// Runs the overlay pass for an explicit camera snapshot.
    ///
    /// Dead markers are pruned first. Every remaining marker whose object is
    /// outside the frustum yields an icon command, followed by an arrow
    /// command when the icon had to be clamped. Commands come back-to-front.
    pub fn render_overlay<S: MarkerScene<K>>(
        &mut self,
        camera: &CameraState,
        scene: &S,
    ) -> Vec<DrawCommand> {
        let Self {
            host,
            options,
            registry,
        } = self;

        let metrics = MarkerMetrics::new(camera.viewport(), options);
        let mut commands = Vec::new();
        let mut offscreen = 0usize;

        for marker in registry.iterate(|id| scene.is_alive(id)) {
            let Some(world) = scene.world_position(marker.id) else {
                continue;
            };
            if host.is_visible(camera, scene.renderable_bounds(marker.id)) {
                continue;
            }
            offscreen += 1;

            let placement = place_world_point(&*host, camera, world, &metrics, options);
            commands.push(placement.icon_command(marker.icon, &metrics));
            if let Some(arrow) = placement.arrow_command(marker.arrow, marker.color, &metrics) {
                commands.push(arrow);
            }
        }

        log::debug!(
            "offscreen markers: {offscreen} of {} tracked offscreen, {} draw commands",
            registry.len(),
            commands.len()
        );
        commands
    }

    /// Places a single world point without touching the registry.
    pub fn place(&self, camera: &CameraState, world: Vec3) -> ScreenPlacement {
        let metrics = MarkerMetrics::new(camera.viewport(), &self.options);
        place_world_point(&self.host, camera, world, &metrics, &self.options)
    }
}
