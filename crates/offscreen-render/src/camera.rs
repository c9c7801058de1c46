//! Camera and view management.

use glam::{Mat4, Vec3};
use offscreen_core::{CameraHost, CameraState, Result, Viewport};

/// Camera projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

/// A 3D camera rendering into a pixel viewport.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Projection mode.
    pub projection_mode: ProjectionMode,
    /// Orthographic half height (used when `projection_mode` is Orthographic).
    pub ortho_scale: f32,
    viewport: Viewport,
}

impl Camera {
    /// Creates a new camera with default settings.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4, // 45 degrees
            near: 0.01,
            far: 1000.0,
            projection_mode: ProjectionMode::Perspective,
            ortho_scale: 1.0,
            viewport,
        }
    }

    /// Places the camera at `position` looking at `target`.
    #[must_use]
    pub fn looking_at(mut self, position: Vec3, target: Vec3) -> Self {
        self.position = position;
        self.target = target;
        self
    }

    /// Returns the render target size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Sets the render target size, e.g. after a window resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        let aspect_ratio = self.viewport.aspect_ratio();
        match self.projection_mode {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh(self.fov, aspect_ratio, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let half_height = self.ortho_scale;
                let half_width = half_height * aspect_ratio;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Takes a snapshot for the overlay.
    ///
    /// Fails when position and target coincide.
    pub fn snapshot(&self) -> Result<CameraState> {
        CameraState::new(
            self.position,
            self.target - self.position,
            self.viewport,
            self.view_projection_matrix(),
        )
    }

    /// Sets the orthographic scale.
    pub fn set_ortho_scale(&mut self, scale: f32) {
        self.ortho_scale = scale.max(0.01);
    }

    /// Sets the field of view in radians.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(0.1, std::f32::consts::PI - 0.1);
    }
}

/// Holds the scene's main camera, if any, and serves it to the overlay.
#[derive(Debug, Clone, Default)]
pub struct CameraRig {
    main: Option<Camera>,
}

impl CameraRig {
    /// Creates a rig with the given main camera.
    #[must_use]
    pub fn new(main: Camera) -> Self {
        Self { main: Some(main) }
    }

    /// Creates a rig without a camera.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the main camera.
    pub fn main(&self) -> Option<&Camera> {
        self.main.as_ref()
    }

    /// Returns the main camera for modification.
    pub fn main_mut(&mut self) -> Option<&mut Camera> {
        self.main.as_mut()
    }

    /// Replaces the main camera.
    pub fn set_main(&mut self, camera: Option<Camera>) {
        self.main = camera;
    }
}

impl CameraHost for CameraRig {
    fn main_camera(&self) -> Option<CameraState> {
        let camera = self.main.as_ref()?;
        match camera.snapshot() {
            Ok(state) => Some(state),
            Err(err) => {
                log::warn!("main camera is unusable: {err}");
                None
            }
        }
    }
}
