//! Core abstractions for offscreen-markers.
//!
//! This crate provides the pieces the overlay engine is assembled from:
//! - [`CameraHost`] and [`MarkerScene`], the two traits a host framework implements
//! - [`MarkerRegistry`] for tracked markers, pruned lazily on iteration
//! - The placement geometry in [`layout`] and [`camera_plane`]
//! - [`DrawCommand`], the output handed back to the host
//! - Configuration options and error types

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Exact float comparisons are intentional for the camera-plane test
#![allow(clippy::float_cmp)]

pub mod bounds;
pub mod camera;
pub mod camera_plane;
pub mod draw;
pub mod error;
pub mod layout;
pub mod marker;
pub mod options;
pub mod registry;

pub use bounds::{Aabb, Frustum, Plane};
pub use camera::{CameraHost, CameraState, Viewport};
pub use camera_plane::{CameraPlane, PlaneSide};
pub use draw::{DrawCommand, DrawKind, Rect, TextureId};
pub use error::{OverlayError, Result};
pub use layout::{place_world_point, ScreenPlacement};
pub use marker::{MarkerScene, TrackedMarker};
pub use options::{MarkerMetrics, OverlayOptions};
pub use registry::{MarkerRegistry, Registration};

// Re-export glam types for convenience
pub use glam::{Affine2, Mat4, Vec2, Vec3, Vec4};
