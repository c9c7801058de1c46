//! offscreen-markers: screen-space indicators for world objects outside the camera view.
//!
//! Every frame, each tracked object that is not visible gets an icon pinned to
//! the screen edge in its direction, plus a tinted arrow pointing toward it.
//! Objects behind the camera are mirrored in front of it first, so the icon
//! still sits on the side the object would be found by turning around.
//!
//! # Quick Start
//!
//! ```
//! use offscreen_markers::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let viewport = Viewport::new(1280.0, 720.0)?;
//!     let rig = CameraRig::new(Camera::new(viewport).looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
//!
//!     let mut scene = Scene::new();
//!     let ship = scene.spawn(SceneObject::new(Vec3::new(0.0, 0.0, 20.0)).with_unit_cube());
//!
//!     let mut engine = OverlayEngine::new(rig);
//!     engine.register(TrackedMarker::new(ship, TextureId(1), TextureId(2)));
//!
//!     // The ship is behind the camera, so its icon lands on screen.
//!     let commands = engine.render_frame(&scene);
//!     assert_eq!(commands[0].kind, DrawKind::Icon);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `offscreen-core` holds the host traits, the registry and the placement math
//! - `offscreen-render` holds a reference host: a camera rig, a slot-map scene
//!   and GPU instance packing
//! - this crate ties them together in [`OverlayEngine`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod engine;
mod init;

pub use engine::OverlayEngine;
pub use init::{init_logging, load_options};

// Re-export core types
pub use offscreen_core::{
    camera_plane::{CameraPlane, PlaneSide},
    layout::{arrow_transform, clamp_to_inset, flip_y},
    place_world_point, Aabb, CameraHost, CameraState, DrawCommand, DrawKind, Frustum,
    MarkerMetrics, MarkerRegistry, MarkerScene, OverlayError, OverlayOptions, Rect, Registration,
    Result, ScreenPlacement, TextureId, TrackedMarker, Viewport,
};

// Re-export render types
pub use offscreen_render::{
    instance_bytes, pack_instances, Camera, CameraRig, ObjectKey, OverlayInstance,
    ProjectionMode, Scene, SceneObject,
};

pub use glam::{Affine2, Mat4, Vec2, Vec3, Vec4};
