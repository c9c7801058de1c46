//! Reference host for offscreen-markers.
//!
//! This crate provides a self-contained host the overlay can run against:
//! - A perspective/orthographic [`Camera`] and a [`CameraRig`] serving it as main camera
//! - A slot-map backed [`Scene`] whose handles go stale when objects are despawned
//! - Packing of draw commands into GPU instance records

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod instance;
pub mod scene;

pub use camera::{Camera, CameraRig, ProjectionMode};
pub use instance::{instance_bytes, pack_instances, OverlayInstance};
pub use scene::{ObjectKey, Scene, SceneObject};
