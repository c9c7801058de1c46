//! Error types for offscreen-markers.

use thiserror::Error;

/// The main error type for offscreen-markers operations.
///
/// None of these are raised from the per-frame path; they only come out of
/// constructors and configuration loading.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// A viewport with a non-positive or non-finite dimension.
    #[error("invalid viewport {width}x{height}: dimensions must be positive and finite")]
    InvalidViewport { width: f32, height: f32 },

    /// A camera forward vector that cannot be normalized.
    #[error("invalid camera forward vector: {0}")]
    InvalidForward(glam::Vec3),

    /// An option value outside its valid range.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for offscreen-markers operations.
pub type Result<T> = std::result::Result<T, OverlayError>;
