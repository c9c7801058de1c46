//! Process-level setup for offscreen-markers.

use std::path::Path;

use crate::{OverlayOptions, Result};

/// Installs `env_logger` as the global logger.
///
/// Safe to call more than once; later calls are no-ops. Verbosity follows
/// `RUST_LOG`, e.g. `RUST_LOG=offscreen_core=trace` to see registry pruning.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Loads overlay options from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// out-of-range values.
///
/// # Example
///
/// ```no_run
/// use offscreen_markers::*;
///
/// fn main() -> Result<()> {
///     init_logging();
///     let options = load_options("overlay.json")?;
///     let engine: OverlayEngine<ObjectKey, _> =
///         OverlayEngine::with_options(CameraRig::empty(), options)?;
///     assert!(engine.registry().is_empty());
///     Ok(())
/// }
/// ```
pub fn load_options(path: impl AsRef<Path>) -> Result<OverlayOptions> {
    let path = path.as_ref();
    let options = OverlayOptions::from_json_file(path)?;
    log::info!("loaded overlay options from {}", path.display());
    Ok(options)
}
