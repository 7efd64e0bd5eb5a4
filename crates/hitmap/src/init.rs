//! Initialization for hitmap-rs.

use crate::{HitmapOptions, PickSession, Result};

/// Installs the default logger.
///
/// Logging is configured through `RUST_LOG`. Calling this more than once, or
/// after the host installed its own logger, is harmless.
pub fn init() {
    let _ = env_logger::try_init();
    log::info!("hitmap-rs initialized");
}

/// Installs the default logger and creates a pick session from an options
/// file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid options JSON.
pub fn init_from_file(path: impl AsRef<std::path::Path>) -> Result<PickSession> {
    init();
    let options = HitmapOptions::load(path)?;
    log::debug!("hitmap options: {options:?}");
    Ok(PickSession::new(options))
}
