use crate::error::{EngineError, Result};
use std::env;
use std::path::PathBuf;

/// Resolves the process working directory.
///
/// # Errors
/// Returns [`EngineError::WorkingDirectory`] if the directory cannot be
/// determined (e.g. it was removed, or a parent is unreadable).
pub fn working_directory() -> Result<PathBuf> {
    env::current_dir().map_err(EngineError::WorkingDirectory)
}
