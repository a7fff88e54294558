use crate::error::{EngineError, Result};
use basic_utils_shared_kernel::{EntryInfo, EntryName};
use log::debug;
use std::fs;
use std::path::Path;

/// Reads every child name of `target`, excluding `.` and `..`.
///
/// Names come back in the order the OS reports them. The directory handle is
/// owned by this call and closed before it returns, on success and on error.
///
/// # Errors
/// Returns [`EngineError::Access`] if `target` cannot be opened as a directory
/// or if reading any entry fails.
pub fn read_entry_names(target: &Path) -> Result<Vec<EntryName>> {
    let dir = fs::read_dir(target).map_err(|e| EngineError::access(target, e))?;

    let names = dir
        .map(|entry| {
            entry
                .map(|e| EntryName::from_os_str(&e.file_name()))
                .map_err(|e| EngineError::access(target, e))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("{}: {} entries", target.display(), names.len());
    Ok(names)
}

/// Queries metadata for `name` inside `target` without following symlinks.
///
/// Returns `None` when the entry cannot be stat'ed (e.g. it vanished after the
/// directory was read); callers render such entries without metadata.
pub fn stat_entry(target: &Path, name: &EntryName) -> Option<EntryInfo> {
    let path = target.join(name.as_os_str());
    match fs::symlink_metadata(&path) {
        Ok(meta) => Some(EntryInfo::from(&meta)),
        Err(e) => {
            debug!("stat {} failed: {e}", path.display());
            None
        }
    }
}
