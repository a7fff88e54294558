// crates/engine/src/lib.rs
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod colorize;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod filter;
pub mod format;
pub mod pwd;

pub use crate::config::{ListingConfig, ListingConfigBuilder};
pub use crate::error::{EngineError, Result};

/// Lists every target in order, or `.` when `targets` is empty.
///
/// Each target is fully listed before the next one is opened.
///
/// # Errors
///
/// Stops at the first target that cannot be enumerated and returns its
/// [`EngineError::Access`]; entries of earlier targets have already been
/// written to `out`. Write failures surface as [`EngineError::Output`].
pub fn run<W: Write>(config: &ListingConfig, targets: &[PathBuf], out: &mut W) -> Result<()> {
    if targets.is_empty() {
        return list(config, Path::new("."), out);
    }

    for target in targets {
        list(config, target, out)?;
    }
    Ok(())
}

/// Lists a single target: enumerate, filter, then render each entry in
/// enumeration order.
///
/// Per-entry metadata failures never abort the listing; the entry is
/// printed by name and without color.
///
/// # Errors
///
/// Returns [`EngineError::Access`] if `target` cannot be enumerated, before
/// anything is written.
pub fn list<W: Write>(config: &ListingConfig, target: &Path, out: &mut W) -> Result<()> {
    debug!("listing {} with {config:?}", target.display());
    let names = filesystem::read_entry_names(target)?;

    for name in names
        .iter()
        .filter(|name| filter::is_visible(name, config.show_hidden))
    {
        let info = if config.needs_metadata() {
            filesystem::stat_entry(target, name)
        } else {
            None
        };

        let color = if config.colorize {
            info.as_ref().and_then(colorize::classify)
        } else {
            None
        };
        let line = format::render(name, info.as_ref(), config);
        colorize::write_line(out, &line, color)?;
    }
    Ok(())
}
