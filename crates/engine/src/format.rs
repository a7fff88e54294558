use crate::config::ListingConfig;
use basic_utils_shared_kernel::{EntryInfo, EntryName};

/// Width of the raw byte-count column.
pub const RAW_SIZE_WIDTH: usize = 10;
/// Width of the human-readable size column.
pub const HUMAN_SIZE_WIDTH: usize = 5;

const MISSING_MTIME: &str = "-";

/// Renders one visible entry as an output line (without color or newline).
///
/// In long form, a missing `info` (failed stat) degrades to the bare name.
#[must_use]
pub fn render(name: &EntryName, info: Option<&EntryInfo>, config: &ListingConfig) -> String {
    match info {
        Some(info) if config.long_form => long_form(name, info, config.human_readable),
        _ => name.to_string(),
    }
}

/// `<mode> <size> <mtime> <name>`
#[must_use]
pub fn long_form(name: &EntryName, info: &EntryInfo, human_readable: bool) -> String {
    let size = if human_readable {
        format!("{:>#width$}", info.size, width = HUMAN_SIZE_WIDTH)
    } else {
        format!("{:>width$}", info.size, width = RAW_SIZE_WIDTH)
    };
    let mtime = info
        .modified
        .map_or_else(|| MISSING_MTIME.to_owned(), |t| t.to_string());

    format!("{} {size} {mtime} {name}", info.mode)
}
