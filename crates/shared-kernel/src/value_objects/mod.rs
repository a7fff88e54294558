// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry;
pub mod file_info;

pub use entry::{EntryInfo, EntryKind, EntryMode};
pub use file_info::{EntryName, FileSize, ModificationTime};
