use basic_utils_shared_kernel::EntryName;

/// Returns true if `name` should be listed.
#[must_use]
pub fn is_visible(name: &EntryName, show_hidden: bool) -> bool {
    show_hidden || !name.is_hidden()
}
