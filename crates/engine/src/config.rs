use derive_builder::Builder;

/// Immutable listing options, built once from the command line and shared by
/// every stage of the lister.
///
/// The builder has no defaults: every flag must be set explicitly, and a
/// forgotten one is reported by `build()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
#[allow(clippy::struct_excessive_bools)]
pub struct ListingConfig {
    /// Include entries whose name starts with `.`.
    pub show_hidden: bool,
    /// Render mode, size, mtime and name instead of the bare name.
    pub long_form: bool,
    /// Scale sizes in long form (`1.5K`) instead of raw byte counts.
    pub human_readable: bool,
    /// Wrap lines in a color escape chosen by entry kind.
    pub colorize: bool,
}

impl ListingConfig {
    /// Whether rendering an entry needs a metadata query at all.
    #[must_use]
    pub const fn needs_metadata(&self) -> bool {
        self.long_form || self.colorize
    }
}
