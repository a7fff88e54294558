// src/config.rs
use crate::args::LsArgs;
pub use basic_utils_engine::{EngineError, ListingConfig, ListingConfigBuilder};

impl TryFrom<&LsArgs> for ListingConfig {
    type Error = EngineError;

    fn try_from(args: &LsArgs) -> Result<Self, Self::Error> {
        Ok(ListingConfigBuilder::default()
            .show_hidden(args.all)
            .long_form(args.long)
            .human_readable(args.human_readable)
            .colorize(args.color)
            .build()?)
    }
}
