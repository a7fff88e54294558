// src/logging.rs
use env_logger::{Builder, Env, Target};

/// Installs the stderr logger. `RUST_LOG` overrides the default `warn` level.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
