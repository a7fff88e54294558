// src/presentation.rs
use basic_utils_engine::EngineError;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Line printed by `pwd` on success.
#[must_use]
pub fn working_directory_line(dir: &Path) -> String {
    format!("current working directory: {}", dir.display())
}

/// Exit status for a clean run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for a fatal access, write or configuration error.
pub const EXIT_FAILURE: u8 = 1;

/// Flushes `out` and turns the run outcome into a process exit status.
///
/// Access errors are reported on `out` itself, after whatever was already
/// listed; anything else goes to stderr.
pub fn finish<W: Write>(tool: &str, result: Result<(), EngineError>, out: &mut W) -> u8 {
    let outcome = result.and_then(|()| out.flush().map_err(EngineError::from));
    match outcome {
        Ok(()) => EXIT_SUCCESS,
        Err(err @ EngineError::Access { .. }) => {
            debug!("{tool}: {err:?}");
            let _ = writeln!(out, "{tool}: {err}");
            let _ = out.flush();
            EXIT_FAILURE
        }
        Err(err) => {
            let _ = out.flush();
            eprintln!("{tool}: {err}");
            EXIT_FAILURE
        }
    }
}
