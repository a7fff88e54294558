use std::borrow::Cow;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ListingConfigBuilderError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A target path could not be opened or enumerated.
    #[error("cannot access: {}: {}", .path.display(), access_reason(.source))]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot find directory")]
    WorkingDirectory(#[source] io::Error),

    #[error("write error: {0}")]
    Output(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }
}

impl From<ListingConfigBuilderError> for EngineError {
    fn from(err: ListingConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Maps common kinds to their classic libc wording without the `(os error N)` suffix.
fn access_reason(err: &io::Error) -> Cow<'static, str> {
    match err.kind() {
        io::ErrorKind::NotFound => Cow::Borrowed("No such file or directory"),
        io::ErrorKind::PermissionDenied => Cow::Borrowed("Permission denied"),
        io::ErrorKind::NotADirectory => Cow::Borrowed("Not a directory"),
        _ => Cow::Owned(err.to_string()),
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
