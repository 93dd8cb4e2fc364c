//! Errors raised while loading grid files.

use std::path::PathBuf;

use thiserror::Error;

/// Grid file loading errors
#[derive(Debug, Error)]
pub enum GridError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is too short: expected {expected} elements, found {got}")]
    ShortRead {
        path: PathBuf,
        expected: usize,
        got: usize,
    },
}
