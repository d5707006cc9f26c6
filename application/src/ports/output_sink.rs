//! Output sink port
//!
//! Defines where generated copy is persisted. The filesystem adapter lives
//! in the infrastructure layer; use-case tests substitute counting fakes.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while persisting output.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write output to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Sink for generated campaign copy.
///
/// `write` replaces the full contents at `path` (overwrite, not append)
/// and creates missing parent directories. It is only called after a
/// successful completion, so a failed run never leaves a partial file.
pub trait OutputSink: Send + Sync {
    fn write(&self, path: &Path, contents: &str) -> Result<(), OutputError>;
}
