//! Filesystem output sink

use fundcraft_application::{OutputError, OutputSink};
use std::path::Path;
use tracing::debug;

/// Writes generated copy to a file, creating parent directories as needed.
///
/// Overwrite semantics: the file always ends up holding exactly the text
/// of the current run. Directory creation is idempotent.
pub struct FileOutputSink;

impl OutputSink for FileOutputSink {
    fn write(&self, path: &Path, contents: &str) -> Result<(), OutputError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| OutputError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        std::fs::write(path, contents).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = contents.len(), "output written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("nested").join("campaign.md");

        FileOutputSink.write(&path, "hello").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campaign.md");

        FileOutputSink.write(&path, "first run, long contents").unwrap();
        FileOutputSink.write(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        // The destination's parent is a file, so create_dir_all must fail
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("campaign.md");

        let error = FileOutputSink.write(&path, "hello").unwrap_err();
        assert!(matches!(error, OutputError::Write { .. }));
    }
}
