//! File sink bound to one path, opened in append mode when the sink is attached.

use crate::internal;

use super::{LogRecord, Output, SinkKind};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Holds the open handle for the sink's lifetime. The mutex keeps one record's line
/// from interleaving with another thread's.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileOutput {
    /// Opens (or creates) `path` for appending. Parent directories are not created:
    /// a missing directory is reported like any other unwritable path.
    ///
    /// # Errors
    /// Returns `Error::SinkOpen` carrying the path and the underlying I/O error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref().to_path_buf();
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                internal::debug("FILE", &format!("Opened {}", path.display()));
                Ok(Self {
                    path,
                    file: Mutex::new(file),
                })
            }
            Err(source) => {
                internal::error(
                    "FILE",
                    &format!("Failed to open {}: {source}", path.display()),
                );
                Err(crate::Error::SinkOpen { path, source })
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for FileOutput {
    fn write(&self, _record: &LogRecord, line: &str) -> Result<(), crate::Error> {
        // Single write with the newline attached so a line is never split.
        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::File(self.path.clone())
    }
}
