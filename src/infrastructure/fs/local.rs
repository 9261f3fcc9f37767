//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Whether [`LocalFs::write_if_changed`] touched the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// Replaced an existing file; carries the previous content
    Updated { previous: String },
    Unchanged,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Write `content` only when it differs from what is on disk, so make
    /// does not see a fresh timestamp for identical output.
    pub fn write_if_changed(&self, path: &Path, content: &str) -> FsResult<WriteOutcome> {
        let previous = match std::fs::read_to_string(path) {
            Ok(existing) if existing == content => return Ok(WriteOutcome::Unchanged),
            Ok(existing) => Some(existing),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(FsError::from_io(path, err)),
        };

        self.write(path, content)?;
        Ok(match previous {
            Some(previous) => WriteOutcome::Updated { previous },
            None => WriteOutcome::Created,
        })
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|err| FsError::from_io(path, err))
    }

    /// Atomic: the content goes to a temporary file in the target directory,
    /// which is then renamed over `path`.
    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|err| FsError::from_io(dir, err))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|err| FsError::from_io(dir, err))?;
        tmp.write_all(content.as_bytes())
            .map_err(|err| FsError::from_io(tmp.path(), err))?;
        tmp.persist(path)
            .map_err(|err| FsError::from_io(path, err.error))?;
        Ok(())
    }
}
