//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use modgen_core::application::ports::{Filesystem, PortError};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), PortError> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(e, "create directory"))
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| map_io_error(e, "create parent"))?;
        }
        std::fs::write(path, contents).map_err(|e| map_io_error(e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> Result<String, PortError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(PortError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(map_io_error(e, "read file")),
        }
    }
}

fn map_io_error(e: io::Error, operation: &str) -> PortError {
    PortError::Io(format!("failed to {operation}: {e}"))
}
