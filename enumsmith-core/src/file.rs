use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from writing a generated file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("'{path}' already exists")]
    AlreadyExists { path: PathBuf },

    #[error("failed to create directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Fail if the file already exists
    IfMissing,
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, returning the path it was written to.
    ///
    /// With [`Overwrite::IfMissing`] an existing file fails the write
    /// before anything is rendered, leaving it untouched.
    fn write(&self, base: &Path, overwrite: Overwrite) -> Result<PathBuf, FileError> {
        let path = self.path(base);
        if overwrite == Overwrite::IfMissing && path.exists() {
            return Err(FileError::AlreadyExists { path });
        }
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write content to a path, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<(), FileError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FileError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| FileError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
