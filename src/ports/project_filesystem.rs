//! Project-level filesystem operations.
//!
//! This port provides file I/O scoped to the consumer project's root. It does
//! not know which files matter to Tailwind or the registry; those paths belong
//! to the domain.

use crate::domain::AppError;

/// Port for filesystem access inside the consumer project.
///
/// All `path` arguments are relative to the project root and use `/` as the
/// separator.
pub trait ProjectFilesystem {
    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Read a file if present.
    fn read_optional(&self, path: &str) -> Result<Option<String>, AppError> {
        if self.file_exists(path) { self.read_file(path).map(Some) } else { Ok(None) }
    }

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.write_bytes(path, content.as_bytes())
    }

    /// Write raw bytes to a file, creating parent directories as needed.
    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError>;

    /// Append UTF-8 content to a file, creating it (and its parents) if absent.
    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError>;
}
