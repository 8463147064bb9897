use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// Filesystem access rooted at a project directory.
#[derive(Debug, Clone)]
pub struct LocalProjectFilesystem {
    root: PathBuf,
}

impl LocalProjectFilesystem {
    /// Create a project filesystem for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Absolute path of a project-relative `/`-separated path.
    fn resolve_path(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }

    fn ensure_parent(path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl ProjectFilesystem for LocalProjectFilesystem {
    fn file_exists(&self, path: &str) -> bool {
        self.resolve_path(path).exists()
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve_path(path))?)
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        let full = self.resolve_path(path);
        Self::ensure_parent(&full)?;
        fs::write(&full, content)?;
        Ok(())
    }

    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full = self.resolve_path(path);
        Self::ensure_parent(&full)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&full)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}
