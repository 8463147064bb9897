use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// In-memory project filesystem for testing.
#[derive(Default)]
pub struct MemoryProjectFilesystem {
    files: RefCell<BTreeMap<String, Vec<u8>>>,
}

#[allow(dead_code)]
impl MemoryProjectFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(path.to_string(), content.as_bytes().to_vec());
        self
    }

    /// A project declaring Tailwind with the given installed version.
    pub fn with_tailwind(self, version: &str) -> Self {
        self.with_file("package.json", r#"{"devDependencies": {"tailwindcss": "*"}}"#).with_file(
            "node_modules/tailwindcss/package.json",
            &format!(r#"{{"name": "tailwindcss", "version": "{version}"}}"#),
        )
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl ProjectFilesystem for MemoryProjectFilesystem {
    fn file_exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, format!("{path} not found")))
        })
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        self.files.borrow_mut().insert(path.to_string(), content.to_vec());
        Ok(())
    }

    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .extend_from_slice(content.as_bytes());
        Ok(())
    }
}
