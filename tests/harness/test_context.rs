//! Shared testing harness for `reuseit` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated consumer project for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

impl TestContext {
    /// Create an empty project directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");
        Self { root, project_dir }
    }

    /// Create a project whose `package.json` declares Tailwind and whose
    /// `node_modules` carries the given installed version.
    pub(crate) fn with_tailwind(version: &str) -> Self {
        let ctx = Self::new();
        ctx.write_package_json(true);
        ctx.write_file(
            "node_modules/tailwindcss/package.json",
            &format!(r#"{{ "name": "tailwindcss", "version": "{}" }}"#, version),
        );
        ctx
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Build a command for invoking the compiled `reuseit` binary in the project.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("reuseit").expect("Failed to locate reuseit binary");
        cmd.current_dir(&self.project_dir)
            .env("HOME", self.root.path())
            .env_remove("REUSEIT_BASE_URL")
            .env_remove("REUSEIT_LOG");
        cmd
    }

    /// Build a command whose registry downloads go to `base_url`.
    pub(crate) fn cli_with_registry(&self, base_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("REUSEIT_BASE_URL", base_url);
        cmd
    }

    /// Write `package.json`, with or without a Tailwind dev dependency.
    pub(crate) fn write_package_json(&self, declares_tailwind: bool) {
        let content = if declares_tailwind {
            r#"{
  "name": "demo-app",
  "dependencies": { "react": "^18.3.1" },
  "devDependencies": { "tailwindcss": "^3.4.0" }
}
"#
        } else {
            r#"{
  "name": "demo-app",
  "dependencies": { "react": "^18.3.1" }
}
"#
        };
        self.write_file("package.json", content);
    }

    /// Write a project file, creating parent directories.
    pub(crate) fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write project file");
    }

    /// Read a project file as UTF-8.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.project_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub(crate) fn file_exists(&self, relative: &str) -> bool {
        self.project_dir.join(relative).exists()
    }

    /// Read `tailwind.config.js` and parse the exported object.
    pub(crate) fn read_tailwind_config(&self) -> serde_json::Value {
        let content = self.read_file("tailwind.config.js");
        let trimmed = content.trim();
        let body = trimmed
            .strip_prefix("module.exports =")
            .or_else(|| trimmed.strip_prefix("export default"))
            .expect("tailwind.config.js should start with an export");
        serde_json::from_str(body.trim()).expect("tailwind.config.js should export JSON")
    }
}
