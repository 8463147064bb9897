//! Tool configuration loaded from `.reuseit.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, SourceKind};

/// Configuration for a project, every section optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

impl ToolConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.registry.validate()?;
        self.paths.validate()?;
        Ok(())
    }
}

/// Where source files are downloaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Root that registry paths are joined beneath.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "base_url '{}' cannot be used as a base",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// `url` with a path ending in `/`, so relative entry paths join beneath it.
pub fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn default_base_url() -> Url {
    Url::parse("https://raw.githubusercontent.com/roshith-prakash/re-use-it/refs/heads/master/")
        .expect("Default base URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

/// Destination directories, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
    #[serde(default = "default_snippets_dir")]
    pub snippets_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { components_dir: default_components_dir(), snippets_dir: default_snippets_dir() }
    }
}

impl PathsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (key, value) in
            [("components_dir", &self.components_dir), ("snippets_dir", &self.snippets_dir)]
        {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(AppError::InvalidConfig(format!("{key} must not be empty")));
            }
            if trimmed.starts_with('/') || trimmed.split('/').any(|segment| segment == "..") {
                return Err(AppError::InvalidConfig(format!(
                    "{key} must be a path inside the project: {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn dir_for(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Component => &self.components_dir,
            SourceKind::Snippet => &self.snippets_dir,
        }
    }

    /// Project-relative destination for a downloaded file.
    pub fn destination(&self, kind: SourceKind, file_name: &str) -> String {
        format!("{}/{}", self.dir_for(kind).trim().trim_end_matches('/'), file_name)
    }
}

fn default_components_dir() -> String {
    "src/components/reuseit".to_string()
}

fn default_snippets_dir() -> String {
    "src/utils".to_string()
}
