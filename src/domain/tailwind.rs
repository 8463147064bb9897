//! Tailwind CSS detection and version dispatch.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::AppError;

pub const TAILWIND_PACKAGE: &str = "tailwindcss";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default)]
    dev_dependencies: Map<String, Value>,
    #[serde(default)]
    version: Option<String>,
}

fn parse_manifest(what: &str, content: &str) -> Result<PackageManifest, AppError> {
    serde_json::from_str(content)
        .map_err(|e| AppError::ParseError { what: what.to_string(), details: e.to_string() })
}

/// Whether `package.json` declares Tailwind as a runtime or dev dependency.
pub fn declares_tailwind(package_json: &str) -> Result<bool, AppError> {
    let manifest = parse_manifest("package.json", package_json)?;
    Ok(manifest.dependencies.contains_key(TAILWIND_PACKAGE)
        || manifest.dev_dependencies.contains_key(TAILWIND_PACKAGE))
}

/// Installed Tailwind version as read from the package's own metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailwindVersion {
    raw: String,
}

impl TailwindVersion {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into().trim().to_string() }
    }

    /// Read the `version` field of `node_modules/tailwindcss/package.json`.
    pub fn from_package_json(content: &str) -> Result<Self, AppError> {
        let manifest = parse_manifest("tailwindcss package metadata", content)?;
        manifest
            .version
            .filter(|version| !version.trim().is_empty())
            .map(Self::new)
            .ok_or(AppError::TailwindVersionUnknown)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Leading numeric component, e.g. `4` for `4.0.0-beta.3`.
    pub fn major(&self) -> Option<u64> {
        let head = self.raw.trim_start_matches('v').split('.').next()?;
        head.parse().ok()
    }

    pub fn strategy(&self) -> StylingStrategy {
        match self.major() {
            Some(3) => StylingStrategy::V3,
            Some(4) => StylingStrategy::V4,
            _ => StylingStrategy::Unsupported(self.raw.clone()),
        }
    }
}

impl fmt::Display for TailwindVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// How `init` applies the preset for a detected Tailwind major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylingStrategy {
    /// Merge the preset into `tailwind.config.js` and append the base stylesheet.
    V3,
    /// Overwrite the framework stylesheet with the CSS-first preset.
    V4,
    Unsupported(String),
}
