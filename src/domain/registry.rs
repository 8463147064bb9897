//! Source registry: the canonical table of downloadable components and snippets.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Namespace an identifier is resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    Component,
    Snippet,
}

impl SourceKind {
    pub const ALL: [SourceKind; 2] = [SourceKind::Component, SourceKind::Snippet];

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Component => "component",
            SourceKind::Snippet => "snippet",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A registered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub kind: SourceKind,
    /// Lower-cased lookup key.
    pub name: String,
    /// Path of the file inside the source repository.
    pub path: String,
}

impl RegistryEntry {
    /// Final path segment, used as the local file name.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Absolute URL of the entry beneath `base_url`.
    pub fn url(&self, base_url: &Url) -> Result<Url, AppError> {
        base_url.join(&self.path).map_err(|e| {
            AppError::config_error(format!(
                "Cannot build URL for '{}' from {}: {}",
                self.name, base_url, e
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(default)]
    components: Vec<RawEntry>,
    #[serde(default)]
    snippets: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    name: String,
    path: String,
}

/// Immutable name → source mapping, one namespace per [`SourceKind`].
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    entries: BTreeMap<(SourceKind, String), RegistryEntry>,
}

impl SourceRegistry {
    /// Parse a registry table.
    ///
    /// Names are normalized to lower case; a name that appears twice within one
    /// namespace is rejected.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let file: RegistryFile =
            toml::from_str(content).map_err(|e| AppError::InvalidRegistry(e.to_string()))?;

        let mut registry = Self::default();
        for (kind, raw_entries) in
            [(SourceKind::Component, file.components), (SourceKind::Snippet, file.snippets)]
        {
            for raw in raw_entries {
                registry.insert(kind, raw)?;
            }
        }
        Ok(registry)
    }

    fn insert(&mut self, kind: SourceKind, raw: RawEntry) -> Result<(), AppError> {
        let name = normalize(&raw.name);
        let path = raw.path.trim().trim_start_matches('/').to_string();
        if name.is_empty() || path.is_empty() {
            return Err(AppError::InvalidRegistry(format!(
                "{} entry '{}' must have a name and a path",
                kind, raw.name
            )));
        }
        if path.ends_with('/') {
            return Err(AppError::InvalidRegistry(format!(
                "{} '{}' path must name a file: {}",
                kind, name, path
            )));
        }

        let key = (kind, name.clone());
        if self.entries.contains_key(&key) {
            return Err(AppError::InvalidRegistry(format!("duplicate {} '{}'", kind, name)));
        }
        self.entries.insert(key, RegistryEntry { kind, name, path });
        Ok(())
    }

    /// Resolve an identifier, ignoring case.
    pub fn lookup(&self, kind: SourceKind, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(&(kind, normalize(name)))
    }

    /// Resolve an identifier or fail with [`AppError::UnknownSource`].
    pub fn resolve(&self, kind: SourceKind, name: &str) -> Result<&RegistryEntry, AppError> {
        self.lookup(kind, name)
            .ok_or_else(|| AppError::UnknownSource { kind, name: name.to_string() })
    }

    /// Entries of one namespace, sorted by name.
    pub fn entries(&self, kind: SourceKind) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values().filter(move |entry| entry.kind == kind)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
