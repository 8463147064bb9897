//! List command: show registered names.

use crate::domain::{SourceKind, SourceRegistry};

/// One listed registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub kind: SourceKind,
    pub name: String,
    pub file_name: String,
}

/// Entries of `kind` (or of every kind), grouped by kind and sorted by name.
pub fn execute(registry: &SourceRegistry, kind: Option<SourceKind>) -> Vec<SourceSummary> {
    SourceKind::ALL
        .into_iter()
        .filter(|candidate| kind.is_none_or(|wanted| wanted == *candidate))
        .flat_map(|kind| registry.entries(kind))
        .map(|entry| SourceSummary {
            kind: entry.kind,
            name: entry.name.clone(),
            file_name: entry.file_name().to_string(),
        })
        .collect()
}
