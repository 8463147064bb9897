//! Registry table compiled into the binary.

use std::sync::OnceLock;

use crate::domain::SourceRegistry;

static REGISTRY_TOML: &str = include_str!("../assets/registry.toml");

static REGISTRY: OnceLock<SourceRegistry> = OnceLock::new();

/// The canonical registry, parsed on first use.
pub fn embedded_registry() -> &'static SourceRegistry {
    REGISTRY.get_or_init(|| {
        SourceRegistry::from_toml(REGISTRY_TOML).expect("Embedded registry must be valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceKind;

    #[test]
    fn loads_every_component_and_snippet() {
        let registry = embedded_registry();
        assert_eq!(registry.entries(SourceKind::Component).count(), 32);
        assert_eq!(registry.entries(SourceKind::Snippet).count(), 12);
    }

    #[test]
    fn resolves_known_names_ignoring_case() {
        let registry = embedded_registry();
        let button = registry.lookup(SourceKind::Component, "PrimaryButton").unwrap();
        assert_eq!(button.path, "src/components/PrimaryButton.tsx");

        let radio = registry.lookup(SourceKind::Component, "radioButton").unwrap();
        assert_eq!(radio.file_name(), "RadioButton.tsx");

        let debounce = registry.lookup(SourceKind::Snippet, "useDebounce").unwrap();
        assert_eq!(debounce.file_name(), "useDebounce.tsx");
    }

    #[test]
    fn component_files_live_under_components() {
        let registry = embedded_registry();
        assert!(
            registry
                .entries(SourceKind::Component)
                .all(|entry| entry.path.starts_with("src/components/"))
        );
        assert!(
            registry.entries(SourceKind::Snippet).all(|entry| entry.path.starts_with("src/utils/"))
        );
    }
}
