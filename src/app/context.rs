use crate::domain::{SourceRegistry, ToolConfig};
use crate::ports::{Confirmation, ProjectFilesystem, SourceFetcher};
use crate::services::embedded_registry;

/// Application context holding dependencies for command execution.
pub struct AppContext<P: ProjectFilesystem, F: SourceFetcher, C: Confirmation> {
    project: P,
    fetcher: F,
    confirmation: C,
    config: ToolConfig,
    registry: &'static SourceRegistry,
}

impl<P: ProjectFilesystem, F: SourceFetcher, C: Confirmation> AppContext<P, F, C> {
    /// Create a new application context backed by the embedded registry.
    pub fn new(project: P, fetcher: F, confirmation: C, config: ToolConfig) -> Self {
        Self { project, fetcher, confirmation, config, registry: embedded_registry() }
    }

    /// Get a reference to the project filesystem.
    pub fn project(&self) -> &P {
        &self.project
    }

    /// Get a reference to the source fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn confirmation(&self) -> &C {
        &self.confirmation
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn registry(&self) -> &'static SourceRegistry {
        self.registry
    }
}
