mod dialoguer_confirmation;
mod embedded_presets;
mod embedded_registry;
mod http_source_fetcher;
mod local_project_filesystem;

pub use dialoguer_confirmation::DialoguerConfirmation;
pub use embedded_presets::{V3_STYLESHEET_SNIPPET, V4_STYLESHEET, v3_config_preset};
pub use embedded_registry::embedded_registry;
pub use http_source_fetcher::HttpSourceFetcher;
pub use local_project_filesystem::LocalProjectFilesystem;
