pub mod configuration;
pub mod error;
pub mod framework;
pub mod object_literal;
pub mod project_paths;
pub mod registry;
pub mod style_config;
pub mod tailwind;

pub use configuration::{PathsConfig, RegistryConfig, ToolConfig};
pub use error::AppError;
pub use framework::{Framework, StylesheetPlacement, resolve_stylesheet};
pub use registry::{RegistryEntry, SourceKind, SourceRegistry};
pub use style_config::{StyleConfig, merge};
pub use tailwind::{StylingStrategy, TailwindVersion};
