//! reuseit: add Re-use-it! components and snippets to a project and apply its Tailwind preset.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AddOutcome, InitOptions, InitOutcome, SourceSummary, add_at, add_component, add_snippet, init,
    init_at, list_sources,
};
pub use domain::{AppError, SourceKind, StyleConfig, merge};
