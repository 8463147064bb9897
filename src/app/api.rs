//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::app::config::load_config;
use crate::app::{
    AppContext,
    commands::{add, init, list},
};
use crate::domain::SourceKind;
use crate::services::{
    DialoguerConfirmation, HttpSourceFetcher, LocalProjectFilesystem, embedded_registry,
};

pub use crate::app::commands::add::AddOutcome;
pub use crate::app::commands::init::{InitOptions, InitOutcome};
pub use crate::app::commands::list::SourceSummary;
pub use crate::domain::AppError;

type ProjectContext = AppContext<LocalProjectFilesystem, HttpSourceFetcher, DialoguerConfirmation>;

/// Create an `AppContext` for a project root.
fn create_context(root: PathBuf) -> Result<ProjectContext, AppError> {
    let project = LocalProjectFilesystem::new(root);
    let config = load_config(&project)?;
    let fetcher = HttpSourceFetcher::new(&config.registry)?;
    Ok(AppContext::new(project, fetcher, DialoguerConfirmation, config))
}

/// Apply the Tailwind preset to the project in the current directory.
pub fn init(options: InitOptions) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, options)
}

/// Apply the Tailwind preset to the project at the specified path.
pub fn init_at(path: impl Into<PathBuf>, options: InitOptions) -> Result<InitOutcome, AppError> {
    let ctx = create_context(path.into())?;
    init::execute(&ctx, options)
}

/// Add a component to the project in the current directory.
pub fn add_component(name: &str) -> Result<AddOutcome, AppError> {
    add_at(std::env::current_dir()?, SourceKind::Component, name)
}

/// Add a snippet to the project in the current directory.
pub fn add_snippet(name: &str) -> Result<AddOutcome, AppError> {
    add_at(std::env::current_dir()?, SourceKind::Snippet, name)
}

/// Add a registered source file to the project at the specified path.
pub fn add_at(
    path: impl Into<PathBuf>,
    kind: SourceKind,
    name: &str,
) -> Result<AddOutcome, AppError> {
    let ctx = create_context(path.into())?;
    add::execute(&ctx, kind, name)
}

/// List registered sources, optionally restricted to one kind.
pub fn list_sources(kind: Option<SourceKind>) -> Vec<SourceSummary> {
    list::execute(embedded_registry(), kind)
}
