//! Add command: download one registered source file into the project.

use crate::app::AppContext;
use crate::app::commands::tailwind::ensure_tailwind_declared;
use crate::domain::{AppError, SourceKind};
use crate::ports::{Confirmation, ProjectFilesystem, SourceFetcher};

/// A file written by `add` or `add-snippet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub kind: SourceKind,
    /// Normalized registry name.
    pub name: String,
    pub file_name: String,
    /// Project-relative path the file was written to.
    pub destination: String,
    pub bytes: usize,
}

/// Resolve `name`, fetch it, and write it under the configured directory.
///
/// Components require Tailwind to be declared; snippets do not. Nothing is
/// written unless the fetch succeeds.
pub fn execute<P, F, C>(
    ctx: &AppContext<P, F, C>,
    kind: SourceKind,
    name: &str,
) -> Result<AddOutcome, AppError>
where
    P: ProjectFilesystem,
    F: SourceFetcher,
    C: Confirmation,
{
    if kind == SourceKind::Component {
        ensure_tailwind_declared(ctx.project())?;
    }

    let entry = ctx.registry().resolve(kind, name)?;
    let url = entry.url(&ctx.config().registry.base_url)?;
    let body = ctx.fetcher().fetch(&url)?;

    let destination = ctx.config().paths.destination(kind, entry.file_name());
    ctx.project().write_bytes(&destination, &body)?;
    tracing::debug!(%url, destination = %destination, "source file written");

    Ok(AddOutcome {
        kind,
        name: entry.name.clone(),
        file_name: entry.file_name().to_string(),
        destination,
        bytes: body.len(),
    })
}
