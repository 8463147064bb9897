//! Init command: apply the styling preset for the installed Tailwind major.

use crate::app::AppContext;
use crate::app::commands::tailwind::{ensure_tailwind_declared, installed_tailwind_version};
use crate::domain::project_paths::{TAILWIND_CONFIG, V3_STYLESHEET};
use crate::domain::style_config::{ConfigModule, parse_config_module, render_config_module};
use crate::domain::{AppError, Framework, StylingStrategy, TailwindVersion, merge, resolve_stylesheet};
use crate::ports::{Confirmation, ProjectFilesystem, SourceFetcher};
use crate::services::{V3_STYLESHEET_SNIPPET, V4_STYLESHEET, v3_config_preset};

/// Options for `init`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Skip the confirmation before overwriting a v4 stylesheet.
    pub assume_yes: bool,
}

/// What `init` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// Preset merged into the JS config; base styles appended unless present.
    V3 {
        version: TailwindVersion,
        config_path: &'static str,
        stylesheet_path: &'static str,
        stylesheet_appended: bool,
    },
    /// Stylesheet overwritten with the CSS-first preset.
    V4 {
        version: TailwindVersion,
        framework: Option<Framework>,
        stylesheet_path: &'static str,
    },
    /// The user declined the v4 overwrite; nothing was written.
    Declined { version: TailwindVersion, stylesheet_path: &'static str },
    /// Neither v3 nor v4; nothing was written.
    Unsupported { version: TailwindVersion },
}

impl InitOutcome {
    pub fn version(&self) -> &TailwindVersion {
        match self {
            InitOutcome::V3 { version, .. }
            | InitOutcome::V4 { version, .. }
            | InitOutcome::Declined { version, .. }
            | InitOutcome::Unsupported { version } => version,
        }
    }
}

pub fn execute<P, F, C>(
    ctx: &AppContext<P, F, C>,
    options: InitOptions,
) -> Result<InitOutcome, AppError>
where
    P: ProjectFilesystem,
    F: SourceFetcher,
    C: Confirmation,
{
    let project = ctx.project();
    ensure_tailwind_declared(project)?;
    let version = installed_tailwind_version(project)?;
    tracing::info!(%version, "detected Tailwind CSS");

    match version.strategy() {
        StylingStrategy::V3 => apply_v3(project, version),
        StylingStrategy::V4 => apply_v4(project, ctx.confirmation(), options, version),
        StylingStrategy::Unsupported(raw) => {
            tracing::warn!(version = %raw, "no preset for this Tailwind major");
            Ok(InitOutcome::Unsupported { version })
        }
    }
}

fn apply_v3<P: ProjectFilesystem>(
    project: &P,
    version: TailwindVersion,
) -> Result<InitOutcome, AppError> {
    // Parse before writing anything so an unreadable config aborts cleanly.
    let existing = match project.read_optional(TAILWIND_CONFIG)? {
        Some(content) => parse_config_module(TAILWIND_CONFIG, &content)?,
        None => ConfigModule::default(),
    };
    let merged = merge(&existing.config, &v3_config_preset());
    let rendered = render_config_module(&merged, existing.export)?;

    let stylesheet_appended = append_base_styles(project)?;
    project.write_file(TAILWIND_CONFIG, &rendered)?;
    tracing::debug!(path = TAILWIND_CONFIG, "wrote merged Tailwind config");

    Ok(InitOutcome::V3 {
        version,
        config_path: TAILWIND_CONFIG,
        stylesheet_path: V3_STYLESHEET,
        stylesheet_appended,
    })
}

/// Append the base styles once; returns whether anything was written.
fn append_base_styles<P: ProjectFilesystem>(project: &P) -> Result<bool, AppError> {
    if let Some(current) = project.read_optional(V3_STYLESHEET)?
        && current.contains(V3_STYLESHEET_SNIPPET.trim())
    {
        tracing::debug!(path = V3_STYLESHEET, "base styles already present");
        return Ok(false);
    }
    project.append_file(V3_STYLESHEET, V3_STYLESHEET_SNIPPET)?;
    Ok(true)
}

fn apply_v4<P: ProjectFilesystem, C: Confirmation>(
    project: &P,
    confirmation: &C,
    options: InitOptions,
    version: TailwindVersion,
) -> Result<InitOutcome, AppError> {
    let placement = resolve_stylesheet(|marker| project.file_exists(marker));
    tracing::debug!(
        framework = ?placement.framework,
        stylesheet = placement.stylesheet,
        "resolved stylesheet placement"
    );

    if !options.assume_yes {
        let prompt = format!(
            "Tailwind v4 detected. init will overwrite {}. Do you want to continue?",
            placement.stylesheet
        );
        if confirmation.confirm(&prompt)? != Some(true) {
            return Ok(InitOutcome::Declined { version, stylesheet_path: placement.stylesheet });
        }
    }

    project.write_file(placement.stylesheet, V4_STYLESHEET)?;
    Ok(InitOutcome::V4 {
        version,
        framework: placement.framework,
        stylesheet_path: placement.stylesheet,
    })
}
