//! Tailwind preconditions shared by `init` and `add`.

use crate::domain::project_paths::{PACKAGE_JSON, TAILWIND_PACKAGE_JSON};
use crate::domain::tailwind::declares_tailwind;
use crate::domain::{AppError, TailwindVersion};
use crate::ports::ProjectFilesystem;

/// Fail unless `package.json` declares Tailwind.
pub(crate) fn ensure_tailwind_declared<P: ProjectFilesystem>(project: &P) -> Result<(), AppError> {
    let Some(manifest) = project.read_optional(PACKAGE_JSON)? else {
        return Err(AppError::TailwindNotInstalled);
    };
    if declares_tailwind(&manifest)? { Ok(()) } else { Err(AppError::TailwindNotInstalled) }
}

/// Version of the Tailwind package installed under `node_modules`.
pub(crate) fn installed_tailwind_version<P: ProjectFilesystem>(
    project: &P,
) -> Result<TailwindVersion, AppError> {
    let Some(metadata) = project.read_optional(TAILWIND_PACKAGE_JSON)? else {
        return Err(AppError::TailwindVersionUnknown);
    };
    TailwindVersion::from_package_json(&metadata)
}
