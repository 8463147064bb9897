//! Tool configuration loading from the project root.

use url::Url;

use crate::domain::configuration::with_trailing_slash;
use crate::domain::project_paths::TOOL_CONFIG;
use crate::domain::{AppError, ToolConfig};
use crate::ports::ProjectFilesystem;

/// Environment variable replacing `registry.base_url`.
pub const BASE_URL_ENV: &str = "REUSEIT_BASE_URL";

/// Load `.reuseit.toml` (if present), apply environment overrides, and validate.
pub fn load_config<P: ProjectFilesystem>(project: &P) -> Result<ToolConfig, AppError> {
    load_config_with(project, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an explicit environment lookup.
pub fn load_config_with<P, E>(project: &P, env: E) -> Result<ToolConfig, AppError>
where
    P: ProjectFilesystem,
    E: Fn(&str) -> Option<String>,
{
    let mut config = match project.read_optional(TOOL_CONFIG)? {
        Some(content) => {
            tracing::debug!(path = TOOL_CONFIG, "loading tool configuration");
            parse_config_content(&content)?
        }
        None => ToolConfig::default(),
    };

    apply_env_overrides(&mut config, env)?;
    config.validate()?;
    config.registry.base_url = with_trailing_slash(config.registry.base_url);
    Ok(config)
}

pub fn parse_config_content(content: &str) -> Result<ToolConfig, AppError> {
    Ok(toml::from_str(content)?)
}

fn apply_env_overrides<E>(config: &mut ToolConfig, env: E) -> Result<(), AppError>
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(value) = env(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
        let url = Url::parse(value.trim()).map_err(|e| {
            AppError::InvalidConfig(format!("{BASE_URL_ENV} is not a valid URL ({e}): {value}"))
        })?;
        tracing::debug!(%url, "registry base URL overridden from environment");
        config.registry.base_url = url;
    }
    Ok(())
}
