//! Tailwind style configuration and the preset merge.

use serde_json::{Map, Value};

use crate::domain::AppError;
use crate::domain::object_literal::{self, ExportForm};

/// Nested configuration mapping in key insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleConfig(Map<String, Value>);

impl StyleConfig {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build from a JSON value; only objects are accepted.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Deep-merge `preset` into a copy of `existing`.
///
/// A key recurses only when both sides hold a mapping; otherwise the preset
/// value replaces whatever `existing` had. Keys that only `existing` defines
/// are carried over unchanged.
pub fn merge(existing: &StyleConfig, preset: &StyleConfig) -> StyleConfig {
    let mut merged = existing.0.clone();
    merge_into(&mut merged, &preset.0);
    StyleConfig(merged)
}

fn merge_into(target: &mut Map<String, Value>, preset: &Map<String, Value>) {
    for (key, incoming) in preset {
        if let (Some(Value::Object(current)), Value::Object(incoming)) = (target.get_mut(key), incoming)
        {
            merge_into(current, incoming);
            continue;
        }
        target.insert(key.clone(), incoming.clone());
    }
}

/// A `tailwind.config.js` as read from disk: its object and how it exports it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigModule {
    pub export: ExportForm,
    pub config: StyleConfig,
}

/// Parse the contents of a `tailwind.config.js`.
///
/// The file must export a plain object literal; see [`object_literal`] for the
/// accepted subset. A blank file is an empty CommonJS config.
pub fn parse_config_module(path: &str, content: &str) -> Result<ConfigModule, AppError> {
    if content.trim().is_empty() {
        return Ok(ConfigModule::default());
    }

    let module = object_literal::parse_module(content).map_err(|details| {
        AppError::UnsupportedStyleConfig {
            path: path.to_string(),
            details: format!("config is not a plain object literal ({details})"),
        }
    })?;

    let config =
        StyleConfig::from_value(module.value).ok_or_else(|| AppError::UnsupportedStyleConfig {
            path: path.to_string(),
            details: "exported config is not an object".to_string(),
        })?;
    Ok(ConfigModule { export: module.export, config })
}

/// Render a config with a 2-space indented literal behind the given export.
pub fn render_config_module(config: &StyleConfig, export: ExportForm) -> Result<String, AppError> {
    let literal = serde_json::to_string_pretty(&config.0).map_err(|e| AppError::ParseError {
        what: "style config".to_string(),
        details: e.to_string(),
    })?;
    Ok(format!("{}{literal}\n", export.prefix()))
}
