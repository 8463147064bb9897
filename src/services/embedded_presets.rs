//! Styling presets shipped with the tool.

use crate::domain::StyleConfig;

static V3_CONFIG_JSON: &str = include_str!("../assets/presets/tailwind-v3.json");

/// Base styles appended to the v3 stylesheet.
pub static V3_STYLESHEET_SNIPPET: &str = include_str!("../assets/presets/tailwind-v3.css");

/// Complete CSS-first stylesheet written for Tailwind v4.
pub static V4_STYLESHEET: &str = include_str!("../assets/presets/tailwind-v4.css");

/// Theme preset merged into `tailwind.config.js` for Tailwind v3.
pub fn v3_config_preset() -> StyleConfig {
    serde_json::from_str(V3_CONFIG_JSON)
        .ok()
        .and_then(StyleConfig::from_value)
        .expect("Embedded v3 preset must be a JSON object")
}
