//! Well-known files inside a consumer project, relative to its root.

pub const PACKAGE_JSON: &str = "package.json";
pub const TAILWIND_PACKAGE_JSON: &str = "node_modules/tailwindcss/package.json";
pub const TAILWIND_CONFIG: &str = "tailwind.config.js";
/// Stylesheet the v3 base styles are appended to.
pub const V3_STYLESHEET: &str = "src/index.css";
pub const TOOL_CONFIG: &str = ".reuseit.toml";
