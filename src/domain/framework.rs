//! Stylesheet placement by framework marker files.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    NextJs,
    Vite,
    Remix,
    Gatsby,
    ReactRouter7,
    TanstackStart,
}

impl Framework {
    pub fn display_name(self) -> &'static str {
        match self {
            Framework::NextJs => "Next.js",
            Framework::Vite => "Vite",
            Framework::Remix => "Remix",
            Framework::Gatsby => "Gatsby",
            Framework::ReactRouter7 => "React Router 7",
            Framework::TanstackStart => "Tanstack Start",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One row of the placement table.
#[derive(Debug, Clone, Copy)]
pub struct StylesheetTarget {
    pub framework: Framework,
    /// Any of these files at the project root selects the row.
    pub markers: &'static [&'static str],
    pub stylesheet: &'static str,
}

/// Placement rows in priority order; the first row with a present marker wins.
pub const STYLESHEET_TARGETS: [StylesheetTarget; 6] = [
    StylesheetTarget {
        framework: Framework::NextJs,
        markers: &["next.config.js", "next.config.ts"],
        stylesheet: "styles/globals.css",
    },
    StylesheetTarget {
        framework: Framework::Vite,
        markers: &["vite.config.js", "vite.config.ts"],
        stylesheet: "src/index.css",
    },
    StylesheetTarget {
        framework: Framework::Remix,
        markers: &["remix.config.js", "remix.config.ts"],
        stylesheet: "src/styles/tailwind.css",
    },
    StylesheetTarget {
        framework: Framework::Gatsby,
        markers: &["gatsby-config.js", "gatsby-config.ts"],
        stylesheet: "src/styles/index.css",
    },
    StylesheetTarget {
        framework: Framework::ReactRouter7,
        markers: &["react-router-config.js", "react-router-config.ts"],
        stylesheet: "src/index.css",
    },
    StylesheetTarget {
        framework: Framework::TanstackStart,
        markers: &["tanstack.config.js", "tanstack.config.ts"],
        stylesheet: "src/styles/main.css",
    },
];

pub const DEFAULT_STYLESHEET: &str = "src/index.css";

/// Result of probing the project for a framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylesheetPlacement {
    /// `None` when no marker matched and the default path was used.
    pub framework: Option<Framework>,
    pub stylesheet: &'static str,
}

/// Walk the placement table top to bottom using `exists` to probe markers.
pub fn resolve_stylesheet(exists: impl Fn(&str) -> bool) -> StylesheetPlacement {
    STYLESHEET_TARGETS
        .iter()
        .find(|target| target.markers.iter().any(|marker| exists(marker)))
        .map(|target| StylesheetPlacement {
            framework: Some(target.framework),
            stylesheet: target.stylesheet,
        })
        .unwrap_or(StylesheetPlacement { framework: None, stylesheet: DEFAULT_STYLESHEET })
}
