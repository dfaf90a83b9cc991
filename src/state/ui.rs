//! Local UI chrome state (theme).
//!
//! DESIGN
//! ======
//! The theme is plain application state: components read it from context
//! and the document-level styling is applied by a single effect in `App`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

/// Selected light/dark visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Interpret a persisted value. Only the exact string `"dark"` selects dark.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Background/text classes for `<body>` and the content container.
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Light => "bg-light text-dark",
            Self::Dark => "bg-dark text-white",
        }
    }

    /// Font Awesome icon shown next to the theme switch.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-sun",
            Self::Dark => "fa-moon",
        }
    }
}

/// UI state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemePreference,
}
