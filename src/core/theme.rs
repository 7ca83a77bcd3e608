//! Light/dark theme preference.
//!
//! Purely cosmetic: the theme travels with the session so a front end can
//! render it, but nothing in the game rules reads it.

use serde::{Deserialize, Serialize};

/// Two-valued display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Lowercase name, as used by `data-theme` style attributes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Accessible label for a toggle control showing this theme.
    #[must_use]
    pub fn toggle_label(self) -> String {
        format!("Switch to {} mode", self.toggled().name())
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
