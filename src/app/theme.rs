//! Light/dark theme flag.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class set on the root element while dark.
    pub const DARK_CLASS: &'static str = "dark";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme at startup: a stored `"dark"` wins, any other stored value means
    /// light, and nothing stored (or an empty value) defers to the host.
    pub fn initial(stored: Option<&str>, system: Self) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            Some(value) if !value.is_empty() => Self::Light,
            _ => system,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_theme() {
        assert_eq!(Theme::initial(Some("dark"), Theme::Light), Theme::Dark);
        assert_eq!(Theme::initial(Some("light"), Theme::Dark), Theme::Light);
        assert_eq!(Theme::initial(Some("sepia"), Theme::Dark), Theme::Light);
        assert_eq!(Theme::initial(None, Theme::Dark), Theme::Dark);
        assert_eq!(Theme::initial(Some(""), Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
