//! `[theme]` section configuration.

use super::defaults;
use crate::app::Theme;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[theme]` section in vitae.toml - persisted light/dark preference.
///
/// # Example
/// ```toml
/// [theme]
/// storage_key = "theme"
/// state_file = "~/.local/state/vitae.json"
/// system = "dark"      # colour scheme assumed when nothing is stored
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Local storage key holding `"dark"` or `"light"`.
    #[serde(default = "defaults::theme::storage_key")]
    #[educe(Default = defaults::theme::storage_key())]
    pub storage_key: String,

    /// File backing local storage for the CLI (relative to root, `~` expanded).
    #[serde(default = "defaults::theme::state_file")]
    #[educe(Default = defaults::theme::state_file())]
    pub state_file: PathBuf,

    /// Host colour-scheme preference.
    #[serde(default = "defaults::theme::system")]
    #[educe(Default = defaults::theme::system())]
    pub system: Theme,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use crate::app::Theme;

    #[test]
    fn test_theme_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.system, Theme::Light);
    }

    #[test]
    fn test_theme_system_parsing() {
        let config = r#"
            [theme]
            system = "dark"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.theme.system, Theme::Dark);

        let config = r#"
            [theme]
            system = "sepia"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
