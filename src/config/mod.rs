//! Site configuration management for `vitae.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[data]`    | Where the résumé and project documents live      |
//! | `[page]`    | Host page (shell) and rendered output            |
//! | `[labels]`  | User-facing strings written by the renderer      |
//! | `[ui]`      | Timings, thresholds, per-section stagger         |
//! | `[theme]`   | Storage key, state file, system colour scheme    |
//!
//! Every section is optional; a missing `vitae.toml` means all defaults.
//!
//! # Example
//!
//! ```toml
//! [data]
//! base = "site"
//!
//! [page]
//! shell = "site/index.html"
//! output = "public/index.html"
//!
//! [ui]
//! copy_revert_ms = 2000
//!
//! [theme]
//! system = "dark"
//! ```

mod data;
pub mod defaults;
mod error;
mod labels;
mod page;
mod theme;
mod ui;

pub use error::ConfigError;
pub use labels::LabelsConfig;
pub use ui::UiConfig;

use data::DataConfig;
use page::PageConfig;
use theme::ThemeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename, looked up in the root directory.
pub const CONFIG_FILE: &str = "vitae.toml";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing vitae.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute root directory (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Document locations
    #[serde(default)]
    pub data: DataConfig,

    /// Host page and output settings
    #[serde(default)]
    pub page: PageConfig,

    /// Renderer strings
    #[serde(default)]
    pub labels: LabelsConfig,

    /// Affordance timings and thresholds
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme persistence
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load, apply CLI overrides and validate.
    ///
    /// A missing default `vitae.toml` falls back to defaults; a config file
    /// named explicitly with `--config` must exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = Self::normalize_path(cli.root.as_deref().unwrap_or(Path::new("./")));
        let file = cli.config.as_deref().unwrap_or(Path::new(CONFIG_FILE));
        let config_path = Self::normalize_path(&root.join(file));

        let mut config = match (config_path.exists(), cli.config.is_some()) {
            (true, _) => Self::from_path(&config_path)?,
            (false, true) => bail!(ConfigError::Validation(format!(
                "config file `{}` not found",
                config_path.display()
            ))),
            (false, false) => Self::default(),
        };

        config.config_path = config_path;
        config.update_with_cli(cli, &root);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments, then resolve paths against `root`.
    pub fn update_with_cli(&mut self, cli: &Cli, root: &Path) {
        Self::update_option(&mut self.data.base, cli.data.as_ref());

        if let Commands::Render {
            shell,
            output,
            system,
            ..
        } = &cli.command
        {
            if shell.is_some() {
                self.page.shell = shell.clone();
            }
            Self::update_option(&mut self.page.output, output.as_ref());
            Self::update_option(&mut self.theme.system, system.as_ref());
        }

        self.update_path_with_root(root);
    }

    /// Directory the data documents are fetched from.
    pub fn data_dir(&self) -> &Path {
        &self.data.base
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve every configured path against the root directory.
    fn update_path_with_root(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.data.base = Self::normalize_path(&root.join(&self.data.base));
        self.page.output = Self::normalize_path(&root.join(&self.page.output));

        if let Some(shell) = self.page.shell.as_ref() {
            self.page.shell = Some(Self::normalize_path(&root.join(shell)));
        }

        // State file may live outside the site (tilde expansion)
        let raw = self.theme.state_file.to_string_lossy();
        let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());
        self.theme.state_file = if expanded.is_relative() {
            Self::normalize_path(&root.join(expanded))
        } else {
            expanded
        };
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate value ranges and required strings.
    pub fn validate(&self) -> Result<()> {
        if self.data.resume.trim().is_empty() || self.data.projects.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[data.resume] and [data.projects] must not be empty".into()
            ));
        }

        let threshold = self.ui.reveal_threshold;
        if !(threshold > 0. && threshold <= 1.) {
            bail!(ConfigError::Validation(format!(
                "[ui.reveal_threshold] must be in (0, 1], got {threshold}"
            )));
        }

        if !(0. ..=1.).contains(&self.ui.dim_opacity) {
            bail!(ConfigError::Validation(format!(
                "[ui.dim_opacity] must be in [0, 1], got {}",
                self.ui.dim_opacity
            )));
        }

        if self.ui.nav_lookahead < 0. {
            bail!(ConfigError::Validation(
                "[ui.nav_lookahead] must not be negative".into()
            ));
        }

        if self.theme.storage_key.is_empty() {
            bail!(ConfigError::Validation(
                "[theme.storage_key] must not be empty".into()
            ));
        }

        if let Some(shell) = &self.page.shell
            && !shell.is_file()
        {
            bail!(ConfigError::Validation(format!(
                "[page.shell] `{}` is not a file",
                shell.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("vitae").chain(args.iter().copied()))
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [data]
            resume = "cv.json"

            [ui]
            copy_revert_ms = 500
        "#,
        )
        .unwrap();

        assert_eq!(config.data.resume, "cv.json");
        assert_eq!(config.ui.copy_revert_ms, 500);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[data\nresume = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_section_rejection() {
        let result = SiteConfig::from_str("[serve]\nport = 8080");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_defaults() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = SiteConfig::default();
        config.ui.reveal_threshold = 0.;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.ui.dim_opacity = 1.5;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("dim_opacity"));

        let mut config = SiteConfig::default();
        config.data.projects = " ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = parse_cli(&["--root", root, "check"]);

        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.data.resume, "data/resume.json");
        assert!(config.data_dir().starts_with(config.root.as_path()));
        assert!(config.theme.state_file.ends_with(".vitae/state.json"));
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = parse_cli(&["--root", root, "--config", "other.toml", "check"]);

        let err = SiteConfig::load(&cli).unwrap_err().to_string();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_load_applies_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[data]\nbase = \"site\"\n[theme]\nsystem = \"light\"\n",
        )
        .unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = parse_cli(&[
            "--root", root, "--data", "elsewhere", "render", "--output", "out.html", "--system",
            "dark",
        ]);

        let config = SiteConfig::load(&cli).unwrap();

        assert!(config.data_dir().ends_with("elsewhere"));
        assert!(config.page.output.ends_with("out.html"));
        assert_eq!(config.theme.system, crate::app::Theme::Dark);
    }
}
