//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::app::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vitae résumé page renderer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root (default: vitae.toml)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Directory the data documents are fetched from (overrides `[data.base]`)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the renderer against the shell page and write the resulting document
    Render {
        /// Host page providing the mount points (default: built-in shell)
        #[arg(short, long)]
        shell: Option<PathBuf>,

        /// Output file path (relative to root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Select a tag in the project filter before writing
        #[arg(short, long)]
        filter: Option<String>,

        /// Click the theme toggle once before writing (persists the new theme)
        #[arg(long)]
        toggle_theme: bool,

        /// Colour scheme the host reports when no theme is stored
        #[arg(long, value_enum)]
        system: Option<Theme>,
    },

    /// Load and validate both data documents
    Check,

    /// Print the distinct project tags, sorted
    Tags,

    /// Show the stored theme, or toggle and persist it
    Theme {
        /// Flip the stored theme
        #[arg(short, long)]
        toggle: bool,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_render(&self) -> bool {
        matches!(self.command, Commands::Render { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::parse_from([
            "vitae", "-r", "site", "render", "--filter", "rust", "--toggle-theme",
        ]);

        assert!(cli.is_render());
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        match cli.command {
            Commands::Render {
                filter,
                toggle_theme,
                system,
                ..
            } => {
                assert_eq!(filter.as_deref(), Some("rust"));
                assert!(toggle_theme);
                assert_eq!(system, None);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_theme_toggle() {
        let cli = Cli::parse_from(["vitae", "theme", "--toggle"]);
        assert!(matches!(cli.command, Commands::Theme { toggle: true }));
    }

    #[test]
    fn test_parse_system_value() {
        let cli = Cli::parse_from(["vitae", "render", "--system", "dark"]);
        assert!(matches!(
            cli.command,
            Commands::Render {
                system: Some(Theme::Dark),
                ..
            }
        ));
        assert!(Cli::try_parse_from(["vitae", "render", "--system", "blue"]).is_err());
    }
}
