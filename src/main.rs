use anyhow::Result;
use clap::Parser;
use std::io::stdout;
use vitae::{
    check::{check_documents, list_tags},
    cli::{Cli, Commands},
    config::SiteConfig,
    render::render_page,
    theme::run_theme,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Render {
            filter,
            toggle_theme,
            ..
        } => render_page(&config, filter.as_deref(), *toggle_theme),
        Commands::Check => check_documents(&config).map(|_| ()),
        Commands::Tags => list_tags(&config, &mut stdout().lock()).map(|_| ()),
        Commands::Theme { toggle } => run_theme(&config, *toggle).map(|_| ()),
    }
}
