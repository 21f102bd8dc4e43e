//! `vitae render`: run the page renderer and write the resulting document.

use crate::{
    app::{App, Settings, UiEvent, filter},
    config::SiteConfig,
    data::DirSource,
    dom::{Document, shell, to_html},
    log,
    platform::{FileStorage, UnsupportedClipboard},
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Render the page into `[page.output]`.
///
/// A data load failure still writes the page (it then shows the failure
/// message) before the error is returned.
pub fn render_page(config: &SiteConfig, filter: Option<&str>, toggle_theme: bool) -> Result<()> {
    let doc = load_shell(config)?;
    let storage = FileStorage::open(&config.theme.state_file)?;
    let settings = Settings::from_config(config);
    let mut app = App::new(doc, settings, storage, UnsupportedClipboard)?;

    let source = DirSource::new(config.data_dir());
    let loaded = app.init(&source, &config.data.resume, &config.data.projects);

    if let Some(tag) = filter {
        let known = filter::option_values(app.document(), app.mounts().filter);
        if !known.iter().any(|value| value == tag) {
            log!("render"; "filter `{tag}` matches no project tag");
        }
        let shown = app.select_filter(tag);
        log!("render"; "filter `{tag}`: {shown} of {} cards shown", app.cards().len());
    }

    if toggle_theme {
        let toggle = app.mounts().theme_toggle;
        app.dispatch(UiEvent::Click(toggle))?;
        log!("theme"; "switched to {}", app.theme());
    }

    write_page(app.document(), config.page.indent, &config.page.output)?;
    loaded.context("failed to load resume data")?;
    Ok(())
}

fn load_shell(config: &SiteConfig) -> Result<Document> {
    let doc = match &config.page.shell {
        Some(path) => shell::from_path(path)?,
        None => shell::builtin()?,
    };
    Ok(doc)
}

fn write_page(doc: &Document, indent: usize, output: &Path) -> Result<()> {
    let html = to_html(doc, indent)?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, html).with_context(|| format!("Failed to write {}", output.display()))?;
    log!("render"; "wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::tests::{PROJECTS, RESUME};
    use crate::cli::Cli;
    use clap::Parser;
    use tempfile::TempDir;

    /// A site root with both data documents in place.
    pub fn site() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("resume.json"), RESUME).unwrap();
        fs::write(data.join("projects.json"), PROJECTS).unwrap();
        dir
    }

    pub fn config_for(dir: &TempDir, args: &[&str]) -> SiteConfig {
        let root = dir.path().to_str().unwrap();
        let argv = ["vitae", "--root", root].into_iter().chain(args.iter().copied());
        let cli = Cli::parse_from(argv);
        SiteConfig::load(&cli).unwrap()
    }

    #[test]
    fn test_render_writes_populated_page() {
        let dir = site();
        let config = config_for(&dir, &["render"]);

        render_page(&config, None, false).unwrap();

        let html = fs::read_to_string(&config.page.output).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Systems engineer who likes parsers."));
        assert!(html.contains(r#"href="mailto:me@example.com""#));
        assert!(html.contains(r#"<option value="django">django</option>"#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_render_default_keeps_inline_content_compact() {
        let dir = site();
        let config = config_for(&dir, &["render"]);

        render_page(&config, None, false).unwrap();

        let html = fs::read_to_string(&config.page.output).unwrap();
        assert!(html.contains(r#"<span class="chip">go</span><span class="chip">cli</span>"#));
    }

    #[test]
    fn test_render_with_filter_and_toggle() {
        let dir = site();
        let config = config_for(&dir, &["render"]);

        render_page(&config, Some("rust"), true).unwrap();

        let html = fs::read_to_string(&config.page.output).unwrap();
        assert!(html.contains("pointer-events: none"));
        assert!(html.contains(r#"<html lang="en" class="dark""#));
        let stored = FileStorage::open(&config.theme.state_file).unwrap();
        assert_eq!(
            crate::platform::Storage::get(&stored, "theme").as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_render_load_failure_still_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir, &["render"]);

        let err = render_page(&config, None, false).unwrap_err();

        assert!(format!("{err:#}").contains("data/resume.json"));
        let html = fs::read_to_string(&config.page.output).unwrap();
        assert!(html.contains("Failed to load resume data. Please refresh the page."));
    }

    #[test]
    fn test_render_with_custom_shell_missing_mount() {
        let dir = site();
        fs::write(dir.path().join("shell.html"), "<html><body></body></html>").unwrap();
        let config = config_for(&dir, &["render", "--shell", "shell.html"]);

        let err = render_page(&config, None, false).unwrap_err();
        assert!(err.to_string().contains("#year"));
        assert!(!config.page.output.exists());
    }
}
