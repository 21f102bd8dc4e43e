//! `vitae check` and `vitae tags`: data document inspection.

use crate::{
    config::SiteConfig,
    data::{DirSource, Documents, ProjectEntry, distinct_tags, load_documents, load_json},
    log,
};
use anyhow::{Context, Result};
use compact_str::CompactString;
use std::io::Write;

/// Load and validate both documents, logging what they contain.
pub fn check_documents(config: &SiteConfig) -> Result<Documents> {
    let source = DirSource::new(config.data_dir());
    let documents = load_documents(&source, &config.data.resume, &config.data.projects)
        .context("data check failed")?;

    let resume = &documents.resume;
    log!(
        "check";
        "{}: {} experience, {} skills, {} publications",
        config.data.resume,
        resume.experience.len(),
        resume.skills.len(),
        resume.publications.len()
    );
    let tags = distinct_tags(&documents.projects);
    log!(
        "check";
        "{}: {} projects, tags [{}]",
        config.data.projects,
        documents.projects.len(),
        tags.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
    );
    Ok(documents)
}

/// Write the distinct project tags to `out`, sorted, one per line.
///
/// Only the tags go to `out`, so the list can be piped.
pub fn list_tags(config: &SiteConfig, out: &mut impl Write) -> Result<Vec<CompactString>> {
    let source = DirSource::new(config.data_dir());
    let projects: Vec<ProjectEntry> = load_json(&source, &config.data.projects)
        .with_context(|| format!("failed to load {}", config.data.projects))?;

    let tags = distinct_tags(&projects);
    for tag in &tags {
        writeln!(out, "{tag}").context("failed to write tags")?;
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{config_for, site};
    use std::fs;

    #[test]
    fn test_check_documents() {
        let dir = site();
        let config = config_for(&dir, &["check"]);

        let documents = check_documents(&config).unwrap();

        assert_eq!(documents.resume.experience.len(), 2);
        assert_eq!(documents.projects.len(), 3);
    }

    #[test]
    fn test_check_reports_invalid_project() {
        let dir = site();
        fs::write(
            dir.path().join("data/projects.json"),
            r#"[{"title":"Bare","range":"2020","summary":"s","tags":[]}]"#,
        )
        .unwrap();
        let config = config_for(&dir, &["check"]);

        let err = format!("{:#}", check_documents(&config).unwrap_err());
        assert!(err.contains("Bare"));
    }

    #[test]
    fn test_list_tags_sorted() {
        let dir = site();
        let config = config_for(&dir, &["tags"]);

        let mut out = Vec::new();
        let tags = list_tags(&config, &mut out).unwrap();

        assert_eq!(tags, ["cli", "django", "go", "rust"]);
        assert_eq!(String::from_utf8(out).unwrap(), "cli\ndjango\ngo\nrust\n");
    }
}
