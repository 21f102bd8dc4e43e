//! Fetching and decoding the data documents.
//!
//! A [`Source`] resolves a relative path to bytes. [`load_documents`] fetches
//! the résumé and then the project list, decodes both into typed records and
//! validates them before anything is rendered.

use super::{LoadError, ProjectEntry, ResumeDocument};
use crate::log;
use serde::de::DeserializeOwned;
use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

/// Advisory cache-control hint passed along with every fetch.
///
/// Sources are free to ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheHint {
    #[default]
    Default,
    /// Ask the transport to revalidate instead of serving a cached copy.
    NoCache,
}

/// Something that can answer a fetch for a relative document path.
pub trait Source {
    fn fetch(&self, path: &str, hint: CacheHint) -> Result<Vec<u8>, LoadError>;
}

/// Serves documents from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Join a relative document path onto the root, refusing to leave it.
    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let rel = Path::new(path);
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "document paths must stay inside the data directory",
            ));
        }
        Ok(self.root.join(rel))
    }
}

impl Source for DirSource {
    fn fetch(&self, path: &str, _hint: CacheHint) -> Result<Vec<u8>, LoadError> {
        let fail = |source| LoadError::Fetch {
            path: path.to_owned(),
            source,
        };
        let full = self.resolve(path).map_err(fail)?;
        fs::read(&full).map_err(fail)
    }
}

/// Both documents, fully decoded.
#[derive(Debug, Clone)]
pub struct Documents {
    pub resume: ResumeDocument,
    pub projects: Vec<ProjectEntry>,
}

/// Fetch `path` and decode it as `T`.
pub fn load_json<T: DeserializeOwned>(source: &dyn Source, path: &str) -> Result<T, LoadError> {
    let bytes = source.fetch(path, CacheHint::NoCache)?;
    log!("load"; "{path} ({} bytes)", bytes.len());
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Decode {
        path: path.to_owned(),
        source,
    })
}

/// Load the résumé, then the project list. Either failure aborts the whole load.
pub fn load_documents(
    source: &dyn Source,
    resume_path: &str,
    projects_path: &str,
) -> Result<Documents, LoadError> {
    let resume: ResumeDocument = load_json(source, resume_path)?;
    let projects: Vec<ProjectEntry> = load_json(source, projects_path)?;
    validate_projects(&projects, projects_path)?;
    Ok(Documents { resume, projects })
}

/// Every project needs at least one non-empty tag.
fn validate_projects(projects: &[ProjectEntry], path: &str) -> Result<(), LoadError> {
    for (index, project) in projects.iter().enumerate() {
        let reason = if project.tags.is_empty() {
            "has no tags"
        } else if project.tags.iter().any(|tag| tag.trim().is_empty()) {
            "has an empty tag"
        } else {
            continue;
        };
        return Err(LoadError::Invalid {
            path: path.to_owned(),
            reason: format!("project #{index} `{}` {reason}", project.title),
        });
    }
    Ok(())
}

/// In-memory source for tests: path → body, or an HTTP-like failure status.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySource {
    entries: rustc_hash::FxHashMap<String, Result<Vec<u8>, u16>>,
}

#[cfg(test)]
impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.entries.insert(path.to_owned(), Ok(body.as_bytes().to_vec()));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.entries.insert(path.to_owned(), Err(status));
        self
    }
}

#[cfg(test)]
impl Source for MemorySource {
    fn fetch(&self, path: &str, _hint: CacheHint) -> Result<Vec<u8>, LoadError> {
        match self.entries.get(path) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(LoadError::Status {
                path: path.to_owned(),
                status: *status,
            }),
            None => Err(LoadError::Status {
                path: path.to_owned(),
                status: 404,
            }),
        }
    }
}
