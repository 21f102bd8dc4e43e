//! Résumé and project data.
//!
//! # Pipeline
//!
//! ```text
//! Source::fetch(path) ──► serde_json ──► typed records ──► validate
//!       │                     │                              │
//!       └── LoadError::Fetch  └── LoadError::Decode          └── LoadError::Invalid
//!           / ::Status
//! ```
//!
//! Documents are read-only for the rest of the session.

mod error;
mod loader;
mod tags;
mod types;

pub use error::LoadError;
pub use loader::{CacheHint, DirSource, Documents, Source, load_documents, load_json};
pub use tags::distinct_tags;
pub use types::{
    Contact, ExperienceEntry, ProjectEntry, PublicationEntry, ResumeDocument, Year, detail_lines,
};

#[cfg(test)]
pub use loader::MemorySource;
