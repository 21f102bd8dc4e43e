//! Typed records of the two data documents.
//!
//! Decoding goes through serde once at load time: required fields are plain
//! fields, optional ones are `Option`, so a renderer never has to guess.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `data/resume.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub publications: Vec<PublicationEntry>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub location: String,
    /// Display text such as "2019 – 2022"; never parsed.
    pub range: String,
    pub summary: String,
    /// Newline-delimited free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// One element of `data/projects.json` (a top-level array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub summary: String,
    pub tags: Vec<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ProjectEntry {
    /// The link worth rendering: absent, empty and `"#"` placeholders are dropped.
    pub fn external_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty() && *link != "#")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationEntry {
    pub citation: String,
    pub venue: String,
    pub year: Year,
}

/// Publication year as written in the document: `2021` or `"2021"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(year) => write!(f, "{year}"),
            Self::Text(year) => f.write_str(year),
        }
    }
}

/// Split a `details` value into its non-empty lines.
pub fn detail_lines(details: &str) -> impl Iterator<Item = &str> {
    details.lines().map(str::trim).filter(|line| !line.is_empty())
}
