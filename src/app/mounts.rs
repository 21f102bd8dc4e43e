//! Fixed mount points of the host page, resolved once at startup.

use crate::dom::{Document, NodeId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("required mount point `#{0}` is missing from the shell")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Mounts {
    pub year: NodeId,
    pub summary: NodeId,
    pub experience: NodeId,
    pub projects: NodeId,
    pub skills: NodeId,
    pub publications: NodeId,
    pub filter: NodeId,
    pub email_link: NodeId,
    pub copy_email: NodeId,
    pub github_link: NodeId,
    pub linkedin_link: NodeId,
    pub theme_toggle: NodeId,
    pub phone: Option<NodeId>,
    pub scroll_progress: Option<NodeId>,
    /// In-page anchors (`href` starting with `#`) inside `<nav>`.
    pub nav_links: Vec<NodeId>,
    /// Every `<section>` with an `id`, in document order.
    pub sections: Vec<NodeId>,
}

impl Mounts {
    pub fn resolve(doc: &Document) -> Result<Self, MountError> {
        let required = |id: &'static str| doc.get_element_by_id(id).ok_or(MountError::Missing(id));

        Ok(Self {
            year: required("year")?,
            summary: required("summary")?,
            experience: required("experience-list")?,
            projects: required("projects-grid")?,
            skills: required("skills-list")?,
            publications: required("publications-list")?,
            filter: required("project-filter")?,
            email_link: required("email-link")?,
            copy_email: required("copy-email")?,
            github_link: required("github-link")?,
            linkedin_link: required("linkedin-link")?,
            theme_toggle: required("theme-toggle")?,
            phone: doc.get_element_by_id("phone"),
            scroll_progress: doc.get_element_by_id("scroll-progress"),
            nav_links: nav_links(doc),
            sections: sections(doc),
        })
    }
}

fn nav_links(doc: &Document) -> Vec<NodeId> {
    doc.elements_by_tag("a")
        .into_iter()
        .filter(|&a| doc.attr(a, "href").is_some_and(|href| href.starts_with('#')))
        .filter(|&a| doc.closest_ancestor(a, "nav").is_some())
        .collect()
}

fn sections(doc: &Document) -> Vec<NodeId> {
    doc.elements_by_tag("section")
        .into_iter()
        .filter(|&s| doc.attr(s, "id").is_some_and(|id| !id.is_empty()))
        .collect()
}
