//! Scroll-driven affordances: progress bar, reveal-on-scroll, active nav link.

use super::render::round_to;
use crate::dom::{Document, NodeId};
use rustc_hash::FxHashSet;

/// Class added to a revealed `fade-in` element.
pub const VISIBLE_CLASS: &str = "visible";
/// Class marking the nav link of the current section.
pub const ACTIVE_CLASS: &str = "active";

/// Scroll position as a percentage of the scrollable range, clamped to 0-100.
///
/// A page that does not scroll reports 0.
pub fn progress_percent(offset: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0. {
        return 0.;
    }
    (offset / scrollable * 100.).clamp(0., 100.)
}

pub fn set_progress(doc: &mut Document, indicator: NodeId, percent: f64) {
    let width = format!("{}%", round_to(percent, 2));
    doc.set_style(indicator, "width", &width);
}

/// The section the reader is in: the last one whose top, less `lookahead`,
/// has been scrolled past.
pub fn active_section<'a>(
    offset: f64,
    tops: impl IntoIterator<Item = (&'a str, f64)>,
    lookahead: f64,
) -> Option<&'a str> {
    tops.into_iter()
        .filter(|(_, top)| offset >= top - lookahead)
        .last()
        .map(|(id, _)| id)
}

/// Give `active` to the link pointing at `#section` and take it from the rest.
pub fn highlight_nav(doc: &mut Document, links: &[NodeId], section: Option<&str>) {
    let target = section.map(|id| format!("#{id}"));
    for &link in links {
        let is_current = target.is_some() && doc.attr(link, "href") == target.as_deref();
        if is_current {
            doc.add_class(link, ACTIVE_CLASS);
        } else {
            doc.remove_class(link, ACTIVE_CLASS);
        }
    }
}

/// One-shot visibility observer.
///
/// An element is revealed the first time a report for it reaches the
/// threshold, then it is dropped from the observed set.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    observed: FxHashSet<NodeId>,
}

impl RevealObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: FxHashSet::default(),
        }
    }

    pub fn observe(&mut self, node: NodeId) {
        self.observed.insert(node);
    }

    pub fn unobserve(&mut self, node: NodeId) {
        self.observed.remove(&node);
    }

    pub fn is_observed(&self, node: NodeId) -> bool {
        self.observed.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Handle an intersection report. Returns `true` if `node` was revealed.
    pub fn report(&mut self, doc: &mut Document, node: NodeId, ratio: f64) -> bool {
        if !self.is_observed(node) || ratio < self.threshold {
            return false;
        }
        doc.add_class(node, VISIBLE_CLASS);
        self.unobserve(node);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::shell;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0., 800., 2800.), 0.);
        assert_eq!(progress_percent(1000., 800., 2800.), 50.);
        assert_eq!(progress_percent(5000., 800., 2800.), 100.);
        assert_eq!(progress_percent(-20., 800., 2800.), 0.);
        assert_eq!(progress_percent(100., 800., 800.), 0.);
        assert_eq!(progress_percent(100., 800., 600.), 0.);
    }

    #[test]
    fn test_set_progress_width() {
        let mut doc = Document::new();
        let bar = doc.create_element("div");
        doc.append(doc.root(), bar);

        set_progress(&mut doc, bar, progress_percent(1., 0., 3.));
        assert_eq!(doc.style(bar, "width"), Some("33.33%"));
    }

    #[test]
    fn test_active_section_uses_lookahead() {
        let tops = [("about", 0.), ("experience", 600.), ("projects", 1400.)];

        assert_eq!(active_section(0., tops, 100.), Some("about"));
        assert_eq!(active_section(499., tops, 100.), Some("about"));
        assert_eq!(active_section(500., tops, 100.), Some("experience"));
        assert_eq!(active_section(5000., tops, 100.), Some("projects"));
        assert_eq!(active_section(-200., tops, 100.), None);
    }

    #[test]
    fn test_highlight_nav_moves_active_class() {
        let mut doc = shell::parse(
            r##"<nav><a id="a" href="#about">A</a><a id="b" href="#projects">B</a></nav>"##,
        )
        .unwrap();
        let links = vec![
            doc.get_element_by_id("a").unwrap(),
            doc.get_element_by_id("b").unwrap(),
        ];

        highlight_nav(&mut doc, &links, Some("about"));
        highlight_nav(&mut doc, &links, Some("projects"));

        assert!(!doc.has_class(links[0], ACTIVE_CLASS));
        assert!(doc.has_class(links[1], ACTIVE_CLASS));

        highlight_nav(&mut doc, &links, None);
        assert!(!doc.has_class(links[1], ACTIVE_CLASS));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut doc = Document::new();
        let node = doc.create_element("section");
        doc.append(doc.root(), node);
        let mut observer = RevealObserver::new(0.1);
        observer.observe(node);

        assert!(!observer.report(&mut doc, node, 0.05));
        assert!(!doc.has_class(node, VISIBLE_CLASS));

        assert!(observer.report(&mut doc, node, 0.1));
        assert!(doc.has_class(node, VISIBLE_CLASS));
        assert!(!observer.is_observed(node));

        // Scrolling away never re-hides it
        assert!(!observer.report(&mut doc, node, 0.));
        assert!(doc.has_class(node, VISIBLE_CLASS));
    }
}
