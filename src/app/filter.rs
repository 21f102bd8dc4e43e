//! Project tag filter.
//!
//! The selector holds the sentinel [`ALL`] option plus one option per
//! distinct tag. Selecting a tag dims every card that does not carry it;
//! cards are never removed from the grid.

use crate::data::ProjectEntry;
use crate::dom::{Document, NodeId};
use compact_str::CompactString;
use smallvec::SmallVec;

/// Option value that shows every card.
pub const ALL: &str = "all";

/// A rendered project card and the tags it was rendered from.
#[derive(Debug, Clone)]
pub struct Card {
    pub node: NodeId,
    pub tags: SmallVec<[CompactString; 4]>,
}

impl Card {
    pub fn new(node: NodeId, project: &ProjectEntry) -> Self {
        Self {
            node,
            tags: project.tags.iter().cloned().collect(),
        }
    }

    /// Exact membership; `go` never matches `django`.
    pub fn matches(&self, selection: &str) -> bool {
        selection == ALL || self.tags.iter().any(|tag| tag.as_str() == selection)
    }
}

/// Values of the `<option>` children of `select`, in order.
pub fn option_values(doc: &Document, select: NodeId) -> Vec<String> {
    doc.child_elements(select)
        .into_iter()
        .filter(|&opt| doc.tag(opt) == Some("option"))
        .map(|opt| match doc.attr(opt, "value") {
            Some(value) => value.to_owned(),
            None => doc.text_content(opt),
        })
        .collect()
}

/// Add the sentinel and every tag in `tags` that is not already an option.
///
/// Returns how many options were added.
pub fn populate(
    doc: &mut Document,
    select: NodeId,
    tags: &[CompactString],
    all_label: &str,
) -> usize {
    let existing = option_values(doc, select);
    let mut added = 0;

    if !existing.iter().any(|value| value == ALL) {
        let option = new_option(doc, ALL, all_label);
        let mut children = doc.child_elements(select);
        // Sentinel goes first
        children.insert(0, option);
        for node in children {
            doc.append(select, node);
        }
        added += 1;
    }

    for tag in tags {
        if existing.iter().any(|value| value == tag.as_str()) {
            continue;
        }
        let option = new_option(doc, tag, tag);
        doc.append(select, option);
        added += 1;
    }
    added
}

fn new_option(doc: &mut Document, value: &str, label: &str) -> NodeId {
    let option = doc.create_element("option");
    doc.set_attr(option, "value", value);
    doc.set_text(option, label);
    option
}

/// Mark the option whose value is `selection` as selected.
pub fn select(doc: &mut Document, select: NodeId, selection: &str) {
    for option in doc.child_elements(select) {
        if doc.attr(option, "value") == Some(selection) {
            doc.set_attr(option, "selected", "selected");
        } else if let Some(el) = doc.element_mut(option) {
            el.remove_attr("selected");
        }
    }
}

/// Re-evaluate every card against `selection`.
///
/// Returns the number of cards left fully visible.
pub fn apply(doc: &mut Document, cards: &[Card], selection: &str, dim_opacity: f64) -> usize {
    let dimmed = dim_opacity.to_string();
    let mut shown = 0;

    for card in cards {
        if card.matches(selection) {
            doc.set_style(card.node, "opacity", "1");
            doc.set_style(card.node, "pointer-events", "auto");
            shown += 1;
        } else {
            doc.set_style(card.node, "opacity", &dimmed);
            doc.set_style(card.node, "pointer-events", "none");
        }
    }
    shown
}
