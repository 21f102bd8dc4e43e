//! Section renderers.
//!
//! Each renderer clears its container and appends one fragment per record,
//! in input order, with a staggered `animation-delay`:
//!
//! ```text
//! experience   div.item      strong | div(em • location • span.muted) | p | details?
//! projects     article.project  h4 | div.muted | p | div.chips | div.project-link? | details?
//! skills       span.chip
//! publications div.item      strong | div.muted(venue • year)
//! ```

use crate::config::LabelsConfig;
use crate::data::{ExperienceEntry, ProjectEntry, PublicationEntry, detail_lines};
use crate::dom::{Document, NodeId};

/// Separator between inline metadata fields.
const BULLET: &str = " • ";

/// `animation-delay` for the item at `index`, rounded to milliseconds.
pub fn stagger_delay(index: usize, step: f64) -> String {
    format!("{}s", round_to(index as f64 * step, 3))
}

/// Round to `places` decimals so CSS values stay short (`0.24`, not `0.24000000000000002`).
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

fn child(doc: &mut Document, parent: NodeId, tag: &str, class: Option<&str>) -> NodeId {
    let id = doc.create_element(tag);
    if let Some(class) = class {
        doc.add_class(id, class);
    }
    doc.append(parent, id);
    id
}

fn text_child(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    class: Option<&str>,
    text: &str,
) -> NodeId {
    let id = child(doc, parent, tag, class);
    doc.set_text(id, text);
    id
}

/// `<details>` block with one paragraph per non-empty line.
fn details_block(doc: &mut Document, parent: NodeId, details: &str, summary: &str) {
    let block = child(doc, parent, "details", Some("details"));
    text_child(doc, block, "summary", None, summary);
    let body = child(doc, block, "div", Some("details-body"));
    for line in detail_lines(details) {
        text_child(doc, body, "p", None, line);
    }
}

pub fn experience(
    doc: &mut Document,
    container: NodeId,
    items: &[ExperienceEntry],
    labels: &LabelsConfig,
    step: f64,
) -> Vec<NodeId> {
    doc.clear_children(container);
    let mut out = Vec::with_capacity(items.len());

    for (index, entry) in items.iter().enumerate() {
        let item = child(doc, container, "div", Some("item"));
        text_child(doc, item, "strong", None, &entry.role);

        let meta = child(doc, item, "div", Some("meta"));
        text_child(doc, meta, "em", None, &entry.company);
        doc.append_text(meta, &format!("{BULLET}{}{BULLET}", entry.location));
        text_child(doc, meta, "span", Some("muted"), &entry.range);

        text_child(doc, item, "p", Some("summary"), &entry.summary);
        if let Some(details) = &entry.details {
            details_block(doc, item, details, &labels.details);
        }

        doc.set_style(item, "animation-delay", &stagger_delay(index, step));
        out.push(item);
    }
    out
}

/// Render project cards. Returns the card nodes in input order.
pub fn projects(
    doc: &mut Document,
    container: NodeId,
    items: &[ProjectEntry],
    labels: &LabelsConfig,
    step: f64,
) -> Vec<NodeId> {
    doc.clear_children(container);
    let mut cards = Vec::with_capacity(items.len());

    for (index, project) in items.iter().enumerate() {
        let card = child(doc, container, "article", Some("project"));
        let joined = project
            .tags
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(",");
        doc.set_data(card, "tags", &joined);

        text_child(doc, card, "h4", None, &project.title);
        let meta = match &project.role {
            Some(role) => format!("{}{BULLET}{role}", project.range),
            None => project.range.clone(),
        };
        text_child(doc, card, "div", Some("muted"), &meta);
        text_child(doc, card, "p", None, &project.summary);

        let chips = child(doc, card, "div", Some("chips"));
        for tag in &project.tags {
            text_child(doc, chips, "span", Some("chip"), tag);
        }

        if let Some(href) = project.external_link() {
            let wrap = child(doc, card, "div", Some("project-link"));
            let link = text_child(doc, wrap, "a", None, &labels.learn_more);
            doc.set_attr(link, "href", href);
            doc.set_attr(link, "target", "_blank");
            doc.set_attr(link, "rel", "noopener");
        }

        if let Some(details) = &project.details {
            details_block(doc, card, details, &labels.details);
        }

        doc.set_style(card, "animation-delay", &stagger_delay(index, step));
        cards.push(card);
    }
    cards
}

pub fn skills(doc: &mut Document, container: NodeId, items: &[String], step: f64) -> Vec<NodeId> {
    doc.clear_children(container);
    items
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let chip = text_child(doc, container, "span", Some("chip"), skill);
            doc.set_style(chip, "animation-delay", &stagger_delay(index, step));
            chip
        })
        .collect()
}

pub fn publications(
    doc: &mut Document,
    container: NodeId,
    items: &[PublicationEntry],
    step: f64,
) -> Vec<NodeId> {
    doc.clear_children(container);
    items
        .iter()
        .enumerate()
        .map(|(index, publication)| {
            let item = child(doc, container, "div", Some("item"));
            text_child(doc, item, "strong", None, &publication.citation);
            let meta = format!("{}{BULLET}{}", publication.venue, publication.year);
            text_child(doc, item, "div", Some("muted"), &meta);
            doc.set_style(item, "animation-delay", &stagger_delay(index, step));
            item
        })
        .collect()
}
