//! UI events and their dispatch.
//!
//! The host reports what happened on the page; [`App::dispatch`] routes each
//! event to its handler. Clicks bubble: a click on a descendant of a control
//! counts as a click on the control.

use super::{App, filter, scroll};
use crate::dom::NodeId;
use crate::platform::{Clipboard, Storage, StorageError};
use std::time::Duration;

/// Top offset of one section, as laid out by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// Geometry reported with a scroll event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollReport {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    pub sections: Vec<SectionOffset>,
}

impl ScrollReport {
    pub fn new(offset: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            offset,
            viewport_height,
            document_height,
            sections: Vec::new(),
        }
    }

    pub fn with_section(mut self, id: &str, top: f64) -> Self {
        self.sections.push(SectionOffset {
            id: id.to_owned(),
            top,
        });
        self
    }

    fn top_of(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.top)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Click(NodeId),
    /// A form control took a new value.
    Change { node: NodeId, value: String },
    Scroll(ScrollReport),
    /// Visible fraction of an element changed.
    Intersect { node: NodeId, ratio: f64 },
}

impl<S: Storage, C: Clipboard> App<S, C> {
    /// Handle one event. Only persisting the theme can fail.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), StorageError> {
        match event {
            UiEvent::Click(node) => self.click(node)?,
            UiEvent::Change { node, value } => {
                if node == self.mounts.filter {
                    self.select_filter(&value);
                }
            }
            UiEvent::Scroll(report) => self.scroll(&report),
            UiEvent::Intersect { node, ratio } => {
                self.observer.report(&mut self.doc, node, ratio);
            }
        }
        Ok(())
    }

    /// Move the clock forward and run every timer that came due.
    pub fn advance(&mut self, by: Duration) {
        for task in self.timers.advance(by) {
            self.run_timer(task);
        }
    }

    /// Select `value` in the tag filter and re-evaluate the cards.
    ///
    /// Returns the number of cards left fully visible.
    pub fn select_filter(&mut self, value: &str) -> usize {
        let select = self.mounts.filter;
        filter::select(&mut self.doc, select, value);
        filter::apply(&mut self.doc, &self.cards, value, self.settings.ui.dim_opacity)
    }

    fn click(&mut self, target: NodeId) -> Result<(), StorageError> {
        let mut current = Some(target);
        while let Some(node) = current {
            if node == self.mounts.theme_toggle {
                self.toggle_theme()?;
                return Ok(());
            }
            if node == self.mounts.copy_email {
                self.copy_from(node, Some(self.mounts.email_link));
                return Ok(());
            }
            if Some(node) == self.mounts.phone {
                self.copy_from(node, None);
                return Ok(());
            }
            current = self.doc.parent(node);
        }
        Ok(())
    }

    fn scroll(&mut self, report: &ScrollReport) {
        if let Some(indicator) = self.mounts.scroll_progress {
            let percent = scroll::progress_percent(
                report.offset,
                report.viewport_height,
                report.document_height,
            );
            scroll::set_progress(&mut self.doc, indicator, percent);
        }

        let doc = &self.doc;
        let tops = self.mounts.sections.iter().filter_map(|&section| {
            let id = doc.attr(section, "id")?;
            Some((id, report.top_of(id)?))
        });
        let current = scroll::active_section(report.offset, tops, self.settings.ui.nav_lookahead)
            .map(str::to_owned);

        scroll::highlight_nav(&mut self.doc, &self.mounts.nav_links, current.as_deref());
    }
}
