//! Copy-to-clipboard affordance.
//!
//! A click writes the text to the clipboard and swaps the control's label
//! for a confirmation or failure message. A timer puts the resting label
//! back, so overlapping clicks can never leave a stale confirmation behind.

use super::{App, TimerTask};
use crate::dom::NodeId;
use crate::log;
use crate::platform::{Clipboard, Storage};
use std::time::Duration;

impl<S: Storage, C: Clipboard> App<S, C> {
    /// Copy from `control`. With `source` the text comes from that node;
    /// without, the control's own resting label is copied.
    pub(super) fn copy_from(&mut self, control: NodeId, source: Option<NodeId>) {
        let resting = self
            .resting_labels
            .entry(control)
            .or_insert_with(|| self.doc.text_content(control))
            .clone();
        let text = match source {
            Some(node) => self.doc.text_content(node),
            None => resting,
        };

        // Failures end up on the label only
        let label = match self.clipboard.write_text(&text) {
            Ok(()) => &self.settings.labels.copied,
            Err(err) => {
                log!("copy"; "{err}");
                &self.settings.labels.copy_failed
            }
        };
        self.doc.set_text(control, label);

        let revert = Duration::from_millis(self.settings.ui.copy_revert_ms);
        self.timers.schedule(revert, TimerTask::RestoreLabel(control));
    }

    pub(super) fn run_timer(&mut self, task: TimerTask) {
        match task {
            TimerTask::RestoreLabel(node) => {
                if let Some(label) = self.resting_labels.get(&node) {
                    self.doc.set_text(node, label);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::UiEvent;
    use crate::app::tests::{app_with, loaded_app, source};
    use crate::platform::MemoryClipboard;

    #[test]
    fn test_copy_email_success_then_revert() {
        let mut app = loaded_app();
        let button = app.mounts().copy_email;

        app.dispatch(UiEvent::Click(button)).unwrap();

        assert_eq!(app.clipboard().contents(), Some("me@example.com"));
        assert_eq!(app.document().text_content(button), "✓ Copied!");

        app.advance(Duration::from_millis(1999));
        assert_eq!(app.document().text_content(button), "✓ Copied!");
        app.advance(Duration::from_millis(1));
        assert_eq!(app.document().text_content(button), "Copy");
        assert_eq!(app.pending_timers(), 0);
    }

    #[test]
    fn test_copy_failure_reverts_with_same_timer() {
        let mut app = app_with(MemoryClipboard::denying());
        app.init(&source(), "data/resume.json", "data/projects.json")
            .unwrap();
        let button = app.mounts().copy_email;

        assert!(app.dispatch(UiEvent::Click(button)).is_ok());
        assert_eq!(app.document().text_content(button), "✗ Copy failed");

        app.advance(Duration::from_secs(2));
        assert_eq!(app.document().text_content(button), "Copy");
    }

    #[test]
    fn test_overlapping_clicks_restore_resting_label() {
        let mut app = loaded_app();
        let button = app.mounts().copy_email;

        app.dispatch(UiEvent::Click(button)).unwrap();
        app.advance(Duration::from_millis(1500));
        app.dispatch(UiEvent::Click(button)).unwrap();

        app.advance(Duration::from_millis(500));
        assert_eq!(app.document().text_content(button), "Copy");
        app.advance(Duration::from_millis(1500));
        assert_eq!(app.document().text_content(button), "Copy");
    }

    #[test]
    fn test_phone_copies_its_number_not_the_confirmation() {
        let mut app = loaded_app();
        let phone = app.mounts().phone.unwrap();

        app.dispatch(UiEvent::Click(phone)).unwrap();
        assert_eq!(app.document().text_content(phone), "✓ Copied!");
        app.dispatch(UiEvent::Click(phone)).unwrap();

        assert_eq!(app.clipboard().contents(), Some("+1 555 0100"));
        app.advance(Duration::from_secs(2));
        assert_eq!(app.document().text_content(phone), "+1 555 0100");
    }
}
