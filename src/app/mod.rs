//! The application context.
//!
//! [`App`] owns everything the page script used to keep in module-level
//! bindings: the document, its resolved mount points, host capabilities and
//! the small amount of interaction state.
//!
//! ```text
//! App::new(shell)        resolve mounts (MountError)
//!   └─ init(source)      year, smooth scroll, theme, load (LoadError),
//!                        render sections, wire contact, observe .fade-in
//!        └─ dispatch(UiEvent) / advance(Duration)
//! ```

mod copy;
mod event;
pub mod filter;
mod mounts;
pub mod render;
pub mod scroll;
mod theme;

pub use event::{ScrollReport, SectionOffset, UiEvent};
pub use mounts::{MountError, Mounts};
pub use theme::Theme;

use crate::config::{LabelsConfig, SiteConfig, UiConfig};
use crate::data::{Documents, LoadError, Source, distinct_tags, load_documents};
use crate::dom::{Document, NodeId};
use crate::log;
use crate::platform::{Clipboard, Storage, StorageError, TimerQueue};
use chrono::Datelike;
use filter::Card;
use rustc_hash::FxHashMap;
use scroll::RevealObserver;

/// Class that opts an element into reveal-on-scroll.
pub const FADE_IN_CLASS: &str = "fade-in";

/// Renderer settings taken from the site configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub labels: LabelsConfig,
    pub ui: UiConfig,
    pub storage_key: String,
    /// Colour scheme reported by the host.
    pub system: Theme,
}

impl Settings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            labels: config.labels.clone(),
            ui: config.ui.clone(),
            storage_key: config.theme.storage_key.clone(),
            system: config.theme.system,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Deferred work on the timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Put a copy control's resting label back.
    RestoreLabel(NodeId),
}

pub struct App<S, C> {
    doc: Document,
    mounts: Mounts,
    settings: Settings,
    storage: S,
    clipboard: C,
    timers: TimerQueue<TimerTask>,
    observer: RevealObserver,
    theme: Theme,
    cards: Vec<Card>,
    /// Label each copy control shows when idle, captured on first use.
    resting_labels: FxHashMap<NodeId, String>,
}

impl<S: Storage, C: Clipboard> App<S, C> {
    /// Bind to the shell's mount points. Nothing is rendered yet.
    pub fn new(
        doc: Document,
        settings: Settings,
        storage: S,
        clipboard: C,
    ) -> Result<Self, MountError> {
        let mounts = Mounts::resolve(&doc)?;
        log!(
            "render";
            "mounted shell ({} nav links, {} sections)",
            mounts.nav_links.len(),
            mounts.sections.len()
        );

        Ok(Self {
            doc,
            mounts,
            observer: RevealObserver::new(settings.ui.reveal_threshold),
            settings,
            storage,
            clipboard,
            timers: TimerQueue::new(),
            theme: Theme::default(),
            cards: Vec::new(),
            resting_labels: FxHashMap::default(),
        })
    }

    /// Run the startup sequence against `source`.
    ///
    /// On a load failure the summary shows the failure message, no section is
    /// populated and the error is returned; the theme toggle and the static
    /// chrome stay usable either way.
    pub fn init(
        &mut self,
        source: &dyn Source,
        resume: &str,
        projects: &str,
    ) -> Result<(), LoadError> {
        let year = chrono::Local::now().year().to_string();
        self.doc.set_text(self.mounts.year, &year);
        self.doc.set_style(self.doc.root(), "scroll-behavior", "smooth");
        self.init_theme();

        let result = load_documents(source, resume, projects);
        match &result {
            Ok(documents) => self.render(documents),
            Err(err) => {
                log!("error"; "failed to load resume data: {err}");
                let summary = self.mounts.summary;
                let message = self.settings.labels.load_failed.clone();
                self.doc.set_text(summary, &message);
            }
        }

        for node in self.doc.elements_by_class(FADE_IN_CLASS) {
            self.observer.observe(node);
        }
        result.map(|_| ())
    }

    fn render(&mut self, documents: &Documents) {
        let Documents { resume, projects } = documents;
        let Self {
            doc,
            mounts,
            settings,
            ..
        } = self;
        let stagger = &settings.ui.stagger;

        doc.set_text(mounts.summary, &resume.summary);
        let experience = render::experience(
            doc,
            mounts.experience,
            &resume.experience,
            &settings.labels,
            stagger.experience,
        );
        let skills = render::skills(doc, mounts.skills, &resume.skills, stagger.skills);
        let publications = render::publications(
            doc,
            mounts.publications,
            &resume.publications,
            stagger.publications,
        );
        let cards = render::projects(
            doc,
            mounts.projects,
            projects,
            &settings.labels,
            stagger.projects,
        );

        let tags = distinct_tags(projects);
        filter::populate(doc, mounts.filter, &tags, &settings.labels.all_tags);

        self.cards = cards
            .into_iter()
            .zip(projects)
            .map(|(node, project)| Card::new(node, project))
            .collect();
        self.wire_contact(documents);

        log!(
            "render";
            "{} experience, {} projects, {} skills, {} publications, {} tags",
            experience.len(),
            self.cards.len(),
            skills.len(),
            publications.len(),
            tags.len()
        );
    }

    fn wire_contact(&mut self, documents: &Documents) {
        let contact = &documents.resume.contact;
        let mounts = &self.mounts;

        self.doc.set_text(mounts.email_link, &contact.email);
        self.doc
            .set_attr(mounts.email_link, "href", &format!("mailto:{}", contact.email));
        for (link, href) in [
            (mounts.github_link, &contact.github),
            (mounts.linkedin_link, &contact.linkedin),
        ] {
            let href = href.as_deref().filter(|h| !h.is_empty()).unwrap_or("#");
            self.doc.set_attr(link, "href", href);
        }

        if let (Some(phone), Some(number)) = (mounts.phone, &contact.phone) {
            self.doc.set_text(phone, number);
            self.resting_labels.remove(&phone);
        }
    }

    // ------------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------------

    fn init_theme(&mut self) {
        let stored = self.storage.get(&self.settings.storage_key);
        self.theme = Theme::initial(stored.as_deref(), self.settings.system);
        log!("theme"; "{} (stored: {})", self.theme, stored.as_deref().unwrap_or("none"));
        self.apply_theme();
    }

    fn apply_theme(&mut self) {
        let root = self.doc.root();
        if self.theme.is_dark() {
            self.doc.add_class(root, Theme::DARK_CLASS);
        } else {
            self.doc.remove_class(root, Theme::DARK_CLASS);
        }

        let labels = &self.settings.labels;
        let icon = if self.theme.is_dark() {
            &labels.dark_icon
        } else {
            &labels.light_icon
        };
        self.doc.set_text(self.mounts.theme_toggle, icon);
    }

    /// Flip the theme and persist it. The page is updated even if persisting fails.
    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggled();
        self.apply_theme();
        self.storage
            .set(&self.settings.storage_key, self.theme.as_str())?;
        Ok(self.theme)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn mounts(&self) -> &Mounts {
        &self.mounts
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn observer(&self) -> &RevealObserver {
        &self.observer
    }

    /// Timer tasks still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
