//! Click delegation.
//!
//! DESIGN
//! ======
//! Triggers can arrive late (inside partials), so nothing binds to them
//! directly. One `click` listener on the document looks up the clicked
//! element's nearest ancestor matching each registered [`TriggerKind`], in
//! registration order, and hands it to that kind's handler.

#[cfg(test)]
#[path = "delegate_test.rs"]
mod delegate_test;

use web_sys::{Document, Element, Event};

use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    DeepDive,
    Inspector,
    LessonLink,
    ChapterHeader,
}

impl TriggerKind {
    pub const ALL: [Self; 4] = [Self::DeepDive, Self::Inspector, Self::LessonLink, Self::ChapterHeader];

    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::DeepDive => ".deep-dive-trigger",
            Self::Inspector => ".inspector-trigger",
            Self::LessonLink => "#progress-navigator .lesson-link",
            Self::ChapterHeader => "#progress-navigator .chapter-header",
        }
    }

    /// Whether the click's default navigation is suppressed. Lesson links keep
    /// theirs: the fragment change is what drives the navigator.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::DeepDive | Self::Inspector | Self::ChapterHeader)
    }
}

type Handler = Box<dyn Fn(&Element)>;

#[derive(Default)]
pub struct Delegator {
    routes: Vec<(TriggerKind, Handler)>,
}

impl Delegator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route clicks on `kind` triggers to `handler`. Registering a kind again
    /// replaces its handler and keeps its original position.
    pub fn on(&mut self, kind: TriggerKind, handler: impl Fn(&Element) + 'static) {
        let handler: Handler = Box::new(handler);
        match self.routes.iter_mut().find(|(k, _)| *k == kind) {
            Some(route) => route.1 = handler,
            None => self.routes.push((kind, handler)),
        }
    }

    /// Registered kinds in dispatch order.
    #[must_use]
    pub fn kinds(&self) -> Vec<TriggerKind> {
        self.routes.iter().map(|(k, _)| *k).collect()
    }

    /// Start listening on `document`. The delegator lives as long as the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the click listener cannot be attached.
    pub fn install(self, document: &Document) -> Result<()> {
        if self.routes.is_empty() {
            return Ok(());
        }
        dom::listen(document, "click", move |event| self.dispatch(&event))
    }

    fn dispatch(&self, event: &Event) {
        let Some(target) = dom::event_element(event) else {
            return;
        };
        for (kind, handler) in &self.routes {
            if let Some(trigger) = dom::closest(&target, kind.selector()) {
                if kind.prevents_default() {
                    event.prevent_default();
                }
                log::debug!("dispatch {kind:?}");
                handler(&trigger);
                return;
            }
        }
    }
}
