//! Testable navigator core.
//!
//! Holds the outline, the completion set, and the current location fragment,
//! and exposes one method per user-facing trigger. The browser shell owns
//! storage, history, and the DOM; it calls in here and paints the
//! [`RenderModel`] that comes back.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::borrow::Cow;

use crate::completion::CompletionState;
use crate::fragment;
use crate::outline::Outline;
use crate::render::{self, RenderModel};

/// What the shell must do after a confirmed reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetFollowUp {
    /// The fragment was non-empty. Clearing it fires `hashchange`, which
    /// drives the update.
    AwaitHashChange,
    /// The fragment was already empty and no navigation event will fire.
    UpdateNow,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    outline: Outline,
    completion: CompletionState,
    fragment: String,
    ring_radius: f64,
}

impl Navigator {
    #[must_use]
    pub fn new(outline: Outline, completion: CompletionState, ring_radius: f64) -> Self {
        Self { outline, completion, fragment: String::new(), ring_radius }
    }

    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    #[must_use]
    pub fn completion(&self) -> &CompletionState {
        &self.completion
    }

    /// Record the current location hash (with or without `#`, percent-encoded
    /// or not).
    pub fn set_fragment(&mut self, hash: &str) {
        self.fragment = fragment::lesson_from_hash(hash).map(Cow::into_owned).unwrap_or_default();
    }

    /// Lesson id named by the fragment, whether or not the outline knows it.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        if self.fragment.is_empty() { None } else { Some(&self.fragment) }
    }

    /// Lesson link clicked: mark that one lesson complete.
    ///
    /// Returns `true` if the set changed. Ids outside the outline are ignored.
    pub fn complete_lesson(&mut self, id: &str) -> bool {
        self.outline.contains(id) && self.completion.mark(id)
    }

    /// The scroll observer reported `id` inside the detection band.
    ///
    /// Marks every lesson through `id` complete and makes it the fragment.
    /// Returns the number of newly completed lessons, or `None` when `id` is
    /// not a lesson.
    pub fn sight(&mut self, id: &str) -> Option<usize> {
        if !self.outline.contains(id) {
            return None;
        }
        let added = self.completion.mark_through(&self.outline, id);
        id.clone_into(&mut self.fragment);
        Some(added)
    }

    /// Confirmed reset: forget all progress and move to the top of the page.
    pub fn reset(&mut self) -> ResetFollowUp {
        self.completion.clear();
        let follow_up = if self.fragment.is_empty() { ResetFollowUp::UpdateNow } else { ResetFollowUp::AwaitHashChange };
        self.fragment.clear();
        follow_up
    }

    /// Compute the render model for the current state.
    #[must_use]
    pub fn render(&self) -> RenderModel {
        render::render(&self.completion, &self.outline, self.fragment(), self.ring_radius)
    }
}
