//! Completed-lesson set and its storage codec.
//!
//! DESIGN
//! ======
//! The set only grows during normal use. The one way back is [`CompletionState::clear`],
//! which the reset control drives. Stored as a flat JSON array of ids; order in
//! storage carries no meaning.
//!
//! ERROR HANDLING
//! ==============
//! [`CompletionState::decode`] reports corrupt payloads. Page load goes through
//! [`CompletionState::decode_or_empty`], which fails open: anything unreadable
//! becomes "no progress", and the decode error is handed back for logging.

#[cfg(test)]
#[path = "completion_test.rs"]
mod completion_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::outline::{LessonId, Outline};

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("corrupt completion payload: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode completion state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Set of completed lesson ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionState {
    ids: BTreeSet<LessonId>,
}

impl CompletionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one lesson complete. Returns `true` if it was not already.
    pub fn mark(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_owned())
    }

    /// Mark every lesson from the first up to and including `id` complete.
    ///
    /// Returns how many lessons were newly added. Unknown ids add nothing.
    pub fn mark_through(&mut self, outline: &Outline, id: &str) -> usize {
        outline
            .lessons_through(id)
            .iter()
            .filter(|lesson| self.mark(lesson))
            .count()
    }

    /// Forget every completed lesson.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Serialize to the stored form: a JSON array of ids.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String, CompletionError> {
        serde_json::to_string(self).map_err(CompletionError::Encode)
    }

    /// Parse the stored form.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Decode`] if `raw` is not a JSON array of strings.
    pub fn decode(raw: &str) -> Result<Self, CompletionError> {
        serde_json::from_str(raw).map_err(CompletionError::Decode)
    }

    /// Parse the stored form, treating a missing or corrupt value as empty.
    ///
    /// A corrupt value also returns its decode error so the caller can report
    /// it. A missing value is not an error.
    #[must_use]
    pub fn decode_or_empty(raw: Option<&str>) -> (Self, Option<CompletionError>) {
        match raw.map(Self::decode) {
            Some(Ok(state)) => (state, None),
            Some(Err(e)) => (Self::default(), Some(e)),
            None => (Self::default(), None),
        }
    }
}

impl<S: Into<LessonId>> FromIterator<S> for CompletionState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { ids: iter.into_iter().map(Into::into).collect() }
    }
}
