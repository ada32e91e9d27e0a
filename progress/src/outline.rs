//! Static course structure: chapters of lessons in document order.
//!
//! The outline is built once from page markup and never changes afterwards.
//! A lesson id that shows up twice is kept at its first occurrence so every
//! lesson belongs to exactly one chapter.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use std::collections::HashMap;

/// Stable lesson identifier. Matches the `id` of the lesson's heading anchor.
pub type LessonId = String;

/// Where a lesson sits in the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonSlot {
    /// Index of the owning chapter.
    pub chapter: usize,
    /// Position across the whole outline in document order (0-based).
    pub order: usize,
}

/// One chapter: an ordered list of lesson ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter {
    pub lessons: Vec<LessonId>,
}

/// Ordered chapters plus a lookup from lesson id to its slot.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    chapters: Vec<Chapter>,
    order: Vec<LessonId>,
    slots: HashMap<LessonId, LessonSlot>,
}

impl Outline {
    /// Build an outline from per-chapter lesson id lists in document order.
    ///
    /// Empty ids are skipped. Duplicates after the first occurrence are dropped.
    pub fn new<C, L, S>(chapters: C) -> Self
    where
        C: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: Into<LessonId>,
    {
        let mut outline = Self::default();
        for (chapter_idx, lessons) in chapters.into_iter().enumerate() {
            let mut chapter = Chapter::default();
            for id in lessons {
                let id: LessonId = id.into();
                if id.is_empty() || outline.slots.contains_key(&id) {
                    continue;
                }
                let slot = LessonSlot { chapter: chapter_idx, order: outline.order.len() };
                outline.slots.insert(id.clone(), slot);
                outline.order.push(id.clone());
                chapter.lessons.push(id);
            }
            outline.chapters.push(chapter);
        }
        outline
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// All lesson ids across every chapter, in document order.
    #[must_use]
    pub fn lessons(&self) -> &[LessonId] {
        &self.order
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn slot(&self, id: &str) -> Option<LessonSlot> {
        self.slots.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Lessons from the first one up to and including `id`, in document order.
    ///
    /// Empty when `id` is not part of the outline.
    #[must_use]
    pub fn lessons_through(&self, id: &str) -> &[LessonId] {
        match self.slot(id) {
            Some(slot) => &self.order[..=slot.order],
            None => &[],
        }
    }
}
