//! Pure render model for the progress navigator.
//!
//! [`render`] maps `(CompletionState, Outline, active lesson)` to everything
//! the DOM shell needs to paint: one status per lesson, one ring per chapter,
//! and the overall bar. Nothing here is persisted; the shell recomputes the
//! model on every update.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use crate::completion::CompletionState;
use crate::outline::{LessonId, Outline};

/// Display status of a single lesson. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    /// The lesson named by the location fragment.
    Active,
    /// In the completed set and not active.
    Completed,
    /// Neither active nor completed.
    Upcoming,
}

impl LessonStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Completed, Self::Upcoming];

    /// Status icon glyph.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Active => "\u{25B6}",
            Self::Completed => "\u{2713}",
            Self::Upcoming => "\u{25CB}",
        }
    }

    /// CSS modifier class applied to the lesson item.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Active => "lesson--active",
            Self::Completed => "lesson--completed",
            Self::Upcoming => "lesson--upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonView {
    pub id: LessonId,
    pub chapter: usize,
    pub status: LessonStatus,
}

/// Stroke geometry for a circular progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub circumference: f64,
    /// `stroke-dashoffset`; equals the circumference at 0% and 0 at 100%.
    pub offset: f64,
    pub percent: f64,
}

impl RingGeometry {
    /// Ring for `completed` out of `total`. A zero total renders as 0%.
    #[must_use]
    pub fn new(radius: f64, completed: usize, total: usize) -> Self {
        let circumference = 2.0 * PI * radius;
        let fraction = ratio(completed, total);
        Self { circumference, offset: circumference * (1.0 - fraction), percent: fraction * 100.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterView {
    pub index: usize,
    pub completed: usize,
    pub total: usize,
    /// The chapter holds the active lesson and must be shown expanded.
    pub force_expand: bool,
    pub ring: RingGeometry,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

/// Everything the navigator paints for one update.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    /// Active lesson, only if it exists in the outline.
    pub active: Option<LessonId>,
    pub lessons: Vec<LessonView>,
    pub chapters: Vec<ChapterView>,
    pub overall: OverallProgress,
}

impl RenderModel {
    #[must_use]
    pub fn status_of(&self, id: &str) -> Option<LessonStatus> {
        self.lessons.iter().find(|l| l.id == id).map(|l| l.status)
    }
}

/// Build the render model.
///
/// `ring_radius` sizes every chapter ring. An `active` id that is not in the
/// outline is treated as no active lesson.
#[must_use]
pub fn render(state: &CompletionState, outline: &Outline, active: Option<&str>, ring_radius: f64) -> RenderModel {
    let active = active.filter(|id| outline.contains(id));

    let mut lessons = Vec::with_capacity(outline.lesson_count());
    let mut chapters = Vec::with_capacity(outline.chapters().len());
    let mut overall_completed = 0;

    for (index, chapter) in outline.chapters().iter().enumerate() {
        let mut completed = 0;
        let mut force_expand = false;

        for id in &chapter.lessons {
            let done = state.contains(id);
            if done {
                completed += 1;
            }
            let status = if active == Some(id.as_str()) {
                force_expand = true;
                LessonStatus::Active
            } else if done {
                LessonStatus::Completed
            } else {
                LessonStatus::Upcoming
            };
            lessons.push(LessonView { id: id.clone(), chapter: index, status });
        }

        overall_completed += completed;
        let total = chapter.lessons.len();
        chapters.push(ChapterView {
            index,
            completed,
            total,
            force_expand,
            ring: RingGeometry::new(ring_radius, completed, total),
        });
    }

    let total = outline.lesson_count();
    RenderModel {
        active: active.map(str::to_owned),
        lessons,
        chapters,
        overall: OverallProgress { completed: overall_completed, total, percent: ratio(overall_completed, total) * 100.0 },
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 }
}
