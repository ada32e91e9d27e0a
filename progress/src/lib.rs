//! Lesson progress model for the tutorial site.
//!
//! This crate is browser-free so it can be tested natively. The wasm shell in
//! the root crate reads the course outline out of the page, hands it to a
//! [`navigator::Navigator`], and applies the resulting
//! [`render::RenderModel`] back to the DOM. Persistence goes through the JSON
//! codec on [`completion::CompletionState`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`outline`] | Static chapter/lesson structure in document order |
//! | [`completion`] | Completed-lesson set and its storage codec |
//! | [`fragment`] | Location fragment to active lesson id |
//! | [`observe`] | Viewport detection band and intersection picking |
//! | [`render`] | Pure render model: statuses, rings, overall bar |
//! | [`navigator`] | Testable navigator core tying the above together |

pub mod completion;
pub mod fragment;
pub mod navigator;
pub mod observe;
pub mod outline;
pub mod render;

pub use completion::{CompletionError, CompletionState};
pub use navigator::Navigator;
pub use outline::{LessonId, Outline};
pub use render::{LessonStatus, RenderModel};
