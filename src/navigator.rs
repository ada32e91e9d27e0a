//! Progress navigator: the browser side of [`progress::Navigator`].
//!
//! DESIGN
//! ======
//! The outline is scanned out of `#progress-navigator` once at mount. After
//! that every trigger (lesson click, scroll sighting, fragment change, reset)
//! goes through the core, persists if the completed set changed, and repaints
//! from a freshly computed [`RenderModel`]. Nothing painted is read back.
//!
//! ERROR HANDLING
//! ==============
//! Storage and history failures are logged and the page keeps working with
//! in-memory progress. A missing anchor, ring or label just skips that piece
//! of the paint.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use progress::fragment;
use progress::navigator::ResetFollowUp;
use progress::observe::{DetectionBand, Sighting, pick_sighted};
use progress::render::{ChapterView, LessonStatus, RenderModel};
use progress::{Navigator, Outline};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::delegate::{Delegator, TriggerKind};
use crate::dom::{self, HIDDEN};
use crate::error::Result;
use crate::menu::MobileMenu;
use crate::storage::CompletionStore;

pub const ROOT_ID: &str = "progress-navigator";
pub const RESET_ID: &str = "reset-progress-button";
pub const OVERALL_BAR_ID: &str = "overall-progress-bar";
pub const OVERALL_LABEL_ID: &str = "overall-progress-label";

const CHAPTER: &str = ".chapter-item";
const CHAPTER_HEADER: &str = ".chapter-header";
const CHAPTER_LESSONS: &str = ".chapter-lessons";
const CHAPTER_RING: &str = ".progress-ring__circle";
const CHAPTER_LABEL: &str = ".chapter-progress-label";
const LESSON: &str = ".lesson-item[data-lesson-id]";
const LESSON_ITEM: &str = ".lesson-item";
const LESSON_ID_ATTR: &str = "data-lesson-id";
const LESSON_ICON: &str = ".lesson-status-icon";

// =============================================================================
// VIEW
// =============================================================================

struct ChapterNodes {
    header: Option<Element>,
    lessons: Option<Element>,
    ring: Option<Element>,
    label: Option<Element>,
}

struct LessonNodes {
    item: Element,
    icon: Option<Element>,
}

/// DOM handles the update paints into.
struct View {
    chapters: Vec<ChapterNodes>,
    lessons: HashMap<String, LessonNodes>,
    overall_bar: Option<HtmlElement>,
    overall_label: Option<Element>,
}

/// What scanning the navigator markup yields.
struct Scan {
    view: View,
    outline: Outline,
    ring_radius: Option<f64>,
}

impl View {
    fn scan(document: &Document, root: &Element) -> Scan {
        let mut chapters = Vec::new();
        let mut chapter_ids = Vec::new();
        let mut lessons = HashMap::new();

        for chapter in dom::select_all(root, CHAPTER) {
            let mut ids = Vec::new();
            for item in dom::select_all(&chapter, LESSON) {
                let Some(id) = dom::attr(&item, LESSON_ID_ATTR) else {
                    continue;
                };
                let icon = dom::select(&item, LESSON_ICON);
                lessons.entry(id.clone()).or_insert(LessonNodes { item, icon });
                ids.push(id);
            }
            chapters.push(ChapterNodes {
                header: dom::select(&chapter, CHAPTER_HEADER),
                lessons: dom::select(&chapter, CHAPTER_LESSONS),
                ring: dom::select(&chapter, CHAPTER_RING),
                label: dom::select(&chapter, CHAPTER_LABEL),
            });
            chapter_ids.push(ids);
        }

        let ring_radius = chapters
            .iter()
            .filter_map(|c| c.ring.as_ref())
            .find_map(|ring| ring.get_attribute("r")?.trim().parse::<f64>().ok())
            .filter(|r| r.is_finite() && *r > 0.0);

        let view = Self {
            chapters,
            lessons,
            overall_bar: document
                .get_element_by_id(OVERALL_BAR_ID)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            overall_label: document.get_element_by_id(OVERALL_LABEL_ID),
        };
        Scan { view, outline: Outline::new(chapter_ids), ring_radius }
    }

    fn paint(&self, model: &RenderModel) {
        for lesson in &model.lessons {
            let Some(nodes) = self.lessons.get(&lesson.id) else {
                continue;
            };
            for status in LessonStatus::ALL {
                dom::set_class(&nodes.item, status.class(), status == lesson.status);
            }
            if let Some(icon) = &nodes.icon {
                icon.set_text_content(Some(lesson.status.glyph()));
            }
            if lesson.status == LessonStatus::Active {
                dom::set_attr(&nodes.item, "aria-current", "location");
            } else {
                dom::remove_attr(&nodes.item, "aria-current");
            }
        }

        for (chapter, nodes) in model.chapters.iter().zip(&self.chapters) {
            paint_chapter(chapter, nodes);
        }

        let overall = model.overall;
        if let Some(bar) = &self.overall_bar
            && let Err(e) = bar.style().set_property("width", &format!("{:.1}%", overall.percent))
        {
            log::warn!("overall bar not updated: {e:?}");
        }
        if let Some(label) = &self.overall_label {
            label.set_text_content(Some(&format!("{:.0}%", overall.percent)));
        }
    }
}

fn paint_chapter(chapter: &ChapterView, nodes: &ChapterNodes) {
    if let Some(expanded) = forced_expansion(chapter) {
        if let Some(list) = &nodes.lessons {
            dom::set_class(list, HIDDEN, !expanded);
        }
        if let Some(header) = &nodes.header {
            dom::set_attr(header, "aria-expanded", aria_bool(expanded));
        }
    }
    if let Some(ring) = &nodes.ring {
        let c = chapter.ring.circumference;
        dom::set_attr(ring, "stroke-dasharray", &format!("{c:.3} {c:.3}"));
        dom::set_attr(ring, "stroke-dashoffset", &format!("{:.3}", chapter.ring.offset));
    }
    if let Some(label) = &nodes.label {
        label.set_text_content(Some(&format!("{}/{}", chapter.completed, chapter.total)));
    }
}

/// Expansion the paint must impose on a chapter. `None` leaves the reader's
/// own toggle alone.
fn forced_expansion(chapter: &ChapterView) -> Option<bool> {
    chapter.force_expand.then_some(true)
}

fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Chapter header click: show or hide that chapter's lesson list.
fn toggle_chapter(header: &Element) {
    let Some(list) = dom::closest(header, CHAPTER).and_then(|chapter| dom::select(&chapter, CHAPTER_LESSONS)) else {
        return;
    };
    let expand = dom::has_class(&list, HIDDEN);
    dom::set_class(&list, HIDDEN, !expand);
    dom::set_attr(header, "aria-expanded", aria_bool(expand));
}

// =============================================================================
// NAVIGATOR
// =============================================================================

struct Inner {
    core: RefCell<Navigator>,
    view: View,
    store: CompletionStore,
    menu: Option<MobileMenu>,
    debounce: RefCell<Option<Timeout>>,
    debounce_ms: u32,
    reset_prompt: String,
}

/// Handle to the mounted navigator. Clones share state.
#[derive(Clone)]
pub struct ProgressNavigator {
    inner: Rc<Inner>,
}

impl ProgressNavigator {
    /// Mount on `#progress-navigator` if present.
    ///
    /// `menu` is closed whenever a lesson link is followed.
    pub fn mount(document: &Document, config: &SiteConfig, menu: Option<MobileMenu>) -> Option<Self> {
        let root = document.get_element_by_id(ROOT_ID)?;
        let Scan { view, outline, ring_radius } = View::scan(document, &root);
        let store = CompletionStore::new(config.storage_key.clone());
        let mut core = Navigator::new(outline, store.load(), ring_radius.unwrap_or(config.default_ring_radius));
        core.set_fragment(&dom::location_hash());

        log::info!(
            "progress navigator: {} lessons in {} chapters, {} complete",
            core.outline().lesson_count(),
            core.outline().chapters().len(),
            core.completion().len(),
        );

        let this = Self {
            inner: Rc::new(Inner {
                core: RefCell::new(core),
                view,
                store,
                menu,
                debounce: RefCell::new(None),
                debounce_ms: config.update_debounce_ms,
                reset_prompt: config.reset_prompt.clone(),
            }),
        };
        if let Err(e) = this.bind(document) {
            log::warn!("progress navigator partly bound: {e}");
        }
        if let Err(e) = this.observe(document, config.detection_band) {
            log::warn!("scroll tracking disabled: {e}");
        }
        this.update();
        Some(this)
    }

    /// Route lesson-link and chapter-header clicks to this navigator.
    pub fn register(&self, delegator: &mut Delegator) {
        let this = self.clone();
        delegator.on(TriggerKind::LessonLink, move |link| this.on_lesson_click(link));
        delegator.on(TriggerKind::ChapterHeader, toggle_chapter);
    }

    fn bind(&self, document: &Document) -> Result<()> {
        if let Some(window) = dom::window() {
            let this = self.clone();
            dom::listen(&window, "hashchange", move |_| this.on_hash_change())?;
        }
        if let Some(reset) = document.get_element_by_id(RESET_ID) {
            let this = self.clone();
            dom::listen(&reset, "click", move |event| {
                event.prevent_default();
                this.on_reset();
            })?;
        }
        Ok(())
    }

    fn observe(&self, document: &Document, band: DetectionBand) -> Result<()> {
        let this = self.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let seen: Vec<(String, bool)> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target().id(), entry.is_intersecting()))
                .collect();
            let sighted = pick_sighted(
                seen.iter().map(|(id, intersecting)| Sighting { id: id.as_str(), intersecting: *intersecting }),
            );
            if let Some(id) = sighted {
                this.on_sighted(id);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&band.root_margin());
        options.set_threshold(&JsValue::from_f64(0.0));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let mut watched = 0;
        for id in self.inner.core.borrow().outline().lessons() {
            if let Some(anchor) = document.get_element_by_id(id) {
                observer.observe(&anchor);
                watched += 1;
            }
        }
        callback.forget();
        log::debug!("watching {watched} lesson anchors ({})", band.root_margin());
        Ok(())
    }

    /// Recompute the render model and paint it.
    pub fn update(&self) {
        let model = self.inner.core.borrow().render();
        self.inner.view.paint(&model);
    }

    fn schedule_update(&self) {
        let weak = Rc::downgrade(&self.inner);
        let timeout = Timeout::new(self.inner.debounce_ms, move || {
            if let Some(inner) = weak.upgrade() {
                ProgressNavigator { inner }.update();
            }
        });
        *self.inner.debounce.borrow_mut() = Some(timeout);
    }

    fn persist(&self) {
        let core = self.inner.core.borrow();
        if let Err(e) = self.inner.store.save(core.completion()) {
            log::warn!("progress not saved: {e}");
        }
    }

    fn on_hash_change(&self) {
        self.inner.core.borrow_mut().set_fragment(&dom::location_hash());
        self.update();
    }

    fn on_lesson_click(&self, link: &Element) {
        let Some(id) = dom::closest(link, LESSON_ITEM).and_then(|item| dom::attr(&item, LESSON_ID_ATTR)) else {
            return;
        };
        let changed = self.inner.core.borrow_mut().complete_lesson(&id);
        if changed {
            self.persist();
        }
        if let Some(menu) = &self.inner.menu {
            menu.close();
        }
        self.schedule_update();
    }

    fn on_sighted(&self, id: &str) {
        let added = self.inner.core.borrow_mut().sight(id);
        let Some(added) = added else {
            return;
        };
        log::debug!("lesson {id} in view, {added} newly complete");
        if added > 0 {
            self.persist();
        }
        if let Err(e) = replace_fragment(id) {
            log::warn!("fragment not updated: {e}");
        }
        self.update();
    }

    fn on_reset(&self) {
        let Some(window) = dom::window() else {
            return;
        };
        match window.confirm_with_message(&self.inner.reset_prompt) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                log::warn!("reset prompt failed: {e:?}");
                return;
            }
        }

        let follow_up = self.inner.core.borrow_mut().reset();
        if let Err(e) = self.inner.store.clear() {
            log::warn!("stored progress not cleared: {e}");
        }
        window.scroll_to_with_x_and_y(0.0, 0.0);
        log::info!("progress reset");

        match follow_up {
            ResetFollowUp::AwaitHashChange => {
                if let Err(e) = window.location().set_hash("") {
                    log::warn!("fragment not cleared: {e:?}");
                    self.update();
                }
            }
            ResetFollowUp::UpdateNow => self.update(),
        }
    }
}

/// Point the fragment at `id` without a reload or a new history entry.
fn replace_fragment(id: &str) -> Result<()> {
    let Some(window) = dom::window() else {
        return Ok(());
    };
    window.history()?.replace_state_with_url(&JsValue::NULL, "", Some(&fragment::hash_for(id)))?;
    Ok(())
}
