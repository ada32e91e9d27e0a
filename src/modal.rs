//! Deep-dive modal overlay.
//!
//! A trigger names a hidden content block; opening copies that block's
//! rendered markup into the modal body. Visual phases are driven by
//! [`Transition`]: the shell only applies the effects it returns and keeps at
//! most one pending timer, replacing it whenever a newer step schedules one.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget};

use crate::config::SiteConfig;
use crate::dom::{self, HIDDEN};
use crate::error::Result;
use crate::transition::{Effect, Step, Transition};

pub const ROOT_ID: &str = "deep-dive-modal";
pub const CONTENT_ID: &str = "modal-content";
pub const TITLE_ID: &str = "modal-title";
pub const BODY_ID: &str = "modal-body";
pub const CLOSE_ID: &str = "close-modal-button";

const FADED: &str = "opacity-0";
const SHRUNK: &str = "scale-95";

struct Parts {
    root: Element,
    content: Element,
    title: Element,
    body: Element,
}

/// The single modal on the page. Clones share state.
#[derive(Clone)]
pub struct DeepDiveModal {
    document: Document,
    parts: Rc<Parts>,
    transition: Rc<RefCell<Transition>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl DeepDiveModal {
    /// Bind the modal if its root, content box, title and body all exist.
    pub fn mount(document: &Document, config: &SiteConfig) -> Option<Self> {
        let parts = Parts {
            root: document.get_element_by_id(ROOT_ID)?,
            content: document.get_element_by_id(CONTENT_ID)?,
            title: document.get_element_by_id(TITLE_ID)?,
            body: document.get_element_by_id(BODY_ID)?,
        };
        let this = Self {
            document: document.clone(),
            parts: Rc::new(parts),
            transition: Rc::new(RefCell::new(Transition::new(config.modal_open_delay_ms, config.modal_close_delay_ms))),
            timer: Rc::new(RefCell::new(None)),
        };
        if let Err(e) = this.bind() {
            log::warn!("deep-dive modal not bound: {e}");
            return None;
        }
        Some(this)
    }

    fn bind(&self) -> Result<()> {
        let this = self.clone();
        dom::listen(&self.parts.root, "click", move |event| {
            let root: &EventTarget = this.parts.root.unchecked_ref();
            if event.target().as_ref() == Some(root) {
                this.close();
            }
        })?;
        if let Some(close) = self.document.get_element_by_id(CLOSE_ID) {
            let this = self.clone();
            dom::listen(&close, "click", move |_| this.close())?;
        }
        Ok(())
    }

    /// Open from a `.deep-dive-trigger` carrying `data-title` and `data-content-id`.
    pub fn open_from_trigger(&self, trigger: &Element) {
        let Some(content_id) = dom::attr(trigger, "data-content-id") else {
            log::warn!("deep-dive trigger without data-content-id");
            return;
        };
        let Some(source) = self.document.get_element_by_id(&content_id) else {
            log::warn!("deep-dive content #{content_id} not found");
            return;
        };
        let title = trigger.get_attribute("data-title").unwrap_or_default();
        self.open(&title, &source.inner_html());
    }

    /// Show `title` and `body_html`. While already open only the content changes.
    pub fn open(&self, title: &str, body_html: &str) {
        self.parts.title.set_text_content(Some(title));
        self.parts.body.set_inner_html(body_html);
        let step = self.transition.borrow_mut().open();
        self.run(step);
    }

    pub fn close(&self) {
        let step = self.transition.borrow_mut().close();
        self.run(step);
    }

    fn run(&self, step: Step) {
        for effect in step.effects {
            apply(&self.parts, effect);
        }
        let Some(pending) = step.pending else {
            return;
        };
        let parts = Rc::clone(&self.parts);
        let transition = Rc::clone(&self.transition);
        let timeout = Timeout::new(pending.delay_ms, move || {
            let settled = transition.borrow_mut().settle(pending.token);
            if let Some(effect) = settled {
                apply(&parts, effect);
            }
        });
        // Dropping the previous Timeout cancels it.
        *self.timer.borrow_mut() = Some(timeout);
    }
}

fn apply(parts: &Parts, effect: Effect) {
    match effect {
        Effect::Reveal => dom::set_class(&parts.root, HIDDEN, false),
        Effect::AnimateIn => {
            dom::set_class(&parts.root, FADED, false);
            dom::set_class(&parts.content, SHRUNK, false);
        }
        Effect::AnimateOut => {
            dom::set_class(&parts.content, SHRUNK, true);
            dom::set_class(&parts.root, FADED, true);
        }
        Effect::Conceal => dom::set_class(&parts.root, HIDDEN, true),
    }
}
