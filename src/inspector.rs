//! Concept inspector: a side panel that docks to the right edge and narrows
//! the main column instead of covering it.

#[cfg(test)]
#[path = "inspector_test.rs"]
mod inspector_test;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;

pub const PANEL_ID: &str = "inspector-panel";
pub const TITLE_ID: &str = "inspector-title";
pub const BODY_ID: &str = "inspector-body";
pub const CLOSE_ID: &str = "inspector-close-button";
pub const MAIN_ID: &str = "main-content";

const PANEL_OFFSCREEN: &str = "translate-x-full";
const MAIN_DOCKED: [&str; 2] = ["md:w-2/3", "md:mr-[33.333333%]"];

/// Pick the panel title: the content's own title, then the trigger's text,
/// then `fallback`.
#[must_use]
pub fn resolve_title(content_title: Option<&str>, trigger_text: Option<&str>, fallback: &str) -> String {
    [content_title, trigger_text]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

#[derive(Clone)]
pub struct ConceptInspector {
    document: Document,
    panel: Element,
    title: Element,
    body: Element,
    main: Option<Element>,
    default_title: Rc<str>,
    topic: Rc<RefCell<Option<String>>>,
}

impl ConceptInspector {
    /// Bind the inspector if its panel, title and body exist.
    pub fn mount(document: &Document, config: &SiteConfig) -> Option<Self> {
        let this = Self {
            document: document.clone(),
            panel: document.get_element_by_id(PANEL_ID)?,
            title: document.get_element_by_id(TITLE_ID)?,
            body: document.get_element_by_id(BODY_ID)?,
            main: document.get_element_by_id(MAIN_ID),
            default_title: Rc::from(config.inspector_default_title.as_str()),
            topic: Rc::new(RefCell::new(None)),
        };
        if let Err(e) = this.bind() {
            log::warn!("concept inspector not bound: {e}");
            return None;
        }
        Some(this)
    }

    fn bind(&self) -> Result<()> {
        if let Some(close) = self.document.get_element_by_id(CLOSE_ID) {
            let this = self.clone();
            dom::listen(&close, "click", move |_| this.close())?;
        }
        Ok(())
    }

    /// Open from an `.inspector-trigger` carrying `data-inspector-topic`.
    pub fn open_from_trigger(&self, trigger: &Element) {
        let Some(topic) = dom::attr(trigger, "data-inspector-topic") else {
            log::warn!("inspector trigger without data-inspector-topic");
            return;
        };
        let text = trigger.text_content();
        self.open(&topic, text.as_deref());
    }

    /// Show the content element with id `topic_id`. Returns `false` if it does not exist.
    pub fn open(&self, topic_id: &str, trigger_text: Option<&str>) -> bool {
        let Some(content) = self.document.get_element_by_id(topic_id) else {
            log::warn!("inspector topic #{topic_id} not found");
            return false;
        };
        let content_title = content.get_attribute("data-inspector-title");
        let title = resolve_title(content_title.as_deref(), trigger_text, &self.default_title);
        self.title.set_text_content(Some(&title));
        self.body.set_inner_html(&content.inner_html());
        self.dock(true);
        *self.topic.borrow_mut() = Some(topic_id.to_owned());
        true
    }

    pub fn close(&self) {
        if self.topic.borrow_mut().take().is_some() {
            self.dock(false);
        }
    }

    fn dock(&self, open: bool) {
        dom::set_class(&self.panel, PANEL_OFFSCREEN, !open);
        if let Some(main) = &self.main {
            for class in MAIN_DOCKED {
                dom::set_class(main, class, open);
            }
        }
    }
}
