//! Thin helpers over `web-sys` shared by every widget.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::Result;

/// Visual "not displayed" class used by the stylesheet.
pub const HIDDEN: &str = "hidden";

#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Collect a `NodeList` into its element members.
#[must_use]
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements under `root` matching `selector`. Invalid selectors yield nothing.
#[must_use]
pub fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("bad selector {selector}: {e:?}");
            Vec::new()
        }
    }
}

/// First element under `root` matching `selector`.
#[must_use]
pub fn select(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap_or_default()
}

/// Nearest ancestor-or-self of `el` matching `selector`.
#[must_use]
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).unwrap_or_default()
}

/// Non-empty value of attribute `name`.
#[must_use]
pub fn attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name).filter(|v| !v.is_empty())
}

/// Add or remove a class. Failures are logged; class toggles are cosmetic.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::warn!("class toggle {class} failed: {e:?}");
    }
}

#[must_use]
pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        log::warn!("set {name} failed: {e:?}");
    }
}

pub fn remove_attr(el: &Element, name: &str) {
    if let Err(e) = el.remove_attribute(name) {
        log::warn!("remove {name} failed: {e:?}");
    }
}

/// The element an event was dispatched to, if it is one.
#[must_use]
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Attach a listener for the life of the page.
///
/// # Errors
///
/// Returns [`crate::error::SiteError::Dom`] if the browser rejects the listener.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Current location hash, `""` when unavailable.
#[must_use]
pub fn location_hash() -> String {
    window().and_then(|w| w.location().hash().ok()).unwrap_or_default()
}

/// Run `f` once the document has been parsed.
///
/// # Errors
///
/// Returns an error if the `DOMContentLoaded` listener cannot be attached.
pub fn when_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<()> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}
