//! Mobile navigation drawer.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::dom::{self, HIDDEN};
use crate::error::Result;

pub const BUTTON_ID: &str = "mobile-menu-button";
pub const MENU_ID: &str = "mobile-menu";
pub const OVERLAY_ID: &str = "mobile-menu-overlay";

/// Show/hide handle for the drawer. Clones share state.
#[derive(Clone)]
pub struct MobileMenu {
    button: Element,
    menu: Element,
    overlay: Option<Element>,
    open: Rc<Cell<bool>>,
}

impl MobileMenu {
    /// Bind the drawer if both the button and the menu exist.
    pub fn mount(document: &Document) -> Option<Self> {
        let button = document.get_element_by_id(BUTTON_ID)?;
        let menu = document.get_element_by_id(MENU_ID)?;
        let open = !dom::has_class(&menu, HIDDEN);
        let this = Self { button, menu, overlay: document.get_element_by_id(OVERLAY_ID), open: Rc::new(Cell::new(open)) };
        if let Err(e) = this.bind() {
            log::warn!("mobile menu not bound: {e}");
            return None;
        }
        this.sync();
        Some(this)
    }

    fn bind(&self) -> Result<()> {
        let this = self.clone();
        dom::listen(&self.button, "click", move |event| {
            // Keep document-level handlers from treating this as an outside click.
            event.stop_propagation();
            this.toggle();
        })?;
        if let Some(overlay) = &self.overlay {
            let this = self.clone();
            dom::listen(overlay, "click", move |_| this.close())?;
        }
        Ok(())
    }

    pub fn toggle(&self) {
        self.set_open(!self.open.get());
    }

    pub fn close(&self) {
        if self.open.get() {
            self.set_open(false);
        }
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
        self.sync();
    }

    fn sync(&self) {
        let open = self.open.get();
        dom::set_class(&self.menu, HIDDEN, !open);
        if let Some(overlay) = &self.overlay {
            dom::set_class(overlay, HIDDEN, !open);
        }
        dom::set_attr(&self.button, "aria-expanded", if open { "true" } else { "false" });
    }
}
