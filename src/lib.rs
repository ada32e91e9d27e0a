//! # docsite
//!
//! WebAssembly interactivity for the static tutorial pages: partial
//! includes, the mobile menu, the deep-dive modal, the concept inspector, and
//! the lesson progress navigator.
//!
//! Every widget is optional. Each `mount` returns `None` when its root markup
//! is missing, and the rest of the page carries on. Partials load first and
//! are awaited, since widgets look up elements that may live inside them.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Per-page settings from `<body>` data attributes |
//! | [`error`] | [`error::SiteError`] and the crate `Result` |
//! | [`dom`] | Small `web-sys` helpers shared by all widgets |
//! | [`partials`] | `data-partial` loader |
//! | [`menu`] | Mobile navigation drawer |
//! | [`transition`] | Pure open/close phase machine for the modal |
//! | [`modal`] | Deep-dive modal |
//! | [`inspector`] | Concept inspector side panel |
//! | [`delegate`] | Document-level click dispatch by trigger kind |
//! | [`storage`] | `localStorage` adapter for lesson progress |
//! | [`navigator`] | Progress navigator shell over the `progress` crate |

pub mod config;
pub mod delegate;
pub mod dom;
pub mod error;
pub mod inspector;
pub mod menu;
pub mod modal;
pub mod navigator;
pub mod partials;
pub mod storage;
pub mod transition;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, KeyboardEvent};

use crate::config::SiteConfig;
use crate::delegate::{Delegator, TriggerKind};
use crate::inspector::ConceptInspector;
use crate::menu::MobileMenu;
use crate::modal::DeepDiveModal;
use crate::navigator::ProgressNavigator;

/// Widgets mounted on the current page.
#[derive(Clone, Default)]
pub struct Site {
    pub menu: Option<MobileMenu>,
    pub modal: Option<DeepDiveModal>,
    pub inspector: Option<ConceptInspector>,
    pub navigator: Option<ProgressNavigator>,
}

impl Site {
    /// Mount every widget whose markup is present and wire their triggers.
    pub fn mount(document: &Document, config: &SiteConfig) -> Self {
        let menu = MobileMenu::mount(document);
        let site = Self {
            modal: DeepDiveModal::mount(document, config),
            inspector: ConceptInspector::mount(document, config),
            navigator: ProgressNavigator::mount(document, config, menu.clone()),
            menu,
        };

        let mut delegator = Delegator::new();
        if let Some(modal) = site.modal.clone() {
            delegator.on(TriggerKind::DeepDive, move |trigger| modal.open_from_trigger(trigger));
        }
        if let Some(inspector) = site.inspector.clone() {
            delegator.on(TriggerKind::Inspector, move |trigger| inspector.open_from_trigger(trigger));
        }
        if let Some(navigator) = &site.navigator {
            navigator.register(&mut delegator);
        }
        if let Err(e) = delegator.install(document) {
            log::warn!("click delegation disabled: {e}");
        }

        let escape = site.clone();
        if let Err(e) = dom::listen(document, "keydown", move |event| {
            if event.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
                escape.dismiss();
            }
        }) {
            log::warn!("escape handling disabled: {e}");
        }

        log::info!(
            "mounted: menu={} modal={} inspector={} navigator={}",
            site.menu.is_some(),
            site.modal.is_some(),
            site.inspector.is_some(),
            site.navigator.is_some(),
        );
        site
    }

    /// Close every open overlay.
    pub fn dismiss(&self) {
        if let Some(modal) = &self.modal {
            modal.close();
        }
        if let Some(inspector) = &self.inspector {
            inspector.close();
        }
        if let Some(menu) = &self.menu {
            menu.close();
        }
    }
}

/// Load partials, then mount the widgets against the completed DOM.
pub async fn boot(document: Document, config: SiteConfig) -> Site {
    let report = partials::load_all(&document).await;
    log::info!("partials settled: {} loaded, {} failed", report.loaded, report.failed);
    Site::mount(&document, &config)
}

/// wasm entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        return;
    };
    let ready_doc = document.clone();
    // `<body>` carries the config, so read it only once the document is parsed.
    if let Err(e) = dom::when_ready(&document, move || {
        let config = SiteConfig::from_document(&ready_doc);
        if let Err(e) = console_log::init_with_level(config.log_level) {
            log::debug!("logger not installed: {e}");
        }
        wasm_bindgen_futures::spawn_local(async move {
            boot(ready_doc, config).await;
        });
    }) {
        log::error!("boot not scheduled: {e}");
    }
}
