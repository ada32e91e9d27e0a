//! Static HTML partial loader.
//!
//! Elements declaring `data-partial="/path.html"` get that file's markup as
//! their content. Every fetch runs concurrently and [`load_all`] resolves only
//! once all of them have settled, so widgets initialised afterwards can find
//! elements that live inside partials.
//!
//! ERROR HANDLING
//! ==============
//! A failed partial is contained: its element shows an inline error, the
//! failure is logged, and the remaining partials load normally.

#[cfg(test)]
#[path = "partials_test.rs"]
mod partials_test;

use futures::future::join_all;
use gloo_net::http::Request;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::{Result, SiteError};

pub const PARTIAL_ATTR: &str = "data-partial";
/// Set on successfully loaded elements so a second pass skips them.
pub const LOADED_ATTR: &str = "data-partial-loaded";
pub const ERROR_CLASS: &str = "partial-error";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub failed: usize,
}

impl LoadReport {
    fn tally(outcomes: &[bool]) -> Self {
        let loaded = outcomes.iter().filter(|ok| **ok).count();
        Self { loaded, failed: outcomes.len() - loaded }
    }
}

/// Where a partial's markup, or its failure message, ends up.
pub trait PartialSlot {
    fn fill(&self, path: &str, markup: &str);
    fn fail(&self, err: &SiteError);
}

impl PartialSlot for Element {
    fn fill(&self, path: &str, markup: &str) {
        self.set_inner_html(markup);
        dom::set_attr(self, LOADED_ATTR, path);
        dom::remove_attr(self, PARTIAL_ATTR);
    }

    fn fail(&self, err: &SiteError) {
        if let Err(render_err) = show_error(self, err) {
            log::warn!("could not render partial error: {render_err}");
        }
    }
}

/// Load every declared partial and wait for all of them to settle.
pub async fn load_all(document: &Document) -> LoadReport {
    let Some(root) = document.document_element() else {
        return LoadReport::default();
    };
    let slots = dom::select_all(&root, &format!("[{PARTIAL_ATTR}]"))
        .into_iter()
        .filter_map(|el| dom::attr(&el, PARTIAL_ATTR).map(|path| (el, path)))
        .collect();
    load_each(slots, |path| async move { fetch(&path).await }).await
}

/// Fetch every slot's path concurrently and settle each one independently.
///
/// Resolves once every fetch has finished. A failure only affects its own
/// slot.
pub async fn load_each<S, F, Fut>(slots: Vec<(S, String)>, fetch: F) -> LoadReport
where
    S: PartialSlot,
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let loads = slots.into_iter().map(|(slot, path)| {
        let pending = fetch(path.clone());
        async move { settle(&slot, &path, pending.await) }
    });
    let outcomes = join_all(loads).await;
    LoadReport::tally(&outcomes)
}

fn settle<S: PartialSlot>(slot: &S, path: &str, fetched: Result<String>) -> bool {
    match fetched {
        Ok(markup) => {
            slot.fill(path, &markup);
            log::debug!("partial loaded: {path}");
            true
        }
        Err(e) => {
            log::error!("{e}");
            slot.fail(&e);
            false
        }
    }
}

async fn fetch(path: &str) -> Result<String> {
    let resp = Request::get(path).send().await.map_err(|e| SiteError::PartialTransport {
        path: path.to_owned(),
        message: e.to_string(),
    })?;
    check_status(path, resp.status(), &resp.status_text())?;
    resp.text().await.map_err(|e| SiteError::PartialBody { path: path.to_owned(), message: e.to_string() })
}

/// Only 2xx responses count as loaded.
///
/// # Errors
///
/// Returns [`SiteError::PartialStatus`] for any other status.
pub fn check_status(path: &str, status: u16, status_text: &str) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(SiteError::PartialStatus { path: path.to_owned(), status, status_text: status_text.to_owned() })
}

/// Text shown in place of a partial that failed to load.
#[must_use]
pub fn error_text(err: &SiteError) -> String {
    format!("Could not load this section ({err}).")
}

fn show_error(target: &Element, err: &SiteError) -> Result<()> {
    let Some(document) = target.owner_document() else {
        target.set_text_content(Some(&error_text(err)));
        return Ok(());
    };
    let message = document.create_element("p")?;
    message.set_class_name(ERROR_CLASS);
    message.set_text_content(Some(&error_text(err)));
    target.set_inner_html("");
    target.append_child(&message)?;
    Ok(())
}
