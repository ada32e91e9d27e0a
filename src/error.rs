//! Error type for the browser shell.
//!
//! ERROR HANDLING
//! ==============
//! Widget code propagates with `?`. Event handlers are the boundary: they log
//! the error and carry on, so one broken widget never takes the page down.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to load {path}: HTTP {status} {status_text}")]
    PartialStatus { path: String, status: u16, status_text: String },
    #[error("failed to load {path}: {message}")]
    PartialTransport { path: String, message: String },
    #[error("failed to read {path}: {message}")]
    PartialBody { path: String, message: String },
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error(transparent)]
    Codec(#[from] progress::CompletionError),
}

pub type Result<T> = std::result::Result<T, SiteError>;

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
