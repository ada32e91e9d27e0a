//! Per-page configuration.
//!
//! Defaults are compiled in. A page can override any of them with `data-*`
//! attributes on `<body>`; a missing or malformed value falls back to the
//! default.
//!
//! | Attribute | Default |
//! |-----------|---------|
//! | `data-progress-key` | `docsite_progress` |
//! | `data-modal-open-delay-ms` | 10 |
//! | `data-modal-close-delay-ms` | 300 |
//! | `data-progress-debounce-ms` | 100 |
//! | `data-detection-band-percent` | 10 |
//! | `data-ring-radius` | 18 |
//! | `data-inspector-default-title` | `Concept` |
//! | `data-reset-confirm` | `Reset all lesson progress?` |
//! | `data-log-level` | `info` |

use std::str::FromStr;

use progress::observe::{DEFAULT_BAND_PERCENT, DetectionBand};
use web_sys::Document;

pub const DEFAULT_STORAGE_KEY: &str = "docsite_progress";
/// Lets the `display` change land before the fade-in starts.
pub const DEFAULT_MODAL_OPEN_DELAY_MS: u32 = 10;
/// Matches the stylesheet's `duration-300` transition.
pub const DEFAULT_MODAL_CLOSE_DELAY_MS: u32 = 300;
pub const DEFAULT_UPDATE_DEBOUNCE_MS: u32 = 100;
pub const DEFAULT_RING_RADIUS: f64 = 18.0;
pub const DEFAULT_INSPECTOR_TITLE: &str = "Concept";
pub const DEFAULT_RESET_PROMPT: &str = "Reset all lesson progress?";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub storage_key: String,
    pub modal_open_delay_ms: u32,
    pub modal_close_delay_ms: u32,
    pub update_debounce_ms: u32,
    pub detection_band: DetectionBand,
    /// Used when a chapter ring carries no usable `r` attribute.
    pub default_ring_radius: f64,
    pub inspector_default_title: String,
    pub reset_prompt: String,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            modal_open_delay_ms: DEFAULT_MODAL_OPEN_DELAY_MS,
            modal_close_delay_ms: DEFAULT_MODAL_CLOSE_DELAY_MS,
            update_debounce_ms: DEFAULT_UPDATE_DEBOUNCE_MS,
            detection_band: DetectionBand::default(),
            default_ring_radius: DEFAULT_RING_RADIUS,
            inspector_default_title: DEFAULT_INSPECTOR_TITLE.to_owned(),
            reset_prompt: DEFAULT_RESET_PROMPT.to_owned(),
            log_level: log::Level::Info,
        }
    }
}

impl SiteConfig {
    /// Read overrides from the `<body>` element's data attributes.
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        match document.body() {
            Some(body) => Self::from_lookup(|name| body.get_attribute(name)),
            None => Self::default(),
        }
    }

    /// Build config from an attribute lookup (`name` → raw value).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let band_percent = parse_or(lookup("data-detection-band-percent"), DEFAULT_BAND_PERCENT);
        let ring_radius = parse_or(lookup("data-ring-radius"), DEFAULT_RING_RADIUS);

        Self {
            storage_key: text_or(lookup("data-progress-key"), DEFAULT_STORAGE_KEY),
            modal_open_delay_ms: parse_or(lookup("data-modal-open-delay-ms"), DEFAULT_MODAL_OPEN_DELAY_MS),
            modal_close_delay_ms: parse_or(lookup("data-modal-close-delay-ms"), DEFAULT_MODAL_CLOSE_DELAY_MS),
            update_debounce_ms: parse_or(lookup("data-progress-debounce-ms"), DEFAULT_UPDATE_DEBOUNCE_MS),
            detection_band: DetectionBand::centered(band_percent),
            default_ring_radius: if ring_radius.is_finite() && ring_radius > 0.0 { ring_radius } else { DEFAULT_RING_RADIUS },
            inspector_default_title: text_or(lookup("data-inspector-default-title"), DEFAULT_INSPECTOR_TITLE),
            reset_prompt: text_or(lookup("data-reset-confirm"), DEFAULT_RESET_PROMPT),
            log_level: parse_or(lookup("data-log-level"), log::Level::Info),
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    match raw.map(|v| v.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) | None => default,
    }
}

fn text_or(raw: Option<String>, default: &str) -> String {
    match raw {
        Some(v) if !v.trim().is_empty() => v.trim().to_owned(),
        _ => default.to_owned(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
