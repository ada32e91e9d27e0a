//! Location fragment handling.
//!
//! Browsers report `location.hash` percent-encoded, so a lesson written as
//! `#leçon` reads back as `#le%C3%A7on`. Ids are decoded before they reach the
//! outline.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Extract the lesson id named by a location hash (`"#l2"` → `Some("l2")`).
///
/// Accepts the hash with or without its leading `#`. Percent escapes are
/// decoded; a fragment that does not decode to UTF-8 is kept as written. An
/// empty fragment means no lesson is active.
#[must_use]
pub fn lesson_from_hash(hash: &str) -> Option<Cow<'_, str>> {
    let raw = hash.strip_prefix('#').unwrap_or(hash).trim();
    if raw.is_empty() {
        return None;
    }
    let id = percent_decode_str(raw).decode_utf8().unwrap_or(Cow::Borrowed(raw));
    Some(id)
}

/// Build the hash string for a lesson id (`"l2"` → `"#l2"`).
#[must_use]
pub fn hash_for(id: &str) -> String {
    format!("#{id}")
}
