//! `localStorage` adapter for the completion set.
//!
//! ERROR HANDLING
//! ==============
//! Loading fails open: no storage, no key, or a corrupt value all mean "no
//! progress". Corruption is logged so it can be spotted in the console.
//! Writes report errors to the caller, which logs them.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use progress::CompletionState;
use web_sys::Storage;

use crate::dom;
use crate::error::{Result, SiteError};

pub struct CompletionStore {
    key: String,
}

impl CompletionStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<Storage> {
        let window = dom::window().ok_or_else(|| SiteError::Storage("no window".to_owned()))?;
        window.local_storage()?.ok_or_else(|| SiteError::Storage("localStorage disabled".to_owned()))
    }

    /// Read the persisted set. Never fails; problems yield an empty set.
    #[must_use]
    pub fn load(&self) -> CompletionState {
        restore(Self::storage().and_then(|s| s.get_item(&self.key).map_err(SiteError::from)))
    }

    /// Persist `state` under the configured key.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable, full, or encoding fails.
    pub fn save(&self, state: &CompletionState) -> Result<()> {
        let encoded = state.encode()?;
        Self::storage()?.set_item(&self.key, &encoded)?;
        Ok(())
    }

    /// Drop the persisted entry entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable.
    pub fn clear(&self) -> Result<()> {
        Self::storage()?.remove_item(&self.key)?;
        Ok(())
    }
}

/// Turn the outcome of a storage read into the starting completion set.
fn restore(read: Result<Option<String>>) -> CompletionState {
    let raw = match read {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("progress not loaded: {e}");
            return CompletionState::default();
        }
    };
    let (state, corrupt) = CompletionState::decode_or_empty(raw.as_deref());
    if let Some(e) = corrupt {
        log::warn!("{e}; starting from empty progress");
    }
    state
}
