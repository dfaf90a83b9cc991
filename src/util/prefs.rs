//! Key/value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell only needs "get a string" and "set a string with a lifetime".
//! Keeping that behind [`PreferenceStore`] lets the browser cookie jar be
//! swapped for an in-memory map in tests.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::collections::HashMap;
use std::sync::Mutex;

pub use super::cookie::CookieOptions;

/// Errors produced by preference store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// No backing storage exists in this environment (e.g. native builds).
    #[error("preference storage unavailable")]
    Unavailable,

    /// The backing storage refused the operation.
    #[error("preference storage rejected operation: {0}")]
    Rejected(String),
}

/// Minimal string key/value store with per-key expiry.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str, options: &CookieOptions) -> Result<(), PreferenceError>;
}

/// Browser cookie jar (`document.cookie`).
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        #[cfg(feature = "csr")]
        {
            let header = html_document()?.cookie().map_err(js_rejected)?;
            Ok(super::cookie::read_cookie(&header, key))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(PreferenceError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str, options: &CookieOptions) -> Result<(), PreferenceError> {
        #[cfg(feature = "csr")]
        {
            let raw = super::cookie::format_cookie(key, value, options);
            html_document()?.set_cookie(&raw).map_err(js_rejected)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value, options);
            Err(PreferenceError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn html_document() -> Result<web_sys::HtmlDocument, PreferenceError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or(PreferenceError::Unavailable)
}

#[cfg(feature = "csr")]
fn js_rejected(err: wasm_bindgen::JsValue) -> PreferenceError {
    PreferenceError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// A value written to a [`MemoryStore`] together with its write options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredEntry {
    pub value: String,
    pub options: CookieOptions,
}

/// In-process store. Expiry is recorded but never enforced.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, StoredEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value as if a previous session had written it.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(
                key.to_owned(),
                StoredEntry {
                    value: value.to_owned(),
                    options: CookieOptions::default(),
                },
            );
        }
        store
    }

    /// Full entry for `key`, including the options of the last write.
    pub fn entry(&self, key: &str) -> Option<StoredEntry> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).map(|e| e.value.clone()))
    }

    fn set(&self, key: &str, value: &str, options: &CookieOptions) -> Result<(), PreferenceError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(
            key.to_owned(),
            StoredEntry {
                value: value.to_owned(),
                options: options.clone(),
            },
        );
        Ok(())
    }
}

fn poisoned() -> PreferenceError {
    PreferenceError::Rejected("memory store lock poisoned".to_owned())
}
