//! Theme preference load, persist and apply.
//!
//! Reads the user's preference from the preference store and applies the
//! matching background/text classes to `<body>`. Toggle writes the new value
//! back with the configured lifetime before returning it, so callers update
//! their state only after the store holds the same value.
//!
//! TRADE-OFFS
//! ==========
//! A failed write leaves the theme as it was: the rendered theme never
//! differs from the last value the store accepted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeCookie;
use crate::state::ui::ThemePreference;
use crate::util::prefs::{CookieOptions, PreferenceError, PreferenceStore};

/// Read the theme preference, treating unreadable storage as "no preference".
pub fn read_preference(store: &dyn PreferenceStore, cookie: &ThemeCookie) -> ThemePreference {
    match store.get(&cookie.key) {
        Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
        Err(PreferenceError::Unavailable) => {
            log::debug!("theme preference storage unavailable; defaulting to light");
            ThemePreference::Light
        }
        Err(e) => {
            log::warn!("theme preference read failed: {e}");
            ThemePreference::Light
        }
    }
}

/// Persist `theme` under the theme cookie with its configured lifetime.
pub fn persist(
    store: &dyn PreferenceStore,
    cookie: &ThemeCookie,
    theme: ThemePreference,
) -> Result<(), PreferenceError> {
    store.set(
        &cookie.key,
        theme.as_str(),
        &CookieOptions::expiring_in_days(cookie.expires_in_days),
    )
}

/// Flip the theme and persist the new value.
///
/// Returns the new theme once it is stored. When the write fails the
/// current theme is returned unchanged.
pub fn toggle(current: ThemePreference, store: &dyn PreferenceStore, cookie: &ThemeCookie) -> ThemePreference {
    let next = current.toggled();
    match persist(store, cookie, next) {
        Ok(()) => {
            log::info!("theme set to {}", next.as_str());
            next
        }
        Err(e) => {
            log::error!("theme preference write failed, keeping {}: {e}", current.as_str());
            current
        }
    }
}

/// Replace the `<body>` class list with the theme's classes.
pub fn apply(theme: ThemePreference) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.set_class_name(theme.body_class());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
