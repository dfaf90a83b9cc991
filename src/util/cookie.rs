//! `document.cookie` string codec.
//!
//! Parsing and formatting are kept free of browser types so the cookie
//! rules (encoding, first-match lookup, path and lifetime attributes) can be
//! exercised by native tests.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::{Cookie, SameSite};
use time::Duration;

/// Attributes attached to a cookie write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime in days; `None` writes a session cookie.
    pub expires_in_days: Option<u32>,
    pub path: String,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            expires_in_days: None,
            path: "/".to_owned(),
        }
    }
}

impl CookieOptions {
    pub fn expiring_in_days(days: u32) -> Self {
        Self {
            expires_in_days: Some(days),
            ..Self::default()
        }
    }
}

/// Look up `key` in a `document.cookie` string.
///
/// Pairs that fail to parse are skipped. The first matching pair wins, which
/// matches how browsers order a more specific path ahead of a broader one.
pub fn read_cookie(header: &str, key: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == key)
        .map(|c| c.value_trimmed().to_owned())
}

/// Build the assignment string written to `document.cookie`.
pub fn format_cookie(key: &str, value: &str, options: &CookieOptions) -> String {
    let mut builder = Cookie::build((key.to_owned(), value.to_owned()))
        .path(options.path.clone())
        .same_site(SameSite::Lax);
    if let Some(days) = options.expires_in_days {
        builder = builder.max_age(Duration::days(i64::from(days)));
    }
    builder.build().encoded().to_string()
}
