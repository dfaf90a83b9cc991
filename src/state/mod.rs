//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`) so the header and pages can
//! depend on small focused models. `shell` composes both for startup and
//! for driving the full sign-in/theme flow without a browser.

pub mod auth;
pub mod shell;
pub mod ui;
