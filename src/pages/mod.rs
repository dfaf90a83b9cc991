//! Page modules for the shell body.
//!
//! ARCHITECTURE
//! ============
//! `App` renders exactly one of these below the header, chosen by the
//! current auth state.

pub mod login;
pub mod shell;
