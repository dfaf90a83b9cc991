//! Reusable UI components.

pub mod header;
