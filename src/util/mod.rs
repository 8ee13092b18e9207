//! Shared utilities for the editor.
//!
//! Hex color parsing/formatting and the string case helpers used by the DOM
//! wrapper.

pub mod color;
pub mod naming;
