//! Crate-level error types.

use std::fmt;

use crate::dom::DomError;

/// Errors produced by the scenekit crate.
#[derive(Debug)]
pub enum EditorError {
    /// A DOM operation was rejected by the backend.
    Dom(DomError),
    /// Registering input listeners with the platform failed.
    Subscribe(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dom(e) => write!(f, "DOM error: {e}"),
            Self::Subscribe(msg) => {
                write!(f, "failed to subscribe to input: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dom(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DomError> for EditorError {
    fn from(e: DomError) -> Self {
        Self::Dom(e)
    }
}

impl From<std::io::Error> for EditorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
