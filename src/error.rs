//! Crate-level error types.

use std::fmt;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// A body was registered with invalid orbital parameters.
    BodyConfig(String),
    /// A body referenced a parent that is not in the catalog.
    UnknownParent(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BodyConfig(msg) => {
                write!(f, "body configuration error: {msg}")
            }
            Self::UnknownParent(name) => {
                write!(f, "unknown parent body: {name}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
