//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
///
/// The interactive core itself is infallible: a pick miss, an unknown key,
/// or a malformed event is a normal outcome, not an error. Only the
/// configuration surface (TOML load/save) can fail.
#[derive(Debug)]
pub enum VantageError {
    /// Failed to read or write a configuration file.
    ConfigIo(std::io::Error),
    /// TOML configuration parsing failure.
    ConfigParse(String),
    /// TOML configuration serialization failure.
    ConfigSerialize(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigIo(e) => write!(f, "config I/O error: {e}"),
            Self::ConfigParse(msg) => {
                write!(f, "config parse error: {msg}")
            }
            Self::ConfigSerialize(msg) => {
                write!(f, "config serialize error: {msg}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigIo(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::ConfigIo(e)
    }
}
