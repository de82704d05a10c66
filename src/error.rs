//! Errors raised while configuring or building a table
//!
//! The per-frame simulation never fails; only setup does.

use std::fmt;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Settings file could not be read or written
    Io(std::io::Error),
    /// Settings JSON was malformed
    Json(serde_json::Error),
    /// Settings parsed but describe an unplayable table
    InvalidSettings(String),
    /// Entity dimensions must be strictly positive
    InvalidSize { width: f32, height: f32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "settings io: {e}"),
            Error::Json(e) => write!(f, "settings json: {e}"),
            Error::InvalidSettings(reason) => write!(f, "invalid settings: {reason}"),
            Error::InvalidSize { width, height } => {
                write!(f, "entity size must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
