//! Crate-level error types.
//!
//! Camera manipulation itself never fails; errors only come from loading
//! options and running the host window.

use std::fmt;

/// Errors produced by the viewcam crate.
#[derive(Debug)]
pub enum ViewcamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
}

impl fmt::Display for ViewcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for ViewcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = ViewcamError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "preset.toml",
        ));
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
    }

    #[test]
    fn message_errors_have_no_source() {
        let err = ViewcamError::Viewer("no display".into());
        assert_eq!(err.to_string(), "viewer error: no display");
        assert!(err.source().is_none());
    }
}
