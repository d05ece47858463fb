//! Error types for Kinograph.
//!
//! Graph queries never fail: an unknown name or a disconnected graph is an
//! empty result. Errors come from the edges of the system, where text is
//! parsed, configuration is checked, or files are read and written.

use thiserror::Error;

/// Result alias using the Kinograph [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the source.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Builds a [`Error::Parse`] for the given line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = Error::parse(12, "year is not a number");
        assert_eq!(
            err.to_string(),
            "parse error on line 12: year is not a number"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
