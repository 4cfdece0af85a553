//! Error types for record building.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Name collection failures get their own enum so name sources can be
//! implemented without depending on the builder.

use thiserror::Error;

/// The top-level error type for all record-building operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Input shape ---
    #[error(
        "Length of values and attribute names must be equal: {values} value(s), {names} name(s)"
    )]
    LengthMismatch { values: usize, names: usize },

    // --- Sanitizer guard ---
    #[error("Sanitized name '{name}' at index {index} is not a valid identifier")]
    InvalidIdentifier { index: usize, name: String },

    // --- Name collection ---
    #[error("Name source error: {0}")]
    NameSource(#[from] NameSourceError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameSourceError {
    #[error("I/O failure while collecting a name: {0}")]
    Io(String),

    #[error("Name source ran out of names at index {index}")]
    Exhausted { index: usize },
}

impl From<std::io::Error> for NameSourceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_displays_both_counts() {
        let err = Error::LengthMismatch {
            values: 2,
            names: 1,
        };
        assert!(err.to_string().contains("2 value(s)"));
        assert!(err.to_string().contains("1 name(s)"));
    }

    #[test]
    fn name_source_error_wraps_into_error() {
        let err: Error = NameSourceError::Exhausted { index: 3 }.into();
        assert!(matches!(err, Error::NameSource(_)));
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn io_error_converts_to_name_source_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = NameSourceError::from(io);
        assert_eq!(err, NameSourceError::Io("pipe closed".into()));
    }
}
