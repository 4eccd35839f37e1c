//! Error types for the booking directory

use thiserror::Error;

/// Result type alias for shared booking operations
pub type Result<T> = std::result::Result<T, BookingError>;

/// Errors raised when parsing the shared vocabulary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    #[error("Unknown state code: {0}")]
    UnknownState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BookingError::UnknownGenre("Polka".to_string());
        assert_eq!(err.to_string(), "Unknown genre: Polka");

        let err = BookingError::UnknownState("ZZ".to_string());
        assert_eq!(err.to_string(), "Unknown state code: ZZ");
    }
}
