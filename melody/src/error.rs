//! Error types for melody validation and rendering.

use thiserror::Error;

/// Result type alias for melody operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for melody operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Pitch identifier outside the defined range and not silence.
    #[error("unknown pitch: {0}")]
    UnknownPitch(String),

    /// Beat count that is zero, negative or not finite.
    #[error("invalid duration at event {index}: {beats} beats")]
    InvalidDuration { index: usize, beats: f64 },

    /// Wire scale factor that is zero, negative or not finite.
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(f64),

    /// IO error while writing rendered audio.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an unknown pitch error from a numeric wire code.
    pub fn unknown_code(code: u8) -> Self {
        Error::UnknownPitch(format!("0x{:02x}", code))
    }

    /// Returns true if this is an input validation error.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDuration { index: 2, beats: -1.0 };
        assert_eq!(err.to_string(), "invalid duration at event 2: -1 beats");

        let err = Error::unknown_code(0xd4);
        assert_eq!(err.to_string(), "unknown pitch: 0xd4");
    }

    #[test]
    fn test_error_is_validation() {
        assert!(Error::InvalidScaleFactor(0.0).is_validation());
        let io = Error::from(std::io::Error::other("disk full"));
        assert!(!io.is_validation());
    }
}
