use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum AlignError {
    /// A penalty weight was negative. Holds the name of the weight and the rejected value.
    NegativePenalty { weight: &'static str, value: i64 },

    /// A penalty weight does not fit in 32 bits
    PenaltyTooLarge { weight: &'static str, value: i64 },

    /// The gap marker is a letter or digit and would be indistinguishable from a symbol
    InvalidGapMarker(char),

    /// A byte outside of `[a-z0-9]` (after lowercasing) was classified
    InvalidSymbol(u8),

    /// Strict sanitization removed every character from a non-empty input
    EmptyAfterSanitizing(String),

    /// A sequence pair file contained a record without a partner
    UnpairedRecord(String),

    /// A sequence name or sequence was not valid UTF-8
    InvalidUtf8,

    /// Error variant when we couldn't read from a file
    FileReadError { source: io::Error },

    /// Error variant when JSON (de)serialization failed
    SerializationError { source: serde_json::Error },

    /// Other IO errors
    IOError(io::Error),
}

impl Error for AlignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::FileReadError { ref source } => Some(source),
            Self::SerializationError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for AlignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<serde_json::Error> for AlignError {
    fn from(value: serde_json::Error) -> Self {
        Self::SerializationError {
            source: value
        }
    }
}

impl From<std::str::Utf8Error> for AlignError {
    fn from(_: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8
    }
}

impl Display for AlignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::NegativePenalty { weight, value } =>
                write!(f, "The {weight} penalty must be non-negative (got {value})!"),
            Self::PenaltyTooLarge { weight, value } =>
                write!(f, "The {weight} penalty must be at most {} (got {value})!", u32::MAX),
            Self::InvalidGapMarker(marker) =>
                write!(f, "Gap marker {marker:?} must not be a letter or digit!"),
            Self::InvalidSymbol(byte) =>
                write!(f, "Character {:?} is not an ASCII letter or digit!", byte as char),
            Self::EmptyAfterSanitizing(ref raw) =>
                write!(f, "Input {raw:?} contains no letters or digits!"),
            Self::UnpairedRecord(ref name) =>
                write!(f, "Record '{name}' has no partner sequence (odd number of records)!"),
            Self::InvalidUtf8 =>
                write!(f, "Input is not valid UTF-8!"),
            Self::FileReadError { source: _ } =>
                write!(f, "Could not read from file!"),
            Self::SerializationError { source: _ } =>
                write!(f, "Could not (de)serialize JSON data!"),
            Self::IOError(ref err) =>
                err.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AlignError;

    #[test]
    fn test_negative_penalty_message() {
        let err = AlignError::NegativePenalty { weight: "gap", value: -2 };
        assert_eq!(err.to_string(), "The gap penalty must be non-negative (got -2)!");
    }

    #[test]
    fn test_oversized_penalty_message() {
        let err = AlignError::PenaltyTooLarge { weight: "gap", value: 5_000_000_000 };
        assert_eq!(err.to_string(), "The gap penalty must be at most 4294967295 (got 5000000000)!");

        let err = AlignError::InvalidGapMarker('b');
        assert_eq!(err.to_string(), "Gap marker 'b' must not be a letter or digit!");
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;

        let err = AlignError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "missing");
    }
}
