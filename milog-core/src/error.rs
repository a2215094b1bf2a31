use std::fmt;
use thiserror::Error;

/// Track collections a derivation rule can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackType {
    Audio,
    Video,
    Subtitle,
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackType::Audio => write!(f, "audio"),
            TrackType::Video => write!(f, "video"),
            TrackType::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// Custom error types for milog
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The scanned text contained no General section at all.
    #[error("no MediaInfo report found")]
    NoReportFound,

    /// A field a derivation rule requires is absent from its section.
    #[error("missing field: {0}")]
    MissingField(String),

    /// The requested track collection is empty.
    #[error("no {0} tracks in file")]
    NoTrack(TrackType),

    /// A field is present but its value matches no known classification.
    #[error("unrecognized {field} value: {value}")]
    UnrecognizedValue { field: String, value: String },
}

impl CoreError {
    pub(crate) fn missing(field: &str) -> Self {
        CoreError::MissingField(field.to_string())
    }

    pub(crate) fn unrecognized(field: &str, value: &str) -> Self {
        CoreError::UnrecognizedValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result type for milog operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
