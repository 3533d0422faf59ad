//! Error handling for nbs
//!
//! Every failure is terminal for the decode or encode pass that raised it.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Oldest Note Block Studio release whose save format this crate reads.
pub const MIN_SAVE_FORMAT_VERSION: &str = "3.6.0";

/// Result type alias for nbs operations
pub type Result<T> = std::result::Result<T, NbsError>;

/// Main error type for nbs operations
#[derive(Error, Debug)]
pub enum NbsError {
    // Format Errors
    #[error(
        "The file was saved in an older format (marker {marker}). \
         Please save it in Note Block Studio 3.6.0 or newer before importing."
    )]
    DeprecatedFormat { marker: i16 },

    #[error("Unexpected end of data")]
    UnexpectedEndOfData,

    #[error("Invalid string encoding: {0}")]
    InvalidEncoding(#[from] FromUtf8Error),

    #[error("Note index overflowed while decoding the note grid")]
    IndexOverflow,

    // Encode Errors
    #[error("Two notes share tick {tick} on layer {layer}")]
    DuplicateNote { tick: u32, layer: u32 },

    #[error("Jump from {from} to {to} does not fit in 16 bits")]
    JumpOverflow { from: i64, to: u32 },

    #[error("Too many instruments: {count} (maximum 255)")]
    TooManyInstruments { count: usize },

    #[error("Too many layers: {count} (maximum 65535)")]
    TooManyLayers { count: usize },

    #[error("Tempo {tempo} does not fit the stored range (-327.68 to 327.67 ticks/s)")]
    TempoOutOfRange { tempo: f64 },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<io::Error> for NbsError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            NbsError::UnexpectedEndOfData
        } else {
            NbsError::Io(err)
        }
    }
}

impl NbsError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            NbsError::DeprecatedFormat { .. } => "DEPRECATED_FORMAT",
            NbsError::UnexpectedEndOfData => "UNEXPECTED_END_OF_DATA",
            NbsError::InvalidEncoding(_) => "INVALID_ENCODING",
            NbsError::IndexOverflow => "INDEX_OVERFLOW",
            NbsError::DuplicateNote { .. } => "DUPLICATE_NOTE",
            NbsError::JumpOverflow { .. } => "JUMP_OVERFLOW",
            NbsError::TooManyInstruments { .. } => "TOO_MANY_INSTRUMENTS",
            NbsError::TooManyLayers { .. } => "TOO_MANY_LAYERS",
            NbsError::TempoOutOfRange { .. } => "TEMPO_OUT_OF_RANGE",
            NbsError::FileNotFound { .. } => "FILE_NOT_FOUND",
            NbsError::Io(_) => "IO_ERROR",
            NbsError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// True for errors raised while reading a stream rather than writing one
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            NbsError::DeprecatedFormat { .. }
                | NbsError::UnexpectedEndOfData
                | NbsError::InvalidEncoding(_)
                | NbsError::IndexOverflow
        )
    }
}
