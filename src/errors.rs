//! Error types for optimizer configuration
//!
//! The optimizer itself never fails at runtime: a note that cannot be placed
//! is reported through the `unreachable` flag on its result. The errors here
//! cover malformed configuration, which is rejected when an optimizer or
//! tuning is constructed.

use thiserror::Error;

/// Configuration rejected at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Tuning does not list exactly one open pitch per string
    #[error("Tuning must have {expected} strings, found {found}")]
    WrongStringCount { expected: usize, found: usize },

    /// Open-string pitch outside the MIDI note range
    #[error("Open pitch {pitch} on string {string} is outside 0..=127")]
    OpenStringOutOfRange { string: usize, pitch: i32 },

    /// Frequency reference is not a positive, finite number of Hz
    #[error("Invalid reference frequency: {0} Hz")]
    InvalidReference(f64),

    /// No preset tuning by that name
    #[error("Unknown tuning preset: {0}")]
    UnknownPreset(String),

    /// A tuning note name could not be parsed
    #[error("Invalid note name in tuning: {0}")]
    InvalidNoteName(#[from] PitchParseError),

    /// JSON or YAML config could not be decoded
    #[error("Config parse failed: {0}")]
    Parse(String),
}

/// Note name parsing errors (e.g. "F#3")
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchParseError {
    #[error("empty note name")]
    Empty,

    #[error("'{0}' does not start with a note letter A-G")]
    InvalidLetter(String),

    #[error("'{0}' has an unrecognized accidental")]
    InvalidAccidental(String),

    #[error("'{0}' has a missing or invalid octave")]
    InvalidOctave(String),
}
