//! Pitch inputs and conversions
//!
//! The optimizer works on integer MIDI-style pitch numbers. Frequencies in Hz
//! and note names are converted to pitch numbers at the boundary.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::PitchParseError;
use crate::utils::pitch_utils::{accidental_offset, letter_semitones, octave_of, pitch_class_name};

/// Letter, accidental, octave. Accidental and octave are validated separately
/// so errors can say which part was wrong.
static NOTE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z])([^\d-]*)(-?\d+)?$").expect("note name regex is valid"));

/// One note of an input line, declared by the caller as a pitch number or a
/// frequency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PitchInput {
    Number(i32),
    Frequency(f64),
}

impl PitchInput {
    /// Resolve to a pitch number; `None` when a frequency has no pitch
    pub fn to_pitch_number(self, reference_hz: f64, reference_pitch: i32) -> Option<i32> {
        match self {
            PitchInput::Number(pitch) => Some(pitch),
            PitchInput::Frequency(hz) => frequency_to_pitch(hz, reference_hz, reference_pitch),
        }
    }
}

impl From<i32> for PitchInput {
    fn from(pitch: i32) -> Self {
        PitchInput::Number(pitch)
    }
}

/// Convert a frequency to the nearest pitch number.
///
/// `reference_pitch + round(12 * log2(hz / reference_hz))`, rounding half
/// away from zero. Returns `None` for zero, negative or non-finite input, or
/// when the result does not fit a pitch number.
pub fn frequency_to_pitch(hz: f64, reference_hz: f64, reference_pitch: i32) -> Option<i32> {
    if !hz.is_finite() || hz <= 0.0 || !reference_hz.is_finite() || reference_hz <= 0.0 {
        return None;
    }
    let semitones = (12.0 * (hz / reference_hz).log2()).round();
    if semitones.abs() > f64::from(i32::MAX) {
        return None;
    }
    reference_pitch.checked_add(semitones as i32)
}

/// Frequency in Hz of a pitch number under the given reference
pub fn pitch_to_frequency(pitch: i32, reference_hz: f64, reference_pitch: i32) -> f64 {
    reference_hz * 2f64.powf(f64::from(pitch - reference_pitch) / 12.0)
}

/// Parse a scientific note name ("E2", "F#3", "Bb-1") into a pitch number
pub fn parse_note_name(name: &str) -> Result<i32, PitchParseError> {
    let name = name.trim();
    let first = name.chars().next().ok_or(PitchParseError::Empty)?;
    let letter = letter_semitones(first).ok_or_else(|| PitchParseError::InvalidLetter(name.to_string()))?;

    let caps = NOTE_NAME
        .captures(name)
        .ok_or_else(|| PitchParseError::InvalidOctave(name.to_string()))?;

    let accidental = caps.get(2).map_or("", |m| m.as_str());
    let offset = accidental_offset(accidental)
        .ok_or_else(|| PitchParseError::InvalidAccidental(name.to_string()))?;

    let octave: i32 = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| PitchParseError::InvalidOctave(name.to_string()))?;

    octave
        .checked_add(1)
        .and_then(|o| o.checked_mul(12))
        .and_then(|base| base.checked_add(letter + offset))
        .ok_or_else(|| PitchParseError::InvalidOctave(name.to_string()))
}

/// Sharp-spelled scientific name of a pitch number (61 → "C#4")
pub fn note_name(pitch: i32) -> String {
    format!("{}{}", pitch_class_name(pitch), octave_of(pitch))
}
