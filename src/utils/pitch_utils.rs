//! Shared pitch utility functions
//!
//! Semitone lookups for note letters and accidentals, used when parsing
//! tuning note names such as "F#3" and when labelling strings.

/// Semitone offset of a note letter above C (case-insensitive)
pub fn letter_semitones(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Parse accidental symbol into a semitone offset
pub fn accidental_offset(symbol: &str) -> Option<i32> {
    match symbol {
        "" => Some(0),
        "#" | "♯" | "s" => Some(1),
        "##" | "x" | "ss" => Some(2),
        "b" | "♭" => Some(-1),
        "bb" => Some(-2),
        _ => None,
    }
}

/// Sharp-spelled name of a pitch class (0 = C)
pub fn pitch_class_name(pitch_class: i32) -> &'static str {
    const NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
    NAMES[pitch_class.rem_euclid(12) as usize]
}

/// Octave number of a MIDI-style pitch (60 = C4)
pub fn octave_of(pitch: i32) -> i32 {
    pitch.div_euclid(12) - 1
}
