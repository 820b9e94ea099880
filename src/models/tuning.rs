//! Instrument tuning table
//!
//! A tuning lists the open pitch of each of the six strings, lowest string
//! first. String index 0 is the low E string in standard tuning.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::pitch::{note_name, parse_note_name};
use crate::utils::pitch_utils::pitch_class_name;

/// Number of strings on the instrument
pub const STRING_COUNT: usize = 6;

/// Standard guitar tuning: E2 A2 D3 G3 B3 E4
pub const STANDARD_TUNING: [i32; STRING_COUNT] = [40, 45, 50, 55, 59, 64];

/// Named tunings available to callers by name
pub const PRESETS: [(&str, [i32; STRING_COUNT]); 6] = [
    ("standard", STANDARD_TUNING),
    ("drop-d", [38, 45, 50, 55, 59, 64]),
    ("half-step-down", [39, 44, 49, 54, 58, 63]),
    ("dadgad", [38, 45, 50, 55, 57, 62]),
    ("open-g", [38, 43, 50, 55, 59, 62]),
    ("open-d", [38, 45, 50, 54, 57, 62]),
];

/// Open-string pitches of a six-string instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TuningSpec", into = "Vec<i32>")]
pub struct Tuning {
    open: [i32; STRING_COUNT],
}

/// Accepted config forms for a tuning: a preset name, pitch numbers, or
/// note names
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TuningSpec {
    Preset(String),
    Pitches(Vec<i32>),
    Names(Vec<String>),
}

impl Tuning {
    /// Build a tuning from open-string pitch numbers, low string first
    pub fn new(open: &[i32]) -> Result<Self, ConfigError> {
        let open: [i32; STRING_COUNT] = open.try_into().map_err(|_| ConfigError::WrongStringCount {
            expected: STRING_COUNT,
            found: open.len(),
        })?;

        if let Some((string, &pitch)) = open.iter().enumerate().find(|(_, p)| !(0..=127).contains(*p)) {
            return Err(ConfigError::OpenStringOutOfRange { string, pitch });
        }

        Ok(Tuning { open })
    }

    /// Standard guitar tuning
    pub const fn standard() -> Self {
        Tuning { open: STANDARD_TUNING }
    }

    /// Build a tuning from note names such as `["E2", "A2", "D3", "G3", "B3", "E4"]`
    pub fn from_note_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let pitches = names
            .iter()
            .map(|name| parse_note_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Tuning::new(&pitches)
    }

    /// Look up a named preset ("standard", "drop-d", ...), case-insensitive
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name.trim()))
            .map(|(_, open)| Tuning { open: *open })
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// All built-in presets with their names
    pub fn presets() -> impl Iterator<Item = (&'static str, Tuning)> {
        PRESETS.iter().map(|(name, open)| (*name, Tuning { open: *open }))
    }

    pub fn open_pitches(&self) -> &[i32; STRING_COUNT] {
        &self.open
    }

    pub fn open_pitch(&self, string: usize) -> Option<i32> {
        self.open.get(string).copied()
    }

    /// Lowest playable pitch (open low string)
    pub fn lowest(&self) -> i32 {
        self.open.iter().copied().min().unwrap_or_default()
    }

    /// Highest open-string pitch
    pub fn highest(&self) -> i32 {
        self.open.iter().copied().max().unwrap_or_default()
    }

    /// Note names of the open strings ("E2", "A2", ...)
    pub fn note_names(&self) -> Vec<String> {
        self.open.iter().map(|&p| note_name(p)).collect()
    }

    /// Tab labels for each string ("E", "A", "D", "G", "B", "e").
    ///
    /// The top string is lower-cased when it shares a letter with the bottom
    /// string so the two stay distinguishable in tablature.
    pub fn string_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.open.iter().map(|&p| pitch_class_name(p).to_string()).collect();
        let last = STRING_COUNT - 1;
        if names[last] == names[0] {
            names[last] = names[last].to_lowercase();
        }
        names
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::standard()
    }
}

impl TryFrom<TuningSpec> for Tuning {
    type Error = ConfigError;

    fn try_from(spec: TuningSpec) -> Result<Self, Self::Error> {
        match spec {
            TuningSpec::Preset(name) => Tuning::preset(&name),
            TuningSpec::Pitches(pitches) => Tuning::new(&pitches),
            TuningSpec::Names(names) => Tuning::from_note_names(names.as_slice()),
        }
    }
}

impl From<Tuning> for Vec<i32> {
    fn from(tuning: Tuning) -> Self {
        tuning.open.to_vec()
    }
}
