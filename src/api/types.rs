//! Shared types for the WASM API

use crate::models::tuning::Tuning;

/// A named tuning as shown in the UI's tuning picker
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TuningPresetInfo {
    pub name: String,
    pub notes: Vec<String>,
    pub string_names: Vec<String>,
    pub pitches: Vec<i32>,
}

impl TuningPresetInfo {
    pub fn new(name: &str, tuning: &Tuning) -> Self {
        TuningPresetInfo {
            name: name.to_string(),
            notes: tuning.note_names(),
            string_names: tuning.string_names(),
            pitches: tuning.open_pitches().to_vec(),
        }
    }

    /// Every built-in preset, in picker order
    pub fn all() -> Vec<TuningPresetInfo> {
        Tuning::presets()
            .map(|(name, tuning)| TuningPresetInfo::new(name, &tuning))
            .collect()
    }
}
