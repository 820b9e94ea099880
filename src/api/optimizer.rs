//! Fret optimizer operations for the WASM API
//!
//! Every function takes an optional config object
//! (`{ tuning, maxFret, maxComfortableStretch, referenceHz, referencePitch }`);
//! omitted fields fall back to standard tuning and the default limits.
//! `FretOptimizer` lets the UI build the optimizer once and reuse it.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{optimizer_from_js, serialize};
use crate::api::types::TuningPresetInfo;
use crate::models::position::OptimizerState;
use crate::optimizer::PositionOptimizer;
use crate::{wasm_info, wasm_log, wasm_warn};

// ============================================================================
// Single Notes
// ============================================================================

/// Find the best string/fret for one pitch
///
/// # Parameters
/// * `pitch` - MIDI-style pitch number
/// * `previous_fret`, `previous_string` - last placed note, -1 if none
///
/// # Returns
/// `{ string, fret, unreachable }`
#[wasm_bindgen(js_name = findOptimalPosition)]
pub fn find_optimal_position(
    pitch: i32,
    previous_fret: i32,
    previous_string: i32,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let optimizer = optimizer_from_js(config)?;
    let position = optimizer.find_optimal_position(pitch, previous_fret, previous_string);
    serialize(&position, "Failed to serialize position")
}

/// All playable positions for one pitch, best first
///
/// # Returns
/// Array of `{ string, fret, score }`
#[wasm_bindgen(js_name = rankCandidates)]
pub fn rank_candidates(
    pitch: i32,
    previous_fret: i32,
    previous_string: i32,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let optimizer = optimizer_from_js(config)?;
    let state = OptimizerState::from_sentinels(previous_fret, previous_string);
    let candidates = optimizer.rank_candidates(pitch, &state);
    serialize(&candidates, "Failed to serialize candidates")
}

// ============================================================================
// Whole Riffs
// ============================================================================

/// Place a riff given as MIDI pitch numbers
///
/// # Returns
/// Array of `{ pitch, string, fret, unreachable }`, one per input note
#[wasm_bindgen(js_name = optimizeRiff)]
pub fn optimize_riff(pitches: &[i32], config: JsValue) -> Result<JsValue, JsValue> {
    let optimizer = optimizer_from_js(config)?;
    optimize_riff_with(&optimizer, pitches)
}

/// Place a riff given as frequencies in Hz
///
/// # Returns
/// Array of `{ pitch, string, fret, unreachable }`; `pitch` is the rounded
/// pitch number, or null for a frequency with no pitch
#[wasm_bindgen(js_name = optimizeFrequencies)]
pub fn optimize_frequencies(frequencies: &[f64], config: JsValue) -> Result<JsValue, JsValue> {
    let optimizer = optimizer_from_js(config)?;
    optimize_frequencies_with(&optimizer, frequencies)
}

/// Built-in tunings for the tuning picker
#[wasm_bindgen(js_name = tuningPresets)]
pub fn tuning_presets() -> Result<JsValue, JsValue> {
    serialize(&TuningPresetInfo::all(), "Failed to serialize tuning presets")
}

fn optimize_riff_with(optimizer: &PositionOptimizer, pitches: &[i32]) -> Result<JsValue, JsValue> {
    wasm_info!("optimizeRiff called with {} notes", pitches.len());

    let notes = optimizer.resolve_riff(pitches);
    let unreachable = notes.iter().filter(|n| n.unreachable).count();
    if unreachable > 0 {
        wasm_warn!("{} of {} notes are out of range", unreachable, notes.len());
    }

    wasm_log!("  Optimized {} note positions", notes.len());
    serialize(&notes, "Failed to serialize riff")
}

fn optimize_frequencies_with(optimizer: &PositionOptimizer, frequencies: &[f64]) -> Result<JsValue, JsValue> {
    wasm_info!("optimizeFrequencies called with {} notes", frequencies.len());

    let notes = optimizer.resolve_frequency_sequence(frequencies);
    let unreachable = notes.iter().filter(|n| n.unreachable).count();
    if unreachable > 0 {
        wasm_warn!("{} of {} notes are out of range", unreachable, notes.len());
    }

    wasm_log!("  Optimized {} note positions", notes.len());
    serialize(&notes, "Failed to serialize riff")
}

// ============================================================================
// Reusable Optimizer
// ============================================================================

/// An optimizer built once from a config and reused across riffs
#[wasm_bindgen]
pub struct FretOptimizer {
    inner: PositionOptimizer,
}

#[wasm_bindgen]
impl FretOptimizer {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FretOptimizer, JsValue> {
        let inner = optimizer_from_js(config)?;
        wasm_log!(
            "FretOptimizer created: tuning {:?}, max fret {}",
            inner.config().tuning.note_names(),
            inner.config().max_fret
        );
        Ok(FretOptimizer { inner })
    }

    #[wasm_bindgen(js_name = findOptimalPosition)]
    pub fn find_optimal_position(&self, pitch: i32, previous_fret: i32, previous_string: i32) -> Result<JsValue, JsValue> {
        let position = self.inner.find_optimal_position(pitch, previous_fret, previous_string);
        serialize(&position, "Failed to serialize position")
    }

    #[wasm_bindgen(js_name = optimizeRiff)]
    pub fn optimize_riff(&self, pitches: &[i32]) -> Result<JsValue, JsValue> {
        optimize_riff_with(&self.inner, pitches)
    }

    #[wasm_bindgen(js_name = optimizeFrequencies)]
    pub fn optimize_frequencies(&self, frequencies: &[f64]) -> Result<JsValue, JsValue> {
        optimize_frequencies_with(&self.inner, frequencies)
    }

    /// Tab labels for the configured strings, low string first
    #[wasm_bindgen(js_name = stringNames)]
    pub fn string_names(&self) -> Vec<String> {
        self.inner.config().tuning.string_names()
    }
}
