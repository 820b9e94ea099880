//! Fret Optimizer WASM API
//!
//! This module provides the JavaScript-facing API for the fret position
//! optimizer.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization and config decoding
//! - `types`: Result types shared across API functions
//! - `optimizer`: Position lookup and riff optimization

pub mod helpers;
pub mod types;
pub mod optimizer;

pub use optimizer::{find_optimal_position, rank_candidates, optimize_riff, optimize_frequencies, tuning_presets, FretOptimizer};
