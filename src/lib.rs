//! Fret Position Optimizer WASM Module
//!
//! Assigns each note of a melodic line to a string and fret on a six-string
//! guitar, favouring positions that keep the fretting hand close to where it
//! already is. The riff generator UI calls it through the `api` module.

pub mod errors;
pub mod models;
pub mod optimizer;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use errors::{ConfigError, PitchParseError};
pub use models::*;
pub use optimizer::{OptimizerConfig, PositionOptimizer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Fret optimizer WASM module initialized");
}
