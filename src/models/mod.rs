//! Models module for the fret position optimizer
//!
//! Tunings, pitch inputs, and the positions the optimizer produces.

pub mod pitch;
pub mod position;
pub mod tuning;

// Re-export commonly used types
pub use pitch::PitchInput;
pub use position::{AssignedPosition, Candidate, OptimizerState, TabNote};
pub use tuning::{Tuning, STRING_COUNT};
