//! Utility modules for the fret position optimizer

pub mod pitch_utils;
