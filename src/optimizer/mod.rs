//! Fret position optimizer
//!
//! - `config`: immutable optimizer settings and their defaults
//! - `scoring`: the pure per-candidate score
//! - `resolve`: greedy placement of single notes and whole lines

pub mod config;
pub mod resolve;
pub mod scoring;

pub use config::OptimizerConfig;
pub use resolve::PositionOptimizer;
