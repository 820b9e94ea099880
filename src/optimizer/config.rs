//! Optimizer configuration
//!
//! Built once (from defaults, a builder chain, or a JSON/YAML document) and
//! validated when the optimizer is constructed. Nothing mutates it afterwards.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::tuning::Tuning;

/// Highest fret considered reachable
pub const DEFAULT_MAX_FRET: u8 = 19;

/// Largest fret movement still treated as a comfortable stretch
pub const DEFAULT_MAX_COMFORTABLE_STRETCH: u8 = 4;

/// Frequency reference: A4 = 440 Hz
pub const DEFAULT_REFERENCE_HZ: f64 = 440.0;

/// Pitch number of the frequency reference (A4)
pub const DEFAULT_REFERENCE_PITCH: i32 = 69;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    pub tuning: Tuning,
    pub max_fret: u8,
    pub max_comfortable_stretch: u8,
    pub reference_hz: f64,
    pub reference_pitch: i32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            tuning: Tuning::standard(),
            max_fret: DEFAULT_MAX_FRET,
            max_comfortable_stretch: DEFAULT_MAX_COMFORTABLE_STRETCH,
            reference_hz: DEFAULT_REFERENCE_HZ,
            reference_pitch: DEFAULT_REFERENCE_PITCH,
        }
    }
}

impl OptimizerConfig {
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_max_fret(mut self, max_fret: u8) -> Self {
        self.max_fret = max_fret;
        self
    }

    pub fn with_max_comfortable_stretch(mut self, stretch: u8) -> Self {
        self.max_comfortable_stretch = stretch;
        self
    }

    pub fn with_reference(mut self, reference_hz: f64, reference_pitch: i32) -> Self {
        self.reference_hz = reference_hz;
        self.reference_pitch = reference_pitch;
        self
    }

    /// Check the parts not already guaranteed by their types
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reference_hz.is_finite() || self.reference_hz <= 0.0 {
            return Err(ConfigError::InvalidReference(self.reference_hz));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: OptimizerConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML config. Missing fields take defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: OptimizerConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Highest pitch any string can reach
    pub fn highest_reachable(&self) -> i32 {
        self.tuning.highest() + i32::from(self.max_fret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OptimizerConfig::default();
        assert_eq!(config.tuning, Tuning::standard());
        assert_eq!(config.max_fret, 19);
        assert_eq!(config.max_comfortable_stretch, 4);
        assert_eq!(config.reference_hz, 440.0);
        assert_eq!(config.reference_pitch, 69);
        assert_eq!(config.highest_reachable(), 83);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = OptimizerConfig::from_json(r#"{"tuning":"drop-d","maxFret":22}"#).unwrap();
        assert_eq!(config.tuning, Tuning::preset("drop-d").unwrap());
        assert_eq!(config.max_fret, 22);
        assert_eq!(config.max_comfortable_stretch, DEFAULT_MAX_COMFORTABLE_STRETCH);
    }

    #[test]
    fn test_from_json_rejects_short_tuning() {
        let err = OptimizerConfig::from_json(r#"{"tuning":[40,45,50,55,59]}"#).unwrap_err();
        match err {
            ConfigError::Parse(msg) => assert!(msg.contains("Tuning must have 6 strings, found 5")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "tuning: [E2, A2, D3, G3, B3, E4]\nmaxComfortableStretch: 5\n";
        let config = OptimizerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.tuning, Tuning::standard());
        assert_eq!(config.max_comfortable_stretch, 5);
    }

    #[test]
    fn test_invalid_reference_rejected() {
        let config = OptimizerConfig::default().with_reference(0.0, 69);
        assert_eq!(config.validate(), Err(ConfigError::InvalidReference(0.0)));
        assert!(OptimizerConfig::from_json(r#"{"referenceHz":-1.0}"#).is_err());
    }

    #[test]
    fn test_default_round_trip() {
        let json = serde_json::to_string(&OptimizerConfig::default()).unwrap();
        assert_eq!(OptimizerConfig::from_json(&json).unwrap(), OptimizerConfig::default());

        let yaml = serde_yaml::to_string(&OptimizerConfig::default()).unwrap();
        assert_eq!(OptimizerConfig::from_yaml(&yaml).unwrap(), OptimizerConfig::default());
    }
}
