//! Detector configuration.
//!
//! One immutable record constructed per invocation and read-only
//! thereafter, never ambient state. Every field has a deployment
//! default and can be overridden through a JSON config file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analysis::types::{DetectionError, DetectionResult};
use crate::models::TimeUnit;

/// Tone span detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Samples per comparison window.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Minimum similarity score counted as a match (dimensionless,
    /// inclusive boundary).
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Minimum span length to keep, in milliseconds.
    #[serde(default = "default_length_threshold")]
    pub length_threshold_ms: i64,

    /// Optional processing stop point, in milliseconds. Unset scans
    /// the whole stream.
    #[serde(default)]
    pub stop_at_ms: Option<u64>,

    /// Output unit for span bounds.
    #[serde(default)]
    pub time_unit: TimeUnit,
}

fn default_sample_size() -> usize {
    512
}

fn default_tolerance() -> f64 {
    1.0
}

fn default_length_threshold() -> i64 {
    2000
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            tolerance: default_tolerance(),
            length_threshold_ms: default_length_threshold(),
            stop_at_ms: None,
            time_unit: TimeUnit::default(),
        }
    }
}

impl DetectorConfig {
    /// Validate the configuration before any scanning state exists.
    pub fn validate(&self) -> DetectionResult<()> {
        if self.sample_size == 0 {
            return Err(DetectionError::InvalidConfig(
                "sample_size must be positive".to_string(),
            ));
        }
        if !self.tolerance.is_finite() {
            return Err(DetectionError::InvalidConfig(format!(
                "tolerance must be finite, got {}",
                self.tolerance
            )));
        }
        if self.length_threshold_ms < 0 {
            return Err(DetectionError::InvalidConfig(format!(
                "length_threshold_ms must be >= 0, got {}",
                self.length_threshold_ms
            )));
        }
        Ok(())
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> DetectionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> DetectionResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from `path` when it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> DetectionResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
