//! # Engine Settings
//!
//! Tunable limits and display precision for the calculator engine.
//! Settings are plain JSON; any key left out takes its default, so an empty
//! object `{}` is a valid settings file.
//!
//! ```json
//! {
//!   "max_risk_pct": 2.0,
//!   "max_loss_pct": 10.0,
//!   "number_digits": 2
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Limits and precision applied by every calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Upper bound (inclusive) for the per-trade risk percentage
    pub max_risk_pct: f64,

    /// Upper bound (inclusive) for daily/weekly loss-limit percentages
    pub max_loss_pct: f64,

    /// Decimals for non-currency outputs (ratios, ticks, percentages)
    pub number_digits: usize,

    /// Decimals for lot sizes
    pub lot_digits: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            max_risk_pct: 100.0,
            max_loss_pct: 100.0,
            number_digits: 2,
            lot_digits: 2,
        }
    }
}

impl EngineSettings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CalcError::config_error(path.display().to_string(), e.to_string()))?;

        let settings: EngineSettings = serde_json::from_str(&contents).map_err(|e| {
            CalcError::config_error(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;
        settings.validate().map_err(|e| CalcError::config_error(path.display().to_string(), e.to_string()))?;

        tracing::debug!(path = %path.display(), ?settings, "loaded engine settings");
        Ok(settings)
    }

    /// Percentage caps must lie in (0, 100].
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [("max_risk_pct", self.max_risk_pct), ("max_loss_pct", self.max_loss_pct)] {
            if !value.is_finite() || value <= 0.0 || value > 100.0 {
                return Err(CalcError::out_of_range(
                    field,
                    value.to_string(),
                    "Percentage cap must be greater than 0 and at most 100",
                ));
            }
        }
        Ok(())
    }
}
