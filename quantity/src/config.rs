/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::UnitError;
use crate::numeric::{BackendKind, MathContext, RoundingMode};

/// Scale of conversion factors that are derived by division (km/h, °F).
pub const DEFAULT_RULE_SCALE: u32 = 20;

/// Engine settings, read from JSON.
///
/// ```json
/// { "backend": "exact", "scale": 12, "rounding": "half_even" }
/// ```
///
/// Missing fields take their defaults.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct EngineConfig {
    /// Arithmetic backend override; probed when absent.
    pub backend: Option<BackendKind>,
    /// Fractional digits kept by inexact steps.
    pub scale: u32,
    pub rounding: RoundingMode,
    pub rule_scale: u32,
    pub autoscale_min: String,
    pub autoscale_max: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            backend: None,
            scale: MathContext::DEFAULT_SCALE,
            rounding: RoundingMode::default(),
            rule_scale: DEFAULT_RULE_SCALE,
            autoscale_min: "1".to_string(),
            autoscale_max: "1000".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(input: &str) -> Result<Self, UnitError> {
        serde_json::from_str(input)
            .map_err(|e| UnitError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, UnitError> {
        let input = fs::read_to_string(path).map_err(|e| {
            UnitError::Config(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&input)
    }

    pub fn math_context(&self) -> MathContext {
        MathContext::new(self.scale, self.rounding)
    }
}
