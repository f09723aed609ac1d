use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QpError;

fn default_max_pawns() -> usize {
    2
}

fn default_verify_counts() -> bool {
    true
}

/// Bulk sweep configuration, read from JSON.
///
/// ```json
/// { "max_pawns": 2, "verify_counts": true, "report_draws": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Sweep every pawn count from 0 up to and including this one.
    #[serde(default = "default_max_pawns")]
    pub max_pawns: usize,

    /// Check the bucket sizes that are known in closed form (0 and 1 pawn).
    #[serde(default = "default_verify_counts")]
    pub verify_counts: bool,

    /// Include the black-to-move draws of every swept pawn count in the report.
    #[serde(default)]
    pub report_draws: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_pawns: default_max_pawns(),
            verify_counts: default_verify_counts(),
            report_draws: false,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), QpError> {
        if self.max_pawns > 8 {
            return Err(QpError::InvalidConfig {
                reason: format!("max_pawns must be <= 8, got {}", self.max_pawns),
            });
        }
        Ok(())
    }

    pub fn from_json_str(text: &str) -> Result<Self, QpError> {
        let cfg: SweepConfig =
            serde_json::from_str(text).map_err(|e| QpError::InvalidConfig {
                reason: e.to_string(),
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, QpError> {
        let text = std::fs::read_to_string(path).map_err(|e| QpError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }
}
