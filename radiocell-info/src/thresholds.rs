//! Carrier-configurable signal level breakpoints.
//!
//! The level classifier maps a primary power measurement onto the shared
//! 0-4 scale using four ascending breakpoints per technology. The defaults
//! below are the platform defaults; carriers override them through a YAML
//! configuration file.
//!
//! A breakpoint table `[b1, b2, b3, b4]` classifies a measurement `v` as:
//! level 4 if `v >= b4`, level 3 if `v >= b3`, down to level 0 when `v`
//! falls below `b1`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signal::SignalLevel;

/// Default LTE RSRP breakpoints (dBm).
pub const DEFAULT_LTE_RSRP: [i32; 4] = [-128, -118, -108, -98];

/// Default NR SS-RSRP breakpoints (dBm).
pub const DEFAULT_NR_SS_RSRP: [i32; 4] = [-110, -90, -80, -65];

/// Default WCDMA RSCP breakpoints (dBm).
pub const DEFAULT_WCDMA_RSCP: [i32; 4] = [-115, -105, -95, -85];

/// Errors that can occur while loading a threshold configuration.
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// File I/O error
    #[error("Failed to read threshold configuration: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse threshold configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Breakpoints must be strictly ascending
    #[error("Threshold table `{table}` is not strictly ascending")]
    NotAscending {
        /// Name of the offending table
        table: &'static str,
    },
}

/// Signal level classification breakpoints.
///
/// Tables omitted from the configuration file keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalThresholds {
    /// LTE RSRP breakpoints (dBm)
    #[serde(default = "default_lte_rsrp")]
    pub lte_rsrp: [i32; 4],
    /// NR SS-RSRP breakpoints (dBm)
    #[serde(default = "default_nr_ss_rsrp")]
    pub nr_ss_rsrp: [i32; 4],
    /// WCDMA RSCP breakpoints (dBm)
    #[serde(default = "default_wcdma_rscp")]
    pub wcdma_rscp: [i32; 4],
}

fn default_lte_rsrp() -> [i32; 4] {
    DEFAULT_LTE_RSRP
}

fn default_nr_ss_rsrp() -> [i32; 4] {
    DEFAULT_NR_SS_RSRP
}

fn default_wcdma_rscp() -> [i32; 4] {
    DEFAULT_WCDMA_RSCP
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            lte_rsrp: DEFAULT_LTE_RSRP,
            nr_ss_rsrp: DEFAULT_NR_SS_RSRP,
            wcdma_rscp: DEFAULT_WCDMA_RSCP,
        }
    }
}

impl SignalThresholds {
    /// Loads thresholds from a YAML file and validates them.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ThresholdError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Parses thresholds from a YAML string and validates them.
    pub fn from_yaml_str(text: &str) -> Result<Self, ThresholdError> {
        let thresholds: Self = serde_yaml::from_str(text)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Checks that every table is strictly ascending.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        for (table, values) in [
            ("lte_rsrp", &self.lte_rsrp),
            ("nr_ss_rsrp", &self.nr_ss_rsrp),
            ("wcdma_rscp", &self.wcdma_rscp),
        ] {
            if !values.windows(2).all(|w| w[0] < w[1]) {
                return Err(ThresholdError::NotAscending { table });
            }
        }
        Ok(())
    }
}

/// Classifies a measurement against a four-breakpoint table.
///
/// Values below the lowest breakpoint classify as
/// [`SignalLevel::NoneOrUnknown`]; the caller is responsible for filtering
/// out-of-range measurements beforehand.
pub fn level_from_breakpoints(value: i32, breakpoints: &[i32; 4]) -> SignalLevel {
    if value >= breakpoints[3] {
        SignalLevel::Great
    } else if value >= breakpoints[2] {
        SignalLevel::Good
    } else if value >= breakpoints[1] {
        SignalLevel::Moderate
    } else if value >= breakpoints[0] {
        SignalLevel::Poor
    } else {
        SignalLevel::NoneOrUnknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_valid() {
        SignalThresholds::default().validate().unwrap();
    }

    #[test]
    fn test_level_from_breakpoints() {
        let table = DEFAULT_LTE_RSRP;
        assert_eq!(level_from_breakpoints(-98, &table), SignalLevel::Great);
        assert_eq!(level_from_breakpoints(-99, &table), SignalLevel::Good);
        assert_eq!(level_from_breakpoints(-108, &table), SignalLevel::Good);
        assert_eq!(level_from_breakpoints(-109, &table), SignalLevel::Moderate);
        assert_eq!(level_from_breakpoints(-118, &table), SignalLevel::Moderate);
        assert_eq!(level_from_breakpoints(-119, &table), SignalLevel::Poor);
        assert_eq!(level_from_breakpoints(-128, &table), SignalLevel::Poor);
        assert_eq!(
            level_from_breakpoints(-129, &table),
            SignalLevel::NoneOrUnknown
        );
    }

    #[test]
    fn test_yaml_partial_override() {
        let thresholds =
            SignalThresholds::from_yaml_str("nr_ss_rsrp: [-120, -100, -85, -70]\n").unwrap();
        assert_eq!(thresholds.nr_ss_rsrp, [-120, -100, -85, -70]);
        assert_eq!(thresholds.lte_rsrp, DEFAULT_LTE_RSRP);
        assert_eq!(thresholds.wcdma_rscp, DEFAULT_WCDMA_RSCP);
    }

    #[test]
    fn test_yaml_not_ascending_rejected() {
        let err = SignalThresholds::from_yaml_str("lte_rsrp: [-98, -118, -108, -128]\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ThresholdError::NotAscending { table: "lte_rsrp" }
        ));
    }

    #[test]
    fn test_yaml_duplicate_breakpoint_rejected() {
        assert!(SignalThresholds::from_yaml_str("wcdma_rscp: [-115, -115, -95, -85]\n").is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let thresholds = SignalThresholds {
            lte_rsrp: [-125, -115, -105, -95],
            ..SignalThresholds::default()
        };
        let text = serde_yaml::to_string(&thresholds).unwrap();
        assert_eq!(SignalThresholds::from_yaml_str(&text).unwrap(), thresholds);
    }
}
