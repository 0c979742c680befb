//! Serializable pipeline result.

use serde::Serialize;

use crate::anomaly::SeasonalSummary;
use crate::config::ClimatologyConfig;
use crate::cycle::AnnualCyclePoint;
use crate::error::ClimatologyError;
use crate::extremes::ExtremeDayStats;
use crate::monthly::MonthlyClimatology;
use crate::trend::TrendSummary;

/// Parameters a summary was computed with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSummary {
    pub threshold_temp: f64,
    pub baseline_start_year: i32,
    pub baseline_end_year: i32,
    pub hot_threshold: f64,
    pub cold_threshold: f64,
    pub smoothing_radius: usize,
}

impl From<&ClimatologyConfig> for ConfigSummary {
    fn from(config: &ClimatologyConfig) -> Self {
        Self {
            threshold_temp: config.threshold_temp(),
            baseline_start_year: config.baseline_start_year(),
            baseline_end_year: config.baseline_end_year(),
            hot_threshold: config.hot_threshold(),
            cold_threshold: config.cold_threshold(),
            smoothing_radius: config.smoothing_radius(),
        }
    }
}

/// Every statistic derived from one input set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateSummary {
    pub config: ConfigSummary,
    /// Readings that survived normalization.
    pub n_readings: usize,
    pub monthly: MonthlyClimatology,
    pub trends: TrendSummary,
    pub seasonal: SeasonalSummary,
    pub extremes: Vec<ExtremeDayStats>,
    pub annual_cycle: Vec<AnnualCyclePoint>,
}

impl ClimateSummary {
    /// Pretty-printed JSON. Missing values are written as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, ClimatologyError> {
        serde_json::to_string_pretty(self).map_err(|e| ClimatologyError::Serialization {
            reason: e.to_string(),
        })
    }
}
