use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level climtrend configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ClimtrendConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Climatology settings.
    #[serde(default)]
    pub climatology: ClimatologyToml,
}

impl ClimtrendConfig {
    /// Loads the TOML file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_time_column")]
    pub time_column: String,
    #[serde(default = "default_temp_column")]
    pub temp_column: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            time_column: default_time_column(),
            temp_column: default_temp_column(),
        }
    }
}

fn default_time_column() -> String {
    "time".to_string()
}
fn default_temp_column() -> String {
    "Ktemp".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClimatologyToml {
    #[serde(default = "default_threshold_temp")]
    pub threshold_temp: f64,
    #[serde(default = "default_baseline_start_year")]
    pub baseline_start_year: i32,
    #[serde(default = "default_baseline_end_year")]
    pub baseline_end_year: i32,
    #[serde(default = "default_hot_threshold")]
    pub hot_threshold: f64,
    #[serde(default = "default_cold_threshold")]
    pub cold_threshold: f64,
    #[serde(default = "default_smoothing_radius")]
    pub smoothing_radius: usize,
}

impl Default for ClimatologyToml {
    fn default() -> Self {
        Self {
            threshold_temp: default_threshold_temp(),
            baseline_start_year: default_baseline_start_year(),
            baseline_end_year: default_baseline_end_year(),
            hot_threshold: default_hot_threshold(),
            cold_threshold: default_cold_threshold(),
            smoothing_radius: default_smoothing_radius(),
        }
    }
}

fn default_threshold_temp() -> f64 {
    55.0
}
fn default_baseline_start_year() -> i32 {
    1951
}
fn default_baseline_end_year() -> i32 {
    1980
}
fn default_hot_threshold() -> f64 {
    90.0
}
fn default_cold_threshold() -> f64 {
    20.0
}
fn default_smoothing_radius() -> usize {
    3
}
