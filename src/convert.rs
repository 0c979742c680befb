//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use crate::config::{ClimatologyToml, IoConfig};

use climtrend_climatology::ClimatologyConfig;
use climtrend_io::ReaderConfig;

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoConfig) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_time_column(&io.time_column)
        .with_temp_column(&io.temp_column);
    cfg.validate().context("invalid [io] configuration")?;
    Ok(cfg)
}

/// Builds a [`ClimatologyConfig`] from the TOML climatology configuration.
pub fn build_climatology_config(clim: &ClimatologyToml) -> Result<ClimatologyConfig> {
    let cfg = ClimatologyConfig::default()
        .with_threshold_temp(clim.threshold_temp)
        .with_baseline(clim.baseline_start_year, clim.baseline_end_year)
        .with_hot_threshold(clim.hot_threshold)
        .with_cold_threshold(clim.cold_threshold)
        .with_smoothing_radius(clim.smoothing_radius);
    cfg.validate().context("invalid [climatology] configuration")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_config_columns() {
        let io = IoConfig {
            time_column: "date".to_string(),
            ..IoConfig::default()
        };
        let cfg = build_reader_config(&io).unwrap();
        assert_eq!(cfg.time_column(), "date");
        assert_eq!(cfg.temp_column(), "Ktemp");
    }

    #[test]
    fn test_reader_config_rejects_duplicate_columns() {
        let io = IoConfig {
            time_column: "t".to_string(),
            temp_column: "t".to_string(),
            ..IoConfig::default()
        };
        assert!(build_reader_config(&io).is_err());
    }

    #[test]
    fn test_climatology_config_roundtrip() {
        let clim = ClimatologyToml {
            threshold_temp: 57.0,
            smoothing_radius: 5,
            ..ClimatologyToml::default()
        };
        let cfg = build_climatology_config(&clim).unwrap();
        assert_eq!(cfg.threshold_temp(), 57.0);
        assert_eq!(cfg.smoothing_radius(), 5);
        assert_eq!(cfg.baseline_start_year(), 1951);
    }

    #[test]
    fn test_climatology_config_rejects_reversed_baseline() {
        let clim = ClimatologyToml {
            baseline_start_year: 1990,
            baseline_end_year: 1960,
            ..ClimatologyToml::default()
        };
        let err = build_climatology_config(&clim).unwrap_err();
        assert!(format!("{err:#}").contains("invalid baseline window"));
    }
}
