//! End-to-end pipeline from raw rows to a [`ClimateSummary`].

use climtrend_io::RawRow;
use tracing::{debug, info};

use crate::anomaly::build_seasonal;
use crate::config::ClimatologyConfig;
use crate::cycle::build_annual_cycle;
use crate::error::ClimatologyError;
use crate::extremes::classify_extremes;
use crate::monthly::build_monthly;
use crate::output::{ClimateSummary, ConfigSummary};
use crate::reading::{Reading, normalize};
use crate::trend::build_trends;

/// Normalizes `rows` and derives every summary from the surviving readings.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or no row holds a valid
/// date and temperature.
#[tracing::instrument(skip_all, fields(n_rows = rows.len()))]
pub fn summarize(
    rows: &[RawRow],
    config: &ClimatologyConfig,
) -> Result<ClimateSummary, ClimatologyError> {
    config.validate()?;
    let readings = normalize(rows);
    debug!(
        kept = readings.len(),
        discarded = rows.len() - readings.len(),
        "rows normalized"
    );
    if readings.is_empty() {
        return Err(ClimatologyError::NoUsableData {
            total_rows: rows.len(),
        });
    }
    summarize_readings(&readings, config)
}

/// Derives every summary from already normalized readings.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or `readings` is empty.
#[tracing::instrument(skip_all, fields(n_readings = readings.len()))]
pub fn summarize_readings(
    readings: &[Reading],
    config: &ClimatologyConfig,
) -> Result<ClimateSummary, ClimatologyError> {
    config.validate()?;
    if readings.is_empty() {
        return Err(ClimatologyError::NoUsableData { total_rows: 0 });
    }

    let monthly = build_monthly(readings);
    let trends = build_trends(readings, config.threshold_temp());
    let seasonal = build_seasonal(readings, config);
    let extremes = classify_extremes(readings, config.hot_threshold(), config.cold_threshold());
    let annual_cycle = build_annual_cycle(readings, config.smoothing_radius());

    info!(
        years = trends.yearly.len(),
        decades = trends.decades.len(),
        first_year_above = ?trends.first_year_above,
        "climate summary complete"
    );

    Ok(ClimateSummary {
        config: ConfigSummary::from(config),
        n_readings: readings.len(),
        monthly,
        trends,
        seasonal,
        extremes,
        annual_cycle,
    })
}
