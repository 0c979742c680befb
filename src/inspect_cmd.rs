//! Inspect command: report how much of the input is usable.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use climtrend_climatology::normalize;
use climtrend_io::read_csv;

use crate::cli::InspectArgs;
use crate::config::ClimtrendConfig;
use crate::convert;

/// Read and normalize the input, logging row counts and the year range.
pub fn run(args: InspectArgs) -> Result<()> {
    let _cmd = info_span!("inspect").entered();
    let config = ClimtrendConfig::load(args.config.as_deref())?;
    let input = args.input.or(config.io.input.clone()).ok_or_else(|| {
        anyhow::anyhow!("no input path: set [io].input in config or use --input")
    })?;
    let reader_cfg = convert::build_reader_config(&config.io)?;

    let rows = read_csv(&input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;
    let readings = normalize(&rows);

    let first_year = readings.iter().map(|r| r.year()).min();
    let last_year = readings.iter().map(|r| r.year()).max();
    info!(
        path = %input.display(),
        total = rows.len(),
        usable = readings.len(),
        discarded = rows.len() - readings.len(),
        ?first_year,
        ?last_year,
        "input inspected"
    );
    if readings.is_empty() {
        warn!("no row holds a valid date and temperature");
    }

    println!(
        "rows: {}, usable: {}, discarded: {}",
        rows.len(),
        readings.len(),
        rows.len() - readings.len()
    );
    if let (Some(first), Some(last)) = (first_year, last_year) {
        println!("years: {first}-{last}");
    }
    Ok(())
}
