//! Summarize command: read a CSV and write the full climate summary as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use climtrend_climatology::summarize;
use climtrend_io::read_csv;

use crate::cli::SummarizeArgs;
use crate::config::ClimtrendConfig;
use crate::convert;

/// Run the summary pipeline.
pub fn run(args: SummarizeArgs) -> Result<()> {
    let _cmd = info_span!("summarize").entered();
    let mut config = ClimtrendConfig::load(args.config.as_deref())?;

    // CLI flags override the file
    if let Some(t) = args.threshold {
        config.climatology.threshold_temp = t;
    }
    if let Some(t) = args.hot {
        config.climatology.hot_threshold = t;
    }
    if let Some(t) = args.cold {
        config.climatology.cold_threshold = t;
    }

    let input: PathBuf = args.input.or(config.io.input.clone()).ok_or_else(|| {
        anyhow::anyhow!("no input path: set [io].input in config or use --input")
    })?;
    let output = args.output.or(config.io.output.clone());

    let reader_cfg = convert::build_reader_config(&config.io)?;
    let clim_cfg = convert::build_climatology_config(&config.climatology)?;

    info!(path = %input.display(), "reading observations");
    let rows = read_csv(&input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;

    let summary = summarize(&rows, &clim_cfg).context("climate summary failed")?;
    let json = summary.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write summary: {}", path.display()))?;
            info!(path = %path.display(), "summary written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
