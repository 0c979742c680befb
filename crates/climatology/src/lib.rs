//! # climtrend-climatology
//!
//! Climate statistics over daily temperature readings: monthly
//! climatology, yearly and decade trends, seasonal anomalies against a
//! fixed baseline, extreme-day frequency and a smoothed annual cycle.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["RawRow"] -->|"normalize()"| B["Reading"]
//!     B -->|"build_monthly()"| C["MonthlyClimatology"]
//!     B -->|"build_trends()"| D["TrendSummary"]
//!     B -->|"build_seasonal()"| E["SeasonalSummary"]
//!     B -->|"classify_extremes()"| F["ExtremeDayStats"]
//!     B -->|"build_annual_cycle()"| G["AnnualCyclePoint"]
//!     C & D & E & F & G --> H["ClimateSummary"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use climtrend_climatology::{ClimatologyConfig, Reading, summarize_readings};
//!
//! let readings: Vec<Reading> = (0..365)
//!     .map(|d| {
//!         let date = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap() + chrono::Days::new(d);
//!         Reading::new(date, 60.0)
//!     })
//!     .collect();
//!
//! let summary = summarize_readings(&readings, &ClimatologyConfig::default())?;
//! assert_eq!(summary.trends.first_year_above, Some(1999));
//! assert_eq!(summary.annual_cycle.len(), 366);
//! # Ok::<(), climtrend_climatology::ClimatologyError>(())
//! ```
//!
//! Missing values are always `None`, never zero.

mod anomaly;
mod config;
mod cycle;
mod error;
mod extremes;
mod monthly;
mod output;
mod pipeline;
mod reading;
mod trend;

pub use anomaly::{
    Baseline, DecadeAnomaly, DecadeWarming, SeasonalSummary, SeasonalValues, SeasonalYear,
    anomalies, build_seasonal, compute_baseline, decade_anomalies, decade_warming,
    seasonal_averages,
};
pub use config::ClimatologyConfig;
pub use cycle::{AnnualCyclePoint, build_annual_cycle};
pub use error::ClimatologyError;
pub use extremes::{ExtremeDayStats, classify_extremes};
pub use monthly::{MonthlyClimatology, MonthlyEntry, MonthlyProfile, build_monthly};
pub use output::{ClimateSummary, ConfigSummary};
pub use pipeline::{summarize, summarize_readings};
pub use reading::{Reading, kelvin_to_fahrenheit, normalize, parse_timestamp};
pub use trend::{
    DecadePoint, TrendSummary, YearlyPoint, build_decades, build_trends, build_yearly,
    first_year_above,
};
