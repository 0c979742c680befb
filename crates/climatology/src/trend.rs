//! Yearly and decade trends with threshold-crossing detection.

use climtrend_calendar::{decade_label, decade_of};
use climtrend_stats::{Aggregate, Grouped};
use serde::Serialize;

use crate::reading::Reading;

/// Average temperature of one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyPoint {
    pub year: i32,
    pub average: f64,
    /// Number of valid days behind the average.
    pub count: usize,
    pub is_above_threshold: bool,
}

/// Unweighted mean of the yearly averages of one decade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadePoint {
    pub decade: i32,
    pub label: String,
    pub average: f64,
    pub n_years: usize,
    pub is_above_threshold: bool,
}

/// Yearly series, decade series and the first year above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub threshold: f64,
    pub yearly: Vec<YearlyPoint>,
    pub decades: Vec<DecadePoint>,
    pub first_year_above: Option<i32>,
}

/// Yearly averages in ascending year order.
pub fn build_yearly(readings: &[Reading], threshold: f64) -> Vec<YearlyPoint> {
    let by_year: Grouped<i32> =
        Grouped::group_by(readings, |r| r.year(), |r| Aggregate::of(r.temp_f()));
    by_year
        .iter()
        .filter_map(|(&year, agg)| {
            let average = agg.average()?;
            Some(YearlyPoint {
                year,
                average,
                count: agg.count(),
                is_above_threshold: average > threshold,
            })
        })
        .collect()
}

/// First year whose average is strictly above `threshold`.
///
/// `yearly` must be in ascending year order, as [`build_yearly`] returns it.
pub fn first_year_above(yearly: &[YearlyPoint], threshold: f64) -> Option<i32> {
    yearly
        .iter()
        .find(|p| p.average > threshold)
        .map(|p| p.year)
}

/// Decade averages over yearly averages, each year weighing the same.
///
/// Decades without any year are not emitted.
pub fn build_decades(yearly: &[YearlyPoint], threshold: f64) -> Vec<DecadePoint> {
    let by_decade: Grouped<i32> = Grouped::group_by(
        yearly,
        |p| decade_of(p.year),
        |p| Aggregate::of(p.average),
    );
    by_decade
        .iter()
        .filter_map(|(&decade, agg)| {
            let average = agg.average()?;
            Some(DecadePoint {
                decade,
                label: decade_label(decade),
                average,
                n_years: agg.count(),
                is_above_threshold: average > threshold,
            })
        })
        .collect()
}

#[tracing::instrument(skip(readings), fields(n_readings = readings.len()))]
pub fn build_trends(readings: &[Reading], threshold: f64) -> TrendSummary {
    let yearly = build_yearly(readings, threshold);
    let decades = build_decades(&yearly, threshold);
    let first_year_above = first_year_above(&yearly, threshold);
    tracing::debug!(
        n_years = yearly.len(),
        n_decades = decades.len(),
        ?first_year_above,
        "trends built"
    );
    TrendSummary {
        threshold,
        yearly,
        decades,
        first_year_above,
    }
}
