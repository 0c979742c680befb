//! Monthly climatology: per-year and pooled monthly averages.

use std::collections::BTreeMap;

use climtrend_calendar::MONTH_NAMES;
use climtrend_stats::{Aggregate, Combine, Grouped};
use serde::Serialize;

use crate::reading::Reading;

/// Average temperature of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyEntry {
    /// Zero-based month (January = 0).
    pub month: u8,
    pub month_name: &'static str,
    /// `None` when the month has no observations.
    pub average: Option<f64>,
    pub count: usize,
}

/// Twelve monthly entries, January first. Months without data are kept as
/// entries with a `None` average.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthlyProfile {
    entries: Vec<MonthlyEntry>,
}

impl MonthlyProfile {
    fn from_aggregates(months: &[Aggregate; 12]) -> Self {
        let entries = months
            .iter()
            .zip(MONTH_NAMES)
            .enumerate()
            .map(|(i, (agg, month_name))| MonthlyEntry {
                month: i as u8,
                month_name,
                average: agg.average(),
                count: agg.count(),
            })
            .collect();
        Self { entries }
    }

    /// All twelve entries in month order.
    pub fn entries(&self) -> &[MonthlyEntry] {
        &self.entries
    }

    /// Entry of a zero-based month.
    pub fn get(&self, month: u8) -> Option<&MonthlyEntry> {
        self.entries.get(month as usize)
    }

    /// Average of a zero-based month, `None` if it is missing or out of range.
    pub fn average(&self, month: u8) -> Option<f64> {
        self.get(month).and_then(|e| e.average)
    }

    /// Total number of observations over the twelve months.
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Monthly profiles of every year plus the all-years profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyClimatology {
    pub by_year: BTreeMap<i32, MonthlyProfile>,
    /// Each month pools every observed day of every year.
    pub all_years: MonthlyProfile,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

/// Builds the monthly climatology from the `(year, month)` grouping.
///
/// The all-years profile sums the per-year sums and counts of each month, so
/// every day weighs the same regardless of how complete its year is.
pub fn build_monthly(readings: &[Reading]) -> MonthlyClimatology {
    let by_year_month: Grouped<(i32, u8)> = Grouped::group_by(
        readings,
        |r| (r.year(), r.month()),
        |r| Aggregate::of(r.temp_f()),
    );

    let mut per_year: BTreeMap<i32, [Aggregate; 12]> = BTreeMap::new();
    let mut pooled = [Aggregate::default(); 12];
    for (&(year, month), agg) in by_year_month.iter() {
        let slot = month as usize;
        per_year.entry(year).or_default()[slot].combine(*agg);
        pooled[slot].combine(*agg);
    }

    let min_year = per_year.keys().next().copied();
    let max_year = per_year.keys().next_back().copied();
    let by_year = per_year
        .iter()
        .map(|(&year, months)| (year, MonthlyProfile::from_aggregates(months)))
        .collect();

    MonthlyClimatology {
        by_year,
        all_years: MonthlyProfile::from_aggregates(&pooled),
        min_year,
        max_year,
    }
}
