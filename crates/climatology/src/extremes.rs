//! Extreme-day frequency per decade.

use climtrend_calendar::decade_label;
use climtrend_stats::{Combine, Grouped};
use serde::Serialize;

use crate::reading::Reading;

/// Hot, cold and total day counts of one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ExtremeTally {
    hot: usize,
    cold: usize,
    total: usize,
}

impl ExtremeTally {
    fn classify(temp_f: f64, hot_threshold: f64, cold_threshold: f64) -> Self {
        Self {
            hot: usize::from(temp_f > hot_threshold),
            cold: usize::from(temp_f < cold_threshold),
            total: 1,
        }
    }
}

impl Combine for ExtremeTally {
    fn combine(&mut self, other: Self) {
        self.hot += other.hot;
        self.cold += other.cold;
        self.total += other.total;
    }
}

/// Extreme-day counts of one decade. Percentages are over the decade's own
/// day count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremeDayStats {
    pub decade: i32,
    pub label: String,
    pub hot_days: usize,
    pub cold_days: usize,
    pub total_days: usize,
    pub hot_pct: f64,
    pub cold_pct: f64,
}

/// Counts days strictly above `hot_threshold` and strictly below
/// `cold_threshold` per decade.
///
/// Thresholds are expected to satisfy `cold_threshold < hot_threshold`, so no
/// day is counted as both.
pub fn classify_extremes(
    readings: &[Reading],
    hot_threshold: f64,
    cold_threshold: f64,
) -> Vec<ExtremeDayStats> {
    let by_decade: Grouped<i32, ExtremeTally> = Grouped::par_group_by(
        readings,
        |r| r.decade(),
        |r| ExtremeTally::classify(r.temp_f(), hot_threshold, cold_threshold),
    );
    by_decade
        .into_iter()
        .map(|(decade, tally)| {
            let pct = |n: usize| n as f64 / tally.total as f64 * 100.0;
            ExtremeDayStats {
                decade,
                label: decade_label(decade),
                hot_days: tally.hot,
                cold_days: tally.cold,
                total_days: tally.total,
                hot_pct: pct(tally.hot),
                cold_pct: pct(tally.cold),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn day(y: i32, d: u32, temp_f: f64) -> Reading {
        Reading::new(NaiveDate::from_ymd_opt(y, 7, d).unwrap(), temp_f)
    }

    #[test]
    fn test_counts_per_decade() {
        let readings = [
            day(1961, 1, 95.0),
            day(1962, 2, 10.0),
            day(1963, 3, 50.0),
            day(1969, 4, 90.0),
            day(1971, 5, 20.0),
        ];
        let stats = classify_extremes(&readings, 90.0, 20.0);
        assert_eq!(stats.len(), 2);

        let sixties = &stats[0];
        assert_eq!(sixties.label, "1960s");
        assert_eq!((sixties.hot_days, sixties.cold_days, sixties.total_days), (1, 1, 4));
        assert_relative_eq!(sixties.hot_pct, 25.0);
        assert_relative_eq!(sixties.cold_pct, 25.0);

        // thresholds are strict
        let seventies = &stats[1];
        assert_eq!((seventies.hot_days, seventies.cold_days, seventies.total_days), (0, 0, 1));
        assert_relative_eq!(seventies.hot_pct, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(classify_extremes(&[], 90.0, 20.0).is_empty());
    }

    #[test]
    fn test_tally_combine() {
        let mut a = ExtremeTally::classify(100.0, 90.0, 20.0);
        a.combine(ExtremeTally::classify(0.0, 90.0, 20.0));
        a.combine(ExtremeTally::default());
        assert_eq!(
            a,
            ExtremeTally {
                hot: 1,
                cold: 1,
                total: 2
            }
        );
    }
}
