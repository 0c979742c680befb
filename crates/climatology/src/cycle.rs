//! Day-of-year climatology with centered smoothing.

use climtrend_calendar::{DAYS_IN_LEAP_YEAR, Doy, Season};
use climtrend_stats::{Aggregate, Grouped, centered_moving_average};
use serde::Serialize;

use crate::reading::Reading;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualCyclePoint {
    /// 1..=366.
    pub day_of_year: u16,
    /// Mean of this calendar day pooled over all years.
    pub raw_average: Option<f64>,
    pub smoothed_average: Option<f64>,
    pub count: usize,
    pub season: Season,
}

/// Builds the 366-slot annual cycle.
///
/// Day 366 only collects leap-year readings. Seasons follow the fixed
/// day-of-year table, see [`Season::from_doy`].
pub fn build_annual_cycle(readings: &[Reading], radius: usize) -> Vec<AnnualCyclePoint> {
    let by_doy: Grouped<Doy> =
        Grouped::group_by(readings, |r| r.doy(), |r| Aggregate::of(r.temp_f()));

    let mut slots = [Aggregate::default(); DAYS_IN_LEAP_YEAR];
    for (doy, agg) in by_doy {
        slots[doy.index()] = agg;
    }

    let raw: Vec<Option<f64>> = slots.iter().map(Aggregate::average).collect();
    let smoothed = centered_moving_average(&raw, radius);

    Doy::all()
        .zip(slots.iter().zip(raw.iter().zip(smoothed)))
        .map(|(doy, (agg, (&raw_average, smoothed_average)))| AnnualCyclePoint {
            day_of_year: doy.get(),
            raw_average,
            smoothed_average,
            count: agg.count(),
            season: Season::from_doy(doy),
        })
        .collect()
}
