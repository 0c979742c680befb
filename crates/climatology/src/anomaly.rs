//! Seasonal averages, the fixed baseline, and anomalies against it.

use climtrend_calendar::{Season, decade_label, decade_of};
use climtrend_stats::{Aggregate, Grouped};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClimatologyConfig;
use crate::reading::Reading;

/// One optional value per meteorological season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SeasonalValues {
    pub winter: Option<f64>,
    pub spring: Option<f64>,
    pub summer: Option<f64>,
    pub fall: Option<f64>,
}

impl SeasonalValues {
    /// Builds the four values from a per-season function.
    pub fn from_fn(mut f: impl FnMut(Season) -> Option<f64>) -> Self {
        Self {
            winter: f(Season::Winter),
            spring: f(Season::Spring),
            summer: f(Season::Summer),
            fall: f(Season::Fall),
        }
    }

    pub fn get(&self, season: Season) -> Option<f64> {
        match season {
            Season::Winter => self.winter,
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
        }
    }

    /// `self - other` per season; missing on either side stays missing.
    pub fn difference(&self, other: &SeasonalValues) -> Self {
        Self::from_fn(|s| Some(self.get(s)? - other.get(s)?))
    }
}

/// Seasonal values of one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalYear {
    pub year: i32,
    #[serde(flatten)]
    pub values: SeasonalValues,
}

/// Per-season reference means over a fixed window of years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Baseline {
    pub start_year: i32,
    pub end_year: i32,
    #[serde(flatten)]
    pub averages: SeasonalValues,
}

/// Mean seasonal anomaly over the years of one decade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeAnomaly {
    pub decade: i32,
    pub label: String,
    #[serde(flatten)]
    pub values: SeasonalValues,
}

/// Change of each season's decade anomaly from the first to the last decade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeWarming {
    pub first_decade: i32,
    pub last_decade: i32,
    #[serde(flatten)]
    pub change: SeasonalValues,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalSummary {
    pub averages: Vec<SeasonalYear>,
    pub baseline: Baseline,
    pub anomalies: Vec<SeasonalYear>,
    pub decade_anomalies: Vec<DecadeAnomaly>,
    pub decade_warming: Option<DecadeWarming>,
}

/// Seasonal averages of every year present, from the `(year, season)`
/// grouping. December counts toward the winter of its own calendar year.
pub fn seasonal_averages(readings: &[Reading]) -> Vec<SeasonalYear> {
    let grouped: Grouped<(i32, Season)> = Grouped::group_by(
        readings,
        |r| (r.year(), r.season()),
        |r| Aggregate::of(r.temp_f()),
    );
    let mut years: Vec<i32> = grouped.keys().map(|&(year, _)| year).collect();
    years.dedup();
    years
        .into_iter()
        .map(|year| SeasonalYear {
            year,
            values: SeasonalValues::from_fn(|s| grouped.get(&(year, s))?.average()),
        })
        .collect()
}

/// Baseline of each season: the mean of that season's yearly averages over
/// the configured baseline window. Every qualifying year weighs the same.
///
/// A season with no yearly average inside the window has a `None` baseline.
pub fn compute_baseline(averages: &[SeasonalYear], config: &ClimatologyConfig) -> Baseline {
    let start_year = config.baseline_start_year();
    let end_year = config.baseline_end_year();
    let window: Vec<&SeasonalYear> = averages
        .iter()
        .filter(|y| config.in_baseline(y.year))
        .collect();
    let baseline = SeasonalValues::from_fn(|s| {
        window
            .iter()
            .filter_map(|y| y.values.get(s))
            .collect::<Aggregate>()
            .average()
    });
    for season in Season::ALL {
        if baseline.get(season).is_none() {
            warn!(%season, start_year, end_year, "no baseline data for season");
        }
    }
    Baseline {
        start_year,
        end_year,
        averages: baseline,
    }
}

/// Anomaly of every year and season against the baseline.
pub fn anomalies(averages: &[SeasonalYear], baseline: &Baseline) -> Vec<SeasonalYear> {
    averages
        .iter()
        .map(|y| SeasonalYear {
            year: y.year,
            values: y.values.difference(&baseline.averages),
        })
        .collect()
}

/// Mean anomaly per decade and season over the years with a present anomaly.
pub fn decade_anomalies(anomalies: &[SeasonalYear]) -> Vec<DecadeAnomaly> {
    let grouped: Grouped<(i32, Season)> = anomalies
        .iter()
        .flat_map(|y| {
            Season::ALL.into_iter().filter_map(move |s| {
                y.values
                    .get(s)
                    .map(|v| ((decade_of(y.year), s), Aggregate::of(v)))
            })
        })
        .collect();
    let mut decades: Vec<i32> = anomalies.iter().map(|y| decade_of(y.year)).collect();
    decades.sort_unstable();
    decades.dedup();
    decades
        .into_iter()
        .map(|decade| DecadeAnomaly {
            decade,
            label: decade_label(decade),
            values: SeasonalValues::from_fn(|s| grouped.get(&(decade, s))?.average()),
        })
        .collect()
}

/// Last decade's anomalies minus the first decade's, or `None` without
/// decades.
pub fn decade_warming(decades: &[DecadeAnomaly]) -> Option<DecadeWarming> {
    let first = decades.first()?;
    let last = decades.last()?;
    Some(DecadeWarming {
        first_decade: first.decade,
        last_decade: last.decade,
        change: last.values.difference(&first.values),
    })
}

#[tracing::instrument(skip_all, fields(n_readings = readings.len()))]
pub fn build_seasonal(readings: &[Reading], config: &ClimatologyConfig) -> SeasonalSummary {
    let averages = seasonal_averages(readings);
    let baseline = compute_baseline(&averages, config);
    let anomalies = anomalies(&averages, &baseline);
    let decade_anomalies = decade_anomalies(&anomalies);
    let decade_warming = decade_warming(&decade_anomalies);
    debug!(
        n_years = averages.len(),
        n_decades = decade_anomalies.len(),
        "seasonal anomalies built"
    );
    SeasonalSummary {
        averages,
        baseline,
        anomalies,
        decade_anomalies,
        decade_warming,
    }
}
