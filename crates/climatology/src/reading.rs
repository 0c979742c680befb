//! Reading normalizer: raw rows to typed, calendar-classified readings.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use climtrend_calendar::{Doy, Season, decade_of};
use climtrend_io::RawRow;
use rayon::prelude::*;

/// Timestamp layouts tried after RFC 3339, most specific first.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// One daily temperature observation with its calendar attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    date: NaiveDate,
    year: i32,
    month: u8,
    doy: Doy,
    season: Season,
    temp_f: f64,
}

impl Reading {
    /// Builds a reading from a date and a Fahrenheit temperature.
    pub fn new(date: NaiveDate, temp_f: f64) -> Self {
        Self {
            date,
            year: date.year(),
            // month0() is always 0..=11
            month: date.month0() as u8,
            doy: Doy::from_date(date),
            season: Season::from_date(date),
            temp_f,
        }
    }

    /// Builds a reading from a date and a Kelvin temperature.
    pub fn from_kelvin(date: NaiveDate, kelvin: f64) -> Self {
        Self::new(date, kelvin_to_fahrenheit(kelvin))
    }

    /// Normalizes one raw row, or `None` if the row must be discarded.
    ///
    /// A row is discarded when either field is absent, the timestamp is not
    /// a recognised date, or the temperature is not a finite number.
    pub fn from_raw(row: &RawRow) -> Option<Self> {
        let date = parse_timestamp(row.time()?)?;
        let kelvin = row
            .kelvin()?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|k| k.is_finite())?;
        Some(Self::from_kelvin(date, kelvin))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (January = 0).
    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn doy(&self) -> Doy {
        self.doy
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn decade(&self) -> i32 {
        decade_of(self.year)
    }

    /// Temperature in degrees Fahrenheit.
    pub fn temp_f(&self) -> f64 {
        self.temp_f
    }
}

/// `(K - 273.15) * 9/5 + 32`, unrounded.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - 273.15) * 9.0 / 5.0 + 32.0
}

/// Parses a timestamp text into the calendar date it names.
///
/// Offsets in RFC 3339 texts are not applied; the date is taken as written.
pub fn parse_timestamp(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

/// Normalizes every row, dropping the ones that cannot be read.
///
/// Output order follows input order. No discard count is kept; callers that
/// need one compare lengths.
pub fn normalize(rows: &[RawRow]) -> Vec<Reading> {
    rows.par_iter().filter_map(Reading::from_raw).collect()
}
