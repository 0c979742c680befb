//! Meteorological seasons.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::doy::Doy;
use crate::error::CalendarError;

/// Meteorological season: fixed three-month groups, Dec-Feb being Winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

/// Inclusive day-of-year ranges for the annual cycle.
///
/// The ranges are fixed and ignore leap-year shifts: in a leap year Feb 29
/// is day 60 and therefore falls in Spring here, while [`Season::from_month`]
/// puts it in Winter.
#[rustfmt::skip]
const DOY_SEASON_TABLE: [(u16, u16, Season); 5] = [
    (1,   59,  Season::Winter),
    (60,  151, Season::Spring),
    (152, 243, Season::Summer),
    (244, 334, Season::Fall),
    (335, 366, Season::Winter),
];

impl Season {
    /// All seasons in calendar order, starting with Winter.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Season of a zero-based month (January = 0, December = 11).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 0..=11.
    pub fn from_month(month: u8) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self::of_month0(u32::from(month)))
    }

    /// Meteorological season of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::of_month0(date.month0())
    }

    fn of_month0(month0: u32) -> Self {
        match month0 {
            11 | 0 | 1 => Season::Winter,
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            _ => Season::Fall,
        }
    }

    /// Season of a day-of-year slot, using the fixed boundary table.
    pub fn from_doy(doy: Doy) -> Self {
        let d = doy.get();
        DOY_SEASON_TABLE
            .iter()
            .find(|&&(first, last, _)| (first..=last).contains(&d))
            .map(|&(_, _, season)| season)
            // the table covers 1..=366 and Doy never leaves that range
            .unwrap_or(Season::Winter)
    }

    /// Lower-case name, e.g. `"winter"`.
    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
