//! Day-of-year newtype for the Gregorian calendar.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Number of day-of-year slots needed to hold any Gregorian year.
pub const DAYS_IN_LEAP_YEAR: usize = 366;

/// 1-based ordinal day within a Gregorian year (1..=366).
///
/// Day 366 only exists in leap years. It is a slot of its own and never
/// aliases day 1 of the following year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=366.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=DAYS_IN_LEAP_YEAR as u16).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Day-of-year of a calendar date (Jan 1 = 1).
    pub fn from_date(date: NaiveDate) -> Self {
        // chrono guarantees ordinal() in 1..=366
        Self(date.ordinal() as u16)
    }

    /// Returns the inner day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=365).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterates over every day-of-year slot, 1 through 366.
    pub fn all() -> impl Iterator<Item = Doy> {
        (1..=DAYS_IN_LEAP_YEAR as u16).map(Doy)
    }
}
