//! # climtrend-calendar
//!
//! Calendar classification for daily Gregorian temperature readings.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"Doy::from_date()"| B["Doy (1..=366)"]
//!     B -->|"Season::from_doy()"| C["Season"]
//!     D["month (0..=11)"] -->|"Season::from_month()"| C
//!     E["year"] -->|"decade_of()"| F["decade"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use climtrend_calendar::{Doy, Season, decade_of, decade_label};
//!
//! let date = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
//! let doy = Doy::from_date(date);
//! assert_eq!(doy.get(), 366); // 2020 is a leap year
//! assert_eq!(Season::from_doy(doy), Season::Winter);
//!
//! assert_eq!(Season::from_month(5).unwrap(), Season::Summer); // June
//! assert_eq!(decade_of(1987), 1980);
//! assert_eq!(decade_label(1980), "1980s");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype for the Gregorian calendar |
//! | `season` | Meteorological seasons and the day-of-year boundary table |
//! | `decade` | Decade grouping and labels |
//! | `month` | Zero-based month names |
//! | `error` | Error types |

mod decade;
mod doy;
mod error;
mod month;
mod season;

pub use decade::{decade_label, decade_of};
pub use doy::{DAYS_IN_LEAP_YEAR, Doy};
pub use error::CalendarError;
pub use month::MONTH_NAMES;
pub use season::Season;
