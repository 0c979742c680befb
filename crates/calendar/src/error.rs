//! Error types for the climtrend-calendar crate.

/// Error type for all fallible operations in the climtrend-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=366.
    #[error("invalid day of year: {doy} (must be 1..=366)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a zero-based month index is outside 0..=11.
    #[error("invalid month: {month} (must be 0..=11)")]
    InvalidMonth {
        /// The invalid month index that was provided.
        month: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_doy() {
        let err = CalendarError::InvalidDoy { doy: 0 };
        assert_eq!(err.to_string(), "invalid day of year: 0 (must be 1..=366)");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 12 };
        assert_eq!(err.to_string(), "invalid month: 12 (must be 0..=11)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
