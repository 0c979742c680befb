//! Climatology error types.

/// Errors that can occur while deriving climate summaries.
///
/// Gaps in the data are never errors: an empty group, a baseline season
/// without data or a threshold that is never crossed all surface as `None`
/// in the output.
#[derive(Debug, thiserror::Error)]
pub enum ClimatologyError {
    /// No input row survived normalization.
    #[error("no usable data: none of {total_rows} input row(s) holds a valid date and temperature")]
    NoUsableData { total_rows: usize },

    /// The cold threshold is not below the hot threshold.
    #[error("invalid extreme-day thresholds: cold {cold} must be below hot {hot}")]
    InvalidThresholds { cold: f64, hot: f64 },

    /// The baseline window is reversed.
    #[error("invalid baseline window: start year {start} is after end year {end}")]
    InvalidBaseline { start: i32, end: i32 },

    /// A numeric parameter is NaN or infinite.
    #[error("parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_usable_data_display() {
        let err = ClimatologyError::NoUsableData { total_rows: 3 };
        let msg = format!("{}", err);
        assert!(msg.contains("no usable data"));
        assert!(msg.contains("3 input row(s)"));
    }

    #[test]
    fn test_invalid_thresholds_display() {
        let err = ClimatologyError::InvalidThresholds {
            cold: 95.0,
            hot: 90.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid extreme-day thresholds: cold 95 must be below hot 90"
        );
    }

    #[test]
    fn test_invalid_baseline_display() {
        let err = ClimatologyError::InvalidBaseline {
            start: 1980,
            end: 1951,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("start year 1980"));
        assert!(msg.contains("end year 1951"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = ClimatologyError::NonFiniteParameter {
            name: "threshold_temp",
            value: f64::NAN,
        };
        assert_eq!(
            err.to_string(),
            "parameter 'threshold_temp' must be finite, got NaN"
        );
    }
}
