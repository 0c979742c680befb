//! Pipeline configuration.

use crate::error::ClimatologyError;

/// Configuration for the climatology pipeline.
///
/// Defaults: yearly threshold 55 °F, baseline 1951–1980, hot days above
/// 90 °F, cold days below 20 °F, smoothing radius 3 (a 7-day window).
///
/// # Example
///
/// ```
/// use climtrend_climatology::ClimatologyConfig;
///
/// let config = ClimatologyConfig::default()
///     .with_threshold_temp(56.0)
///     .with_baseline(1961, 1990);
///
/// assert!(config.validate().is_ok());
/// assert!(config.in_baseline(1975));
/// ```
#[derive(Debug, Clone)]
pub struct ClimatologyConfig {
    /// Yearly and decade crossing threshold (°F).
    threshold_temp: f64,
    /// First year of the anomaly baseline window (inclusive).
    baseline_start_year: i32,
    /// Last year of the anomaly baseline window (inclusive).
    baseline_end_year: i32,
    /// Days strictly above this are hot (°F).
    hot_threshold: f64,
    /// Days strictly below this are cold (°F).
    cold_threshold: f64,
    /// Half-width of the annual-cycle moving average.
    smoothing_radius: usize,
}

impl Default for ClimatologyConfig {
    fn default() -> Self {
        Self {
            threshold_temp: 55.0,
            baseline_start_year: 1951,
            baseline_end_year: 1980,
            hot_threshold: 90.0,
            cold_threshold: 20.0,
            smoothing_radius: 3,
        }
    }
}

impl ClimatologyConfig {
    /// Set the yearly/decade threshold (°F).
    pub fn with_threshold_temp(mut self, threshold: f64) -> Self {
        self.threshold_temp = threshold;
        self
    }

    /// Set the inclusive baseline window.
    pub fn with_baseline(mut self, start_year: i32, end_year: i32) -> Self {
        self.baseline_start_year = start_year;
        self.baseline_end_year = end_year;
        self
    }

    /// Set the hot-day threshold (°F).
    pub fn with_hot_threshold(mut self, threshold: f64) -> Self {
        self.hot_threshold = threshold;
        self
    }

    /// Set the cold-day threshold (°F).
    pub fn with_cold_threshold(mut self, threshold: f64) -> Self {
        self.cold_threshold = threshold;
        self
    }

    /// Set the smoothing radius; the window is `2 * radius + 1` days wide.
    pub fn with_smoothing_radius(mut self, radius: usize) -> Self {
        self.smoothing_radius = radius;
        self
    }

    /// Returns the yearly/decade threshold.
    pub fn threshold_temp(&self) -> f64 {
        self.threshold_temp
    }

    /// Returns the first baseline year.
    pub fn baseline_start_year(&self) -> i32 {
        self.baseline_start_year
    }

    /// Returns the last baseline year.
    pub fn baseline_end_year(&self) -> i32 {
        self.baseline_end_year
    }

    /// Returns the hot-day threshold.
    pub fn hot_threshold(&self) -> f64 {
        self.hot_threshold
    }

    /// Returns the cold-day threshold.
    pub fn cold_threshold(&self) -> f64 {
        self.cold_threshold
    }

    /// Returns the smoothing radius.
    pub fn smoothing_radius(&self) -> usize {
        self.smoothing_radius
    }

    /// Returns `true` if `year` lies in the baseline window.
    pub fn in_baseline(&self, year: i32) -> bool {
        (self.baseline_start_year..=self.baseline_end_year).contains(&year)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::NonFiniteParameter`] for a NaN or infinite
    /// threshold, [`ClimatologyError::InvalidThresholds`] if the cold
    /// threshold is not below the hot one, and
    /// [`ClimatologyError::InvalidBaseline`] if the window is reversed.
    pub fn validate(&self) -> Result<(), ClimatologyError> {
        for (name, value) in [
            ("threshold_temp", self.threshold_temp),
            ("hot_threshold", self.hot_threshold),
            ("cold_threshold", self.cold_threshold),
        ] {
            if !value.is_finite() {
                return Err(ClimatologyError::NonFiniteParameter { name, value });
            }
        }
        if self.cold_threshold >= self.hot_threshold {
            return Err(ClimatologyError::InvalidThresholds {
                cold: self.cold_threshold,
                hot: self.hot_threshold,
            });
        }
        if self.baseline_start_year > self.baseline_end_year {
            return Err(ClimatologyError::InvalidBaseline {
                start: self.baseline_start_year,
                end: self.baseline_end_year,
            });
        }
        Ok(())
    }
}
