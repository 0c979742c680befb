//! Untyped input rows.

/// One row of input exactly as read: a timestamp text and a temperature text
/// in Kelvin.
///
/// Empty fields are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    time: Option<String>,
    kelvin: Option<String>,
}

impl RawRow {
    /// Creates a row from optional field texts. Blank texts become `None`.
    pub fn new(time: Option<impl Into<String>>, kelvin: Option<impl Into<String>>) -> Self {
        Self {
            time: time.map(Into::into).filter(|s| !s.trim().is_empty()),
            kelvin: kelvin.map(Into::into).filter(|s| !s.trim().is_empty()),
        }
    }

    /// Creates a row from a timestamp and a numeric Kelvin temperature.
    pub fn from_kelvin(time: impl Into<String>, kelvin: f64) -> Self {
        Self::new(Some(time), Some(kelvin.to_string()))
    }

    /// Timestamp text, if present.
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// Temperature text in Kelvin, if present.
    pub fn kelvin(&self) -> Option<&str> {
        self.kelvin.as_deref()
    }
}
