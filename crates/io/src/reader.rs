//! CSV reader configuration and row extraction.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::raw_row::RawRow;

/// Column names used to pick fields out of the header row.
///
/// The [`Default`] matches the daily series export format, with a `time`
/// column and a `Ktemp` column holding Kelvin temperatures.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    time_column: String,
    temp_column: String,
    delimiter: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            time_column: "time".into(),
            temp_column: "Ktemp".into(),
            delimiter: b',',
        }
    }
}

impl ReaderConfig {
    /// Set the timestamp column name.
    pub fn with_time_column(mut self, name: impl Into<String>) -> Self {
        self.time_column = name.into();
        self
    }

    /// Set the Kelvin temperature column name.
    pub fn with_temp_column(mut self, name: impl Into<String>) -> Self {
        self.temp_column = name.into();
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the timestamp column name.
    pub fn time_column(&self) -> &str {
        &self.time_column
    }

    /// Returns the temperature column name.
    pub fn temp_column(&self) -> &str {
        &self.temp_column
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if a column name is blank or both
    /// names refer to the same column.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut errors = Vec::new();
        if self.time_column.trim().is_empty() {
            errors.push("time column name is empty".to_string());
        }
        if self.temp_column.trim().is_empty() {
            errors.push("temperature column name is empty".to_string());
        }
        if !self.time_column.trim().is_empty() && self.time_column == self.temp_column {
            errors.push(format!(
                "time and temperature columns are both '{}'",
                self.time_column
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: errors.len(),
                details: errors.join("; "),
            })
        }
    }
}

/// Read raw rows from a CSV file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Read`] if it cannot be opened, and any error of [`read_rows`].
pub fn read_csv(path: &Path, config: &ReaderConfig) -> Result<Vec<RawRow>, IoError> {
    config.validate()?;
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let rows = read_rows(file, config)?;
    info!(path = %path.display(), n_rows = rows.len(), "csv rows read");
    Ok(rows)
}

/// Read raw rows from CSV text held in memory.
///
/// # Errors
///
/// Same as [`read_rows`].
pub fn parse_csv(text: &str, config: &ReaderConfig) -> Result<Vec<RawRow>, IoError> {
    read_rows(text.as_bytes(), config)
}

/// Read raw rows from any CSV byte source.
///
/// The first line is the header. Input with no header line at all yields no
/// rows. Data rows may be shorter than the header; their missing fields are
/// absent in the resulting [`RawRow`], as are fields that are not valid
/// UTF-8.
///
/// # Errors
///
/// Returns [`IoError::Validation`] for an invalid `config`,
/// [`IoError::MissingColumn`] if a configured column is not in the header,
/// and [`IoError::Csv`] if the input is not readable as CSV.
pub fn read_rows<R: Read>(source: R, config: &ReaderConfig) -> Result<Vec<RawRow>, IoError> {
    config.validate()?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(config.delimiter)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        debug!("input has no header row");
        return Ok(Vec::new());
    }
    let time_idx = column_index(&headers, &config.time_column)?;
    let temp_idx = column_index(&headers, &config.temp_column)?;
    debug!(time_idx, temp_idx, n_columns = headers.len(), "header resolved");

    // Fields are decoded one by one so a bad byte only voids its own field.
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let field = |idx| record.get(idx).and_then(|b| std::str::from_utf8(b).ok());
        rows.push(RawRow::new(field(time_idx), field(temp_idx)));
    }
    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, IoError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns() {
        let config = ReaderConfig::default();
        assert_eq!(config.time_column(), "time");
        assert_eq!(config.temp_column(), "Ktemp");
        assert_eq!(config.delimiter(), b',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_and_duplicate_names() {
        let blank = ReaderConfig::default().with_time_column(" ");
        assert!(matches!(
            blank.validate(),
            Err(IoError::Validation { count: 1, .. })
        ));

        let same = ReaderConfig::default()
            .with_time_column("t")
            .with_temp_column("t");
        assert!(matches!(
            same.validate(),
            Err(IoError::Validation { count: 1, .. })
        ));
    }

    #[test]
    fn parse_picks_configured_columns() {
        let text = "station,time,Ktemp\nA,1950-01-01,270.5\nA,1950-01-02,271\n";
        let rows = parse_csv(text, &ReaderConfig::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time(), Some("1950-01-01"));
        assert_eq!(rows[0].kelvin(), Some("270.5"));
        assert_eq!(rows[1].kelvin(), Some("271"));
    }

    #[test]
    fn short_and_blank_fields_are_absent() {
        let text = "time,Ktemp\n1950-01-01\n,280.0\n1950-01-03,\n";
        let rows = parse_csv(text, &ReaderConfig::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kelvin(), None);
        assert_eq!(rows[1].time(), None);
        assert_eq!(rows[2].kelvin(), None);
    }

    #[test]
    fn invalid_utf8_field_is_absent() {
        let bytes: &[u8] = b"time,Ktemp\n1950-01-01,280.0\n1950-01-02,28\xff0\n1950-01-03,281.0\n";
        let rows = read_rows(bytes, &ReaderConfig::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].time(), Some("1950-01-02"));
        assert_eq!(rows[1].kelvin(), None);
        assert_eq!(rows[2].kelvin(), Some("281.0"));
    }

    #[test]
    fn invalid_utf8_in_other_column_is_ignored() {
        let bytes: &[u8] = b"station,time,Ktemp\nSt\xe9,1950-01-01,280.0\n";
        let rows = read_rows(bytes, &ReaderConfig::default()).unwrap();
        assert_eq!(rows[0].time(), Some("1950-01-01"));
        assert_eq!(rows[0].kelvin(), Some("280.0"));
    }

    #[test]
    fn missing_column_is_structural() {
        let text = "date,temp\n1950-01-01,280\n";
        let err = parse_csv(text, &ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, IoError::MissingColumn { ref name } if name == "time"));
    }

    #[test]
    fn empty_text_has_no_rows() {
        let rows = parse_csv("", &ReaderConfig::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn custom_delimiter() {
        let config = ReaderConfig::default()
            .with_time_column("date")
            .with_temp_column("k")
            .with_delimiter(b';');
        let rows = parse_csv("date;k\n2000-01-01;273.15\n", &config).unwrap();
        assert_eq!(rows[0].kelvin(), Some("273.15"));
    }
}
