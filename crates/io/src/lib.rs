//! # climtrend-io
//!
//! Read raw daily temperature rows from delimited text. Rows come out as
//! untyped [`RawRow`] values; parsing dates and temperatures is left to the
//! pipeline's normalizer, so a defective row never fails the read.

mod error;
mod raw_row;
mod reader;

pub use error::IoError;
pub use raw_row::RawRow;
pub use reader::{ReaderConfig, parse_csv, read_csv, read_rows};
