//! Keyed sum/count reductions for the climtrend pipeline.
//!
//! Every "by year", "by month", "by decade" or "by day-of-year" view is one
//! [`Grouped`] fold with a different key function. Accumulators implement
//! [`Combine`], whose merge must be commutative and associative so that
//! input order and partitioning never change the result.

mod aggregate;
mod grouping;
mod smoothing;

pub use aggregate::{Aggregate, Combine};
pub use grouping::Grouped;
pub use smoothing::centered_moving_average;
