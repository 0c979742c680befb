//! Running sum/count pairs.

/// An accumulator with an empty value ([`Default`]) and a merge.
///
/// `combine` must be commutative and associative.
pub trait Combine: Default {
    /// Folds `other` into `self`.
    fn combine(&mut self, other: Self);
}

/// A running `(sum, count)` pair.
///
/// The average is only defined when at least one value was added; an empty
/// aggregate reports `None` rather than `0.0` or `NaN`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregate {
    sum: f64,
    count: usize,
}

impl Aggregate {
    /// Aggregate holding a single observation.
    pub fn of(value: f64) -> Self {
        Self {
            sum: value,
            count: 1,
        }
    }

    /// Adds one observation.
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Sum of all observations.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Number of observations.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if no observation was added.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `sum / count`, or `None` for an empty aggregate.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

impl Combine for Aggregate {
    fn combine(&mut self, other: Self) {
        self.sum += other.sum;
        self.count += other.count;
    }
}

impl FromIterator<f64> for Aggregate {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut agg = Self::default();
        for value in iter {
            agg.push(value);
        }
        agg
    }
}
