//! Group-by-key folds.

use std::collections::BTreeMap;
use std::collections::btree_map;

use rayon::prelude::*;

use crate::aggregate::{Aggregate, Combine};

/// Accumulators keyed by a caller-chosen group key, ordered by key.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped<K: Ord, A = Aggregate> {
    groups: BTreeMap<K, A>,
}

impl<K: Ord, A: Combine> Grouped<K, A> {
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Folds `items` into groups.
    ///
    /// `key` picks the group of each item and `lift` turns the item into an
    /// accumulator that is combined into that group.
    pub fn group_by<T, I, KF, LF>(items: I, key: KF, lift: LF) -> Self
    where
        I: IntoIterator<Item = T>,
        KF: Fn(&T) -> K,
        LF: Fn(&T) -> A,
    {
        let mut grouped = Self::new();
        for item in items {
            grouped.insert(key(&item), lift(&item));
        }
        grouped
    }

    /// Combines `value` into the group `key`, creating the group if needed.
    pub fn insert(&mut self, key: K, value: A) {
        match self.groups.entry(key) {
            btree_map::Entry::Occupied(mut slot) => slot.get_mut().combine(value),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }

    /// Merges two groupings key by key.
    pub fn merge(mut self, other: Self) -> Self {
        for (key, value) in other.groups {
            self.insert(key, value);
        }
        self
    }

    /// Returns the accumulator of a group.
    pub fn get(&self, key: &K) -> Option<&A> {
        self.groups.get(key)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over `(key, accumulator)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &A)> {
        self.groups.iter()
    }

    /// Iterates over group keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }
}

impl<K, A> Grouped<K, A>
where
    K: Ord + Send,
    A: Combine + Send,
{
    /// Parallel version of [`Grouped::group_by`] over a slice.
    ///
    /// Each rayon partition folds into its own grouping; partitions are then
    /// merged with [`Grouped::merge`].
    pub fn par_group_by<T, KF, LF>(items: &[T], key: KF, lift: LF) -> Self
    where
        T: Sync,
        KF: Fn(&T) -> K + Sync,
        LF: Fn(&T) -> A + Sync,
    {
        items
            .par_iter()
            .fold(Self::new, |mut acc, item| {
                acc.insert(key(item), lift(item));
                acc
            })
            .reduce(Self::new, Self::merge)
    }
}

impl<K: Ord, A: Combine> Default for Grouped<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, A: Combine> FromIterator<(K, A)> for Grouped<K, A> {
    fn from_iter<I: IntoIterator<Item = (K, A)>>(iter: I) -> Self {
        let mut grouped = Self::new();
        for (key, value) in iter {
            grouped.insert(key, value);
        }
        grouped
    }
}

impl<K: Ord, A> IntoIterator for Grouped<K, A> {
    type Item = (K, A);
    type IntoIter = btree_map::IntoIter<K, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn group_by_parity() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let grouped: Grouped<bool> =
            Grouped::group_by(values, |v| (*v as i64) % 2 == 0, |v| Aggregate::of(*v));
        assert_eq!(grouped.len(), 2);
        assert_relative_eq!(grouped.get(&false).unwrap().average().unwrap(), 3.0);
        assert_relative_eq!(grouped.get(&true).unwrap().average().unwrap(), 3.0);
        assert_eq!(grouped.get(&true).unwrap().count(), 2);
    }

    #[test]
    fn empty_input_has_no_groups() {
        let grouped: Grouped<i32> =
            Grouped::group_by(Vec::<f64>::new(), |_| 0, |v| Aggregate::of(*v));
        assert!(grouped.is_empty());
        assert_eq!(grouped.get(&0), None);
    }

    #[test]
    fn keys_are_sorted() {
        let grouped: Grouped<i32> =
            Grouped::group_by([30, 10, 20, 10], |k| *k, |_| Aggregate::of(1.0));
        let keys: Vec<i32> = grouped.keys().copied().collect();
        assert_eq!(keys, vec![10, 20, 30]);
    }

    #[test]
    fn merge_equals_single_fold() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let whole: Grouped<i64> =
            Grouped::group_by(&values, |v| **v as i64 % 7, |v| Aggregate::of(**v));
        let (left, right) = values.split_at(37);
        let a: Grouped<i64> = Grouped::group_by(left, |v| **v as i64 % 7, |v| Aggregate::of(**v));
        let b: Grouped<i64> =
            Grouped::group_by(right, |v| **v as i64 % 7, |v| Aggregate::of(**v));
        assert_eq!(b.merge(a), whole);
    }
}
