//! Moving averages over series with gaps.

use crate::aggregate::Aggregate;

/// Centered moving average of half-width `radius` over optional values.
///
/// Position `i` is smoothed only when the full window `i - radius ..= i +
/// radius` lies inside the slice; the first and last `radius` positions are
/// `None`. The window never wraps around the ends. Missing values inside a
/// window are skipped and the mean is taken over the present ones; a window
/// with no present value yields `None`.
pub fn centered_moving_average(values: &[Option<f64>], radius: usize) -> Vec<Option<f64>> {
    let n = values.len();
    (0..n)
        .map(|i| {
            if i < radius || i + radius >= n {
                return None;
            }
            values[i - radius..=i + radius]
                .iter()
                .flatten()
                .copied()
                .collect::<Aggregate>()
                .average()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn edges_are_unsmoothed() {
        let values: Vec<Option<f64>> = (0..10).map(|i| Some(i as f64)).collect();
        let smoothed = centered_moving_average(&values, 3);
        assert_eq!(smoothed.len(), 10);
        assert!(smoothed[..3].iter().all(Option::is_none));
        assert!(smoothed[7..].iter().all(Option::is_none));
        assert!(smoothed[3..7].iter().all(Option::is_some));
    }

    #[test]
    fn linear_series_is_preserved() {
        let values: Vec<Option<f64>> = (0..10).map(|i| Some(i as f64)).collect();
        let smoothed = centered_moving_average(&values, 3);
        for (i, v) in smoothed.iter().enumerate().take(7).skip(3) {
            assert_relative_eq!(v.unwrap(), i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn gaps_average_present_values_only() {
        let values = [Some(1.0), None, Some(3.0), None, Some(8.0)];
        let smoothed = centered_moving_average(&values, 2);
        assert_relative_eq!(smoothed[2].unwrap(), 4.0);
    }

    #[test]
    fn all_missing_window_is_none() {
        let values = [Some(1.0), None, None, None, Some(1.0)];
        let smoothed = centered_moving_average(&values, 1);
        assert_eq!(smoothed[2], None);
        assert_eq!(smoothed[1], Some(1.0));
    }

    #[test]
    fn radius_zero_is_identity() {
        let values = [Some(2.0), None, Some(5.0)];
        assert_eq!(centered_moving_average(&values, 0), values.to_vec());
    }

    #[test]
    fn window_wider_than_series() {
        let values = [Some(1.0), Some(2.0)];
        assert_eq!(centered_moving_average(&values, 3), vec![None, None]);
    }
}
