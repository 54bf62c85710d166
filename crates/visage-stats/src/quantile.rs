//! Quantiles by linear interpolation
//!
//! Uses the R-7 estimator (the default in R and NumPy): for a sorted sample
//! of n values the quantile at probability q sits at fractional rank
//! `(n - 1) * q`, interpolated linearly between the two neighbouring order
//! statistics.
//!
//! The arithmetic is kept in exactly this form:
//! `sorted[base] + rest * (sorted[base + 1] - sorted[base])`.
//! Rewriting it (e.g. as a weighted sum) changes results in the last bit.
//! An exact rank returns the order statistic itself, so a gap between
//! neighbours that overflows to infinity cannot turn it into NaN.

use crate::error::{StatsError, StatsResult};

/// Probability of the first quartile
pub const Q1: f64 = 0.25;
/// Probability of the median
pub const Q2: f64 = 0.5;
/// Probability of the third quartile
pub const Q3: f64 = 0.75;

/// Quantile of an ascending-sorted sample
///
/// Fails with `EmptyColumn` on an empty slice and `InvalidQuantile` when `q`
/// is NaN or outside [0, 1].
pub fn quantile(sorted: &[f64], q: f64) -> StatsResult<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(StatsError::InvalidQuantile { q });
    }
    if sorted.is_empty() {
        return Err(StatsError::EmptyColumn);
    }

    let pos = (sorted.len() - 1) as f64 * q;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;

    Ok(match sorted.get(base + 1) {
        Some(next) if rest > 0.0 => sorted[base] + rest * (next - sorted[base]),
        _ => sorted[base],
    })
}

/// The three quartiles (Q1, median, Q3) of an ascending-sorted sample
pub fn quartiles(sorted: &[f64]) -> StatsResult<(f64, f64, f64)> {
    Ok((
        quantile(sorted, Q1)?,
        quantile(sorted, Q2)?,
        quantile(sorted, Q3)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_exact_ranks() {
        let sorted = [10.0, 20.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile(&sorted, Q1).unwrap(), 20.0);
        assert_eq!(quantile(&sorted, Q2).unwrap(), 20.0);
        assert_eq!(quantile(&sorted, Q3).unwrap(), 30.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        // n = 4: Q1 at rank 0.75, median at 1.5, Q3 at 2.25
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, Q1).unwrap(), 1.75);
        assert_eq!(quantile(&sorted, Q2).unwrap(), 2.5);
        assert_eq!(quantile(&sorted, Q3).unwrap(), 3.25);
    }

    #[test]
    fn test_quantile_endpoints() {
        let sorted = [-3.0, 0.5, 7.0];
        assert_eq!(quantile(&sorted, 0.0).unwrap(), -3.0);
        assert_eq!(quantile(&sorted, 1.0).unwrap(), 7.0);
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile(&[42.0], Q1).unwrap(), 42.0);
        assert_eq!(quantile(&[42.0], Q3).unwrap(), 42.0);
    }

    #[test]
    fn test_quantile_errors() {
        assert_eq!(quantile(&[], Q2), Err(StatsError::EmptyColumn));
        assert!(matches!(
            quantile(&[1.0], 1.5),
            Err(StatsError::InvalidQuantile { .. })
        ));
        assert!(quantile(&[1.0], f64::NAN).is_err());
    }

    #[test]
    fn test_quantile_exact_rank_with_huge_spread() {
        let sorted = [-1e308, 1e308];
        assert_eq!(quantile(&sorted, 0.0).unwrap(), -1e308);
        assert_eq!(quantile(&sorted, 1.0).unwrap(), 1e308);

        let sorted = [-1e308, 0.0, 1e308];
        assert_eq!(quantile(&sorted, Q2).unwrap(), 0.0);
    }

    #[test]
    fn test_quartiles() {
        let (q1, q2, q3) = quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!((q1, q2, q3), (2.0, 3.0, 4.0));
    }
}
