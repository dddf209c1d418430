//! Descriptive statistics over caller supplied slices.
//!
//! The slices are only borrowed for the duration of the call. Sums are accumulated in the
//! slice's own float type with straightforward left-to-right summation.

use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::vec::Vec;

use crate::{
    Error, Result,
    helper::{len_t, midpoint},
};

/// Returns the arithmetic mean of `values`
///
/// # Arguments
///
/// * `values` - The values to average
///
/// # Returns
///
/// * `Result<T>` - The sum divided by the count, or `InvalidInput` if `values` is empty
///
/// # Examples
///
/// ```
/// use awesome_calc::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// assert!(mean::<f64>(&[]).is_err());
/// ```
pub fn mean<T: Float>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(Error::InvalidInput("values must not be empty"));
    }

    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Ok(sum / len_t(values.len())?)
}

/// Returns the weighted mean `Σ values[i] * weights[i] / Σ weights[i]`
///
/// Weights may be negative and need not sum to one; only their sum must be non-zero.
///
/// # Arguments
///
/// * `values` - The values to average
/// * `weights` - One weight per value, paired by index
///
/// # Returns
///
/// * `Result<T>` - The weighted mean, or `InvalidInput` if the lengths differ, the
///   slices are empty or the weights sum to exactly zero
///
/// # Examples
///
/// ```
/// use assert_approx_eq::assert_approx_eq;
/// use awesome_calc::weighted_mean;
///
/// let wm = weighted_mean::<f64>(&[1.0, 2.0, 3.0], &[0.2, 0.3, 0.5]).unwrap();
/// assert_approx_eq!(wm, 2.3, 1e-12);
///
/// assert!(weighted_mean::<f64>(&[1.0, 2.0], &[1.0, -1.0]).is_err());
/// ```
pub fn weighted_mean<T: Float>(values: &[T], weights: &[T]) -> Result<T> {
    if values.len() != weights.len() {
        return Err(Error::InvalidInput(
            "values and weights must have the same size",
        ));
    }
    if values.is_empty() {
        return Err(Error::InvalidInput("values must not be empty"));
    }

    let (acc, weight_sum) = values
        .iter()
        .zip(weights)
        .fold((T::zero(), T::zero()), |(acc, wsum), (&v, &w)| {
            (acc + v * w, wsum + w)
        });

    if weight_sum == T::zero() {
        return Err(Error::InvalidInput("weight sum must not be zero"));
    }
    Ok(acc / weight_sum)
}

/// Returns the median of `values`
///
/// Selection runs on a private copy, so the caller's slice is left untouched. The element
/// of rank `n / 2` is located by partial selection rather than a full sort; for an even
/// count the result is the average of that element and the largest element below it.
///
/// # Arguments
///
/// * `values` - The values, in any order
///
/// # Returns
///
/// * `Result<T>` - The median, or `InvalidInput` if `values` is empty
///
/// # Examples
///
/// ```
/// use awesome_calc::median;
///
/// assert_eq!(median(&[5.0, 1.0, 3.0]), Ok(3.0));
/// assert_eq!(median(&[5.0, 1.0, 3.0, 7.0]), Ok(4.0));
/// ```
pub fn median<T>(values: &[T]) -> Result<T>
where
    T: Float + PrimitiveFloat,
{
    if values.is_empty() {
        return Err(Error::InvalidInput("values must not be empty"));
    }

    let mut work: Vec<T> = values.to_vec();
    let mid = work.len() / 2;
    let odd = work.len() % 2 != 0;

    let (lower, &mut upper, _) = work.select_nth_unstable_by_key(mid, |&v| OrderedFloat(v));
    if odd {
        return Ok(upper);
    }

    let lower_max = lower
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(upper, |m| m.0);
    Ok(midpoint(lower_max, upper))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn mean_works() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Ok(2.0));
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
        assert_eq!(mean(&[-4.0_f32]), Ok(-4.0));
    }

    #[test]
    fn mean_rejects_empty() {
        assert_eq!(
            mean::<f64>(&[]),
            Err(Error::InvalidInput("values must not be empty"))
        );
    }

    #[test]
    fn weighted_mean_works() {
        let wm = weighted_mean(&[1.0, 2.0, 3.0], &[0.2, 0.3, 0.5]).unwrap();
        assert_approx_eq!(wm, 2.3, 1e-12);

        let wm = weighted_mean(&[1.0, 2.0, 3.0, 4.0], &[0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_approx_eq!(wm, 3.0, 1e-12);
    }

    #[test]
    fn weighted_mean_accepts_negative_weights() {
        let wm = weighted_mean(&[1.0, 2.0, 3.0], &[2.0, -1.0, 1.0]).unwrap();
        assert_approx_eq!(wm, 1.5, 1e-12);
    }

    #[test]
    fn weighted_mean_does_not_need_normalized_weights() {
        let wm = weighted_mean(&[10.0, 20.0], &[3.0, 1.0]).unwrap();
        assert_approx_eq!(wm, 12.5, 1e-12);
    }

    #[test]
    fn weighted_mean_rejects_length_mismatch() {
        assert_eq!(
            weighted_mean(&[1.0, 2.0], &[0.5]),
            Err(Error::InvalidInput(
                "values and weights must have the same size"
            ))
        );
    }

    #[test]
    fn weighted_mean_rejects_empty() {
        assert_eq!(
            weighted_mean::<f64>(&[], &[]),
            Err(Error::InvalidInput("values must not be empty"))
        );
    }

    #[test]
    fn weighted_mean_rejects_zero_weight_sum() {
        assert_eq!(
            weighted_mean(&[1.0, 2.0], &[1.0, -1.0]),
            Err(Error::InvalidInput("weight sum must not be zero"))
        );
        assert!(weighted_mean(&[1.0], &[0.0]).is_err());
    }

    #[test]
    fn median_odd_count() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), Ok(3.0));
        assert_eq!(median(&[42.0]), Ok(42.0));
    }

    #[test]
    fn median_even_count() {
        assert_eq!(median(&[5.0, 1.0, 3.0, 7.0]), Ok(4.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
        assert_eq!(median(&[2.0, 1.0]), Ok(1.5));
    }

    #[test]
    fn median_with_duplicates() {
        assert_eq!(median(&[2.0, 2.0, 1.0, 2.0]), Ok(2.0));
        assert_eq!(median(&[3.0, 1.0, 1.0, 3.0]), Ok(2.0));
    }

    #[test]
    fn median_leaves_input_untouched() {
        let values = [9.0, 7.0, 8.0, 1.0, 5.0];
        let before = values;
        assert_eq!(median(&values), Ok(7.0));
        assert_eq!(values, before);
    }

    #[test]
    fn median_rejects_empty() {
        assert_eq!(
            median::<f64>(&[]),
            Err(Error::InvalidInput("values must not be empty"))
        );
    }
}
