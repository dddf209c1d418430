//! Integer arithmetic: plain addition and addition saturated into caller supplied bounds.

use crate::{Error, Result};

/// Adds two integers
///
/// Overflow wraps around in two's complement, the same in debug and release builds.
///
/// # Arguments
///
/// * `a` - The first operand
/// * `b` - The second operand
///
/// # Returns
///
/// * `i32` - The wrapped sum
///
/// # Examples
///
/// ```
/// use awesome_calc::add;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(i32::MAX, 1), i32::MIN);
/// ```
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Adds two integers and saturates the result into `[min_value, max_value]`
///
/// The sum is computed in `i64`, so it never overflows before being clamped. Inverted
/// bounds are rejected before anything is computed; they are never swapped.
///
/// # Arguments
///
/// * `a` - The first operand
/// * `b` - The second operand
/// * `min_value` - The inclusive lower bound
/// * `max_value` - The inclusive upper bound
///
/// # Returns
///
/// * `Result<i32>` - The clamped sum, or `InvalidInput` if `min_value > max_value`
///
/// # Examples
///
/// ```
/// use awesome_calc::clamp_add;
///
/// assert_eq!(clamp_add(100, 50, -100, 120), Ok(120));
/// assert_eq!(clamp_add(-100, -50, -120, 10), Ok(-120));
/// assert_eq!(clamp_add(1, 2, -10, 10), Ok(3));
/// assert!(clamp_add(1, 2, 10, -10).is_err());
/// ```
pub fn clamp_add(a: i32, b: i32, min_value: i32, max_value: i32) -> Result<i32> {
    if min_value > max_value {
        return Err(Error::InvalidInput("min_value cannot exceed max_value"));
    }

    let raw = i64::from(a) + i64::from(b);
    let clamped = raw.clamp(i64::from(min_value), i64::from(max_value));

    // within [min_value, max_value], so it fits back into i32
    Ok(clamped as i32)
}
