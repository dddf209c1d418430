use num_traits::Float;

use crate::{Error, Result};

/// Converts an element count into the float type used for the division
///
/// # Arguments
///
/// * `len` - The number of elements
///
/// # Returns
///
/// * `Result<T>` - The count as `T`, or `InvalidInput` if `T` cannot represent it
#[inline]
pub fn len_t<T: Float>(len: usize) -> Result<T> {
    T::from(len).ok_or(Error::InvalidInput("length is not representable"))
}

/// Returns the midpoint of two values
///
/// # Arguments
///
/// * `lower` - The lower middle value
/// * `upper` - The upper middle value
///
/// # Returns
///
/// * `T` - The average of both values
#[inline]
pub fn midpoint<T: Float>(lower: T, upper: T) -> T {
    let _2 = T::one() + T::one();
    (lower + upper) / _2
}
