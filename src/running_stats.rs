use num_traits::Float;

use crate::{Error, Result, helper::len_t};

/// A running accumulator of sum, minimum, maximum and count
///
/// Values are folded in one at a time with [`RunningStats::push`]; nothing is retained
/// apart from the four aggregates, so memory use is constant however many values are
/// observed. The accumulator is either empty (`count() == 0`) or accumulating, and
/// [`RunningStats::reset`] returns it to the empty state at any time.
///
/// While empty the sum is zero and the extremes are not observable: [`RunningStats::min`],
/// [`RunningStats::max`] and [`RunningStats::average`] return `InvalidInput`.
///
/// # Examples
///
/// ```
/// use awesome_calc::RunningStats;
///
/// let mut stats = RunningStats::new();
/// stats.push(10.0).push(20.0).push(30.0);
///
/// assert_eq!(stats.count(), 3);
/// assert_eq!(stats.sum(), 60.0);
/// assert_eq!(stats.average(), Ok(20.0));
/// assert_eq!(stats.min(), Ok(10.0));
/// assert_eq!(stats.max(), Ok(30.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningStats<T> {
    /// Running total in push order
    sum: T,
    /// Smallest observed value, meaningless while empty
    min: T,
    /// Largest observed value, meaningless while empty
    max: T,
    /// Number of observed values
    count: usize,
}

impl<T: Float> RunningStats<T> {
    /// Creates an empty accumulator
    ///
    /// # Returns
    ///
    /// * `Self` - The accumulator with no observations
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            min: T::zero(),
            max: T::zero(),
            count: 0,
        }
    }

    /// Records one observation
    ///
    /// The first value after creation or reset becomes both the minimum and the maximum.
    ///
    /// # Arguments
    ///
    /// * `value` - The observed value
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The accumulator
    pub fn push(&mut self, value: T) -> &mut Self {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            if value < self.min {
                self.min = value;
            }
            if value > self.max {
                self.max = value;
            }
        }
        self.sum = self.sum + value;
        self.count += 1;
        self
    }

    /// Discards every observation
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The accumulator
    pub fn reset(&mut self) -> &mut Self {
        self.sum = T::zero();
        self.min = T::zero();
        self.max = T::zero();
        self.count = 0;
        self
    }

    /// Returns the number of observed values
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if nothing has been observed since creation or the last reset
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the running sum, zero when empty
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Returns the average of the observed values
    ///
    /// # Returns
    ///
    /// * `Result<T>` - `sum / count`, or `InvalidInput` if nothing has been observed
    pub fn average(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::InvalidInput("no data to average"));
        }
        Ok(self.sum / len_t(self.count)?)
    }

    /// Returns the smallest observed value
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The minimum, or `InvalidInput` if nothing has been observed
    pub fn min(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::InvalidInput("no data for min"));
        }
        Ok(self.min)
    }

    /// Returns the largest observed value
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The maximum, or `InvalidInput` if nothing has been observed
    pub fn max(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::InvalidInput("no data for max"));
        }
        Ok(self.max)
    }
}

impl<T: Float> Extend<T> for RunningStats<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Float> FromIterator<T> for RunningStats<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
