use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Extends functionality for slices of sampled `f64` values
pub trait SliceExt {
    /// Find the minimum value in a slice of samples
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use ftools_utils::SliceExt;
    /// # use ftools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f64::MIN, 2.2].try_min(), Ok(f64::MIN));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// Uses `total_cmp` so that an ordering always exists, in accordance with
    /// the IEEE 754 (2008 revision) totalOrder predicate.
    fn try_min(&self) -> Result<f64>;

    /// Find the maximum value in a slice of samples
    ///
    /// Same rules as [SliceExt::try_min()].
    ///
    /// ```rust
    /// # use ftools_utils::SliceExt;
    /// # use ftools_utils::Error;
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    /// assert_eq!([1.1, f64::INFINITY].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    fn try_max(&self) -> Result<f64>;

    /// Find index bin containing 'value', where bins are low <= value < high
    ///
    /// A value on a bin edge returns the bin above. Values equal to the highest
    /// bound are considered part of the last bin so that a sample sitting on
    /// the top of a histogram grid is still tallied.
    ///
    /// ```text
    ///     edges  : 0.0 0.1 1.0 20.0
    ///     0.0 <= bin 0 < 0.1
    ///     0.1 <= bin 1 < 1.0
    ///     1.0 <= bin 2 <= 20.0
    /// ```
    ///
    /// ```rust
    /// # use ftools_utils::SliceExt;
    /// let edges = vec![0.0, 0.1, 1.0, 20.0];
    ///
    /// assert_eq!(edges.find_bin_exclusive(0.0), Ok(0));
    /// assert_eq!(edges.find_bin_exclusive(0.5), Ok(1));
    /// assert_eq!(edges.find_bin_exclusive(1.0), Ok(2));
    /// assert_eq!(edges.find_bin_exclusive(20.0), Ok(2));
    ///
    /// // Values outside the bin bounds are an error case
    /// assert!(edges.find_bin_exclusive(-1.0).is_err());
    /// assert!(edges.find_bin_exclusive(21.0).is_err());
    /// ```
    fn find_bin_exclusive(&self, value: f64) -> Result<usize>;
}

impl SliceExt for [f64] {
    fn try_min(&self) -> Result<f64> {
        extreme(self, Ordering::Less)
    }

    fn try_max(&self) -> Result<f64> {
        extreme(self, Ordering::Greater)
    }

    fn find_bin_exclusive(&self, value: f64) -> Result<usize> {
        let n = self.len();
        if n < 2 {
            return Err(Error::BelowMinimumSliceLength {
                length: n,
                minimum_required: 2,
            });
        }

        let (lower_bound, upper_bound) = (self[0], self[n - 1]);
        if !(lower_bound..=upper_bound).contains(&value) {
            return Err(Error::ValueOutsideOfBounds {
                value,
                lower_bound,
                upper_bound,
            });
        }

        if value == upper_bound {
            return Ok(n - 2);
        }

        // edges are ascending, so the first upper edge above the value wins
        let index = self[1..].partition_point(|high| *high <= value);
        Ok(index.min(n - 2))
    }
}

/// Shared min/max search, `wanted` is the ordering a new extreme must have
fn extreme(values: &[f64], wanted: Ordering) -> Result<f64> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::SliceContainsUndefinedValues);
    }

    values
        .iter()
        .copied()
        .reduce(|best, v| if v.total_cmp(&best) == wanted { v } else { best })
        .ok_or(Error::SliceContainsNoValues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_on_edges() {
        let edges = [1.0, 2.0, 3.0];
        assert_eq!(edges.find_bin_exclusive(1.0), Ok(0));
        assert_eq!(edges.find_bin_exclusive(1.999), Ok(0));
        assert_eq!(edges.find_bin_exclusive(2.0), Ok(1));
        assert_eq!(edges.find_bin_exclusive(3.0), Ok(1));
    }

    #[test]
    fn too_few_edges() {
        assert_eq!(
            [1.0].find_bin_exclusive(1.0),
            Err(Error::BelowMinimumSliceLength {
                length: 1,
                minimum_required: 2
            })
        );
    }

    #[test]
    fn extremes_with_negatives() {
        let values = [-3.0, 4.5, 0.0, -7.25];
        assert_eq!(values.try_min(), Ok(-7.25));
        assert_eq!(values.try_max(), Ok(4.5));
    }
}
