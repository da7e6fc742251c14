//! Arithmetic helpers

use crate::types::LibraryError;

/// Square root of `x`
///
/// # Errors
///
/// Returns [`LibraryError::NegativeArgument`] if `x` is negative.
pub fn my_sqrt(x: f64) -> Result<f64, LibraryError> {
    if x < 0.0 {
        return Err(LibraryError::negative_argument(x));
    }

    Ok(x.sqrt())
}

/// Sum of `a` and `b`
///
/// # Errors
///
/// Returns [`LibraryError::ArithmeticOverflow`] if the sum does not fit in an `i32`.
pub fn my_add(a: i32, b: i32) -> Result<i32, LibraryError> {
    a.checked_add(b)
        .ok_or_else(|| LibraryError::arithmetic_overflow("add"))
}

/// Whether `x` is non-negative (zero counts as positive)
pub fn is_positive(x: i32) -> bool {
    x >= 0
}

/// Number of values for which [`is_positive`] holds
pub fn count_positives(values: &[i32]) -> usize {
    values.iter().copied().filter(|&x| is_positive(x)).count()
}
