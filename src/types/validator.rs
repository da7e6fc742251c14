//! Inclusive integer range validator

/// Checks membership in the closed interval `[low, high]`
///
/// `low <= high` is assumed but not enforced; an inverted range simply
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    low: i32,
    high: i32,
}

impl Validator {
    /// Create a validator for `[low, high]`
    pub const fn new(low: i32, high: i32) -> Self {
        Validator { low, high }
    }

    /// Whether `value` lies within the range, both ends included
    pub fn in_range(&self, value: i32) -> bool {
        let inside = self.low <= value && value <= self.high;
        tracing::trace!(value, low = self.low, high = self.high, inside, "range check");
        inside
    }
}
