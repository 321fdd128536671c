//! Saturating occupancy counter.

/// Counting clamped to `lower <= count <= upper`.
///
/// Saturation is the defined behavior: incrementing at `upper` or
/// decrementing at `lower` returns the count unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaturatingCounter;

impl SaturatingCounter {
    /// `count + 1` if `count < upper`, else `count`.
    #[inline]
    #[must_use]
    pub const fn increment(count: usize, upper: usize) -> usize {
        if count < upper { count + 1 } else { count }
    }

    /// `count - 1` if `count > lower`, else `count`.
    #[inline]
    #[must_use]
    pub const fn decrement(count: usize, lower: usize) -> usize {
        if count > lower { count - 1 } else { count }
    }
}
