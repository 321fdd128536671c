//! Circular index arithmetic.
//!
//! A [`CircularIndex`] maps physical slot indices onto `[0, capacity)`. The
//! ring only ever touches storage through these four operations, so swapping
//! the policy changes how indices are computed without changing which slot a
//! logical position resolves to.
//!
//! All functions require `capacity > 0` and `index < capacity`. Zero-capacity
//! rings never call into the policy.

/// Index arithmetic policy for a ring of a given capacity.
pub trait CircularIndex {
    /// Human-readable policy name, used in error messages.
    const NAME: &'static str;

    /// Returns `true` if this policy produces correct indices for `capacity`.
    fn supports(capacity: usize) -> bool;

    /// Advance `index` by one, wrapping to 0 at `capacity`.
    fn increment(index: usize, capacity: usize) -> usize;

    /// Retreat `index` by one, wrapping from 0 to `capacity - 1`.
    fn decrement(index: usize, capacity: usize) -> usize;

    /// `(index + delta) mod capacity`. `delta` may exceed `capacity`.
    fn add(index: usize, delta: usize, capacity: usize) -> usize;

    /// `(index - delta) mod capacity`, never underflowing. `delta` may exceed
    /// both `index` and `capacity`.
    fn subtract(index: usize, delta: usize, capacity: usize) -> usize;
}

/// Modulo arithmetic, valid for every non-zero capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuloIndex;

impl CircularIndex for ModuloIndex {
    const NAME: &'static str = "modulo";

    #[inline]
    fn supports(_capacity: usize) -> bool {
        true
    }

    #[inline]
    fn increment(index: usize, capacity: usize) -> usize {
        let next = index + 1;
        if next == capacity { 0 } else { next }
    }

    #[inline]
    fn decrement(index: usize, capacity: usize) -> usize {
        if index == 0 { capacity - 1 } else { index - 1 }
    }

    #[inline]
    fn add(index: usize, delta: usize, capacity: usize) -> usize {
        // index < capacity, so reducing delta first keeps the sum below 2 * capacity.
        (index + delta % capacity) % capacity
    }

    #[inline]
    fn subtract(index: usize, delta: usize, capacity: usize) -> usize {
        (index + capacity - delta % capacity) % capacity
    }
}

/// Bit-mask arithmetic for power-of-two capacities.
///
/// Replaces every modulo with `& (capacity - 1)`. Rings built with this policy
/// reject other capacities at construction (see [`CircularIndex::supports`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerOfTwoIndex;

impl PowerOfTwoIndex {
    #[inline]
    const fn mask(capacity: usize) -> usize {
        capacity - 1
    }
}

impl CircularIndex for PowerOfTwoIndex {
    const NAME: &'static str = "power-of-two";

    #[inline]
    fn supports(capacity: usize) -> bool {
        capacity == 0 || capacity.is_power_of_two()
    }

    #[inline]
    fn increment(index: usize, capacity: usize) -> usize {
        (index + 1) & Self::mask(capacity)
    }

    #[inline]
    fn decrement(index: usize, capacity: usize) -> usize {
        index.wrapping_sub(1) & Self::mask(capacity)
    }

    #[inline]
    fn add(index: usize, delta: usize, capacity: usize) -> usize {
        index.wrapping_add(delta) & Self::mask(capacity)
    }

    #[inline]
    fn subtract(index: usize, delta: usize, capacity: usize) -> usize {
        index.wrapping_sub(delta) & Self::mask(capacity)
    }
}
