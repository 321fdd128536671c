//! Push/pop accounting.

/// Monotonic operation counters for a [`RingBuffer`](crate::RingBuffer).
///
/// Diagnostic only; no ring operation reads them back. For a ring with
/// non-zero capacity, since the last `clear` and `reset_stats`,
/// `len == pushed - popped - overwritten`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct RingStats {
    /// Items passed to `push_back`, including ones dropped by a zero-capacity ring.
    pub pushed: u64,
    /// Items removed by `pop_front` or `pop_back`.
    pub popped: u64,
    /// Live items discarded because a push hit a full ring.
    pub overwritten: u64,
}

impl RingStats {
    /// Items that went through the ring and left it, either way.
    #[inline]
    #[must_use]
    pub const fn retired(&self) -> u64 {
        self.popped + self.overwritten
    }
}
