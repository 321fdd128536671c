//! Fixed-capacity ring that overwrites its oldest item when full.

use alloc::boxed::Box;
use core::{fmt, marker::PhantomData, ops::Range};

use snafu::ensure;

use crate::{
    builder::RingBuilder,
    counter::SaturatingCounter,
    error::{CapacityError, PushError, UnsupportedSnafu},
    index::{CircularIndex, ModuloIndex},
    stats::RingStats,
    traits::{RingConsumer, RingInfo, RingProducer},
};

/// Double-ended ring buffer with a capacity fixed at construction.
///
/// Items are pushed at the back. Once the ring is full, each push overwrites
/// the oldest item. Items can be popped or peeked from either end.
///
/// Live items occupy the `len` slots immediately preceding the write cursor,
/// oldest first. A slot is `Some` exactly when it holds a live item.
///
/// A capacity of zero is legal: the ring is then always empty and always
/// full, and `push_back` drops its argument.
///
/// Not synchronized. Wrap it in a lock to share it between threads.
///
/// # Example
///
/// ```
/// use lookback_ring::RingBuffer;
///
/// let mut ring = RingBuffer::new(3);
/// ring.extend([1, 2, 3, 4]);
///
/// assert_eq!(ring.front(), Some(&2));
/// assert_eq!(ring.back(), Some(&4));
/// assert_eq!(ring.pop_back(), Some(4));
/// assert_eq!(ring.pop_front(), Some(2));
/// assert_eq!(ring.len(), 1);
/// ```
pub struct RingBuffer<T, A: CircularIndex = ModuloIndex> {
    pub(crate) buffer: Box<[Option<T>]>,
    pub(crate) write_cursor: usize,
    pub(crate) count: usize,
    stats: RingStats,
    _policy: PhantomData<A>,
}

impl<T> RingBuffer<T, ModuloIndex> {
    /// Create an empty ring holding at most `capacity` items.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::allocate(capacity)
    }

    /// Create a builder for configuring a [`RingBuffer`].
    ///
    /// # Example
    ///
    /// ```
    /// use lookback_ring::{PowerOfTwoIndex, RingBuffer};
    ///
    /// let ring: RingBuffer<u64, PowerOfTwoIndex> = RingBuffer::builder()
    ///     .capacity(64)
    ///     .power_of_two()
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(ring.capacity(), 64);
    /// ```
    pub fn builder() -> RingBuilder<T> {
        RingBuilder::new()
    }
}

impl<T, A: CircularIndex> RingBuffer<T, A> {
    /// Create an empty ring using the index policy `A`.
    ///
    /// # Panics
    ///
    /// Panics if `A` does not support `capacity`. Use
    /// [`try_with_capacity`](Self::try_with_capacity) to handle that case.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(ring) => ring,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an empty ring using the index policy `A`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::Unsupported`] if `A` cannot index a ring of
    /// `capacity` slots.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        ensure!(
            A::supports(capacity),
            UnsupportedSnafu {
                capacity,
                policy: A::NAME,
            }
        );
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        Self {
            buffer: (0..capacity).map(|_| None).collect(),
            write_cursor: 0,
            count: 0,
            stats: RingStats::default(),
            _policy: PhantomData,
        }
    }

    /// Push an item at the back. If full, the oldest item is dropped.
    #[inline]
    pub fn push_back(&mut self, item: T) {
        let capacity = self.capacity();
        self.stats.pushed += 1;
        if capacity == 0 {
            return;
        }
        if self.count == capacity {
            self.stats.overwritten += 1;
        }

        self.buffer[self.write_cursor] = Some(item);
        self.count = SaturatingCounter::increment(self.count, capacity);
        self.write_cursor = A::increment(self.write_cursor, capacity);
    }

    /// Push an item at the back only if a slot is free.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Full`] with the item if the ring is full.
    #[inline]
    pub fn try_push_back(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.is_full() {
            return Err(PushError::Full(item));
        }
        self.push_back(item);
        Ok(())
    }

    /// Remove and return the oldest item.
    #[inline]
    #[must_use]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let idx = self.front_slot(0);
        self.count = SaturatingCounter::decrement(self.count, 0);
        self.stats.popped += 1;
        self.buffer[idx].take()
    }

    /// Remove and return the newest item, undoing the latest push.
    #[inline]
    #[must_use]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        self.write_cursor = A::decrement(self.write_cursor, self.capacity());
        self.count = SaturatingCounter::decrement(self.count, 0);
        self.stats.popped += 1;
        self.buffer[self.write_cursor].take()
    }

    /// Drop every item and rewind the write cursor to slot 0.
    ///
    /// Capacity and stats are kept.
    pub fn clear(&mut self) {
        for slot in self.buffer.iter_mut() {
            *slot = None;
        }
        self.count = 0;
        self.write_cursor = 0;
    }

    /// Number of items in the ring.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Maximum number of items the ring holds.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// True if the ring holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True if the next push will overwrite the oldest item.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Operation counters since construction or the last [`reset_stats`](Self::reset_stats).
    #[inline]
    pub fn stats(&self) -> RingStats {
        self.stats
    }

    /// Zero the operation counters.
    pub fn reset_stats(&mut self) {
        self.stats = RingStats::default();
    }

    /// Remove items oldest to newest through an iterator.
    ///
    /// Items the iterator does not yield stay in the ring.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T, A> {
        Drain { ring: self }
    }

    /// Physical slot of the `n`-th item counted from the oldest.
    #[inline]
    pub(crate) fn front_slot(&self, n: usize) -> usize {
        A::subtract(self.write_cursor, self.count - n, self.capacity())
    }

    /// Physical slot of the `n`-th item counted from the newest.
    #[inline]
    pub(crate) fn back_slot(&self, n: usize) -> usize {
        A::subtract(self.write_cursor, n + 1, self.capacity())
    }

    /// Physical ranges holding live items, oldest first. The second range is
    /// empty unless the live items wrap past the end of storage.
    pub(crate) fn live_ranges(&self) -> (Range<usize>, Range<usize>) {
        if self.count == 0 {
            return (0..0, 0..0);
        }
        let capacity = self.capacity();
        let start = self.front_slot(0);
        let end = start + self.count;
        if end <= capacity {
            (start..end, 0..0)
        } else {
            (start..capacity, 0..end - capacity)
        }
    }
}

/// Draining iterator over a [`RingBuffer`].
pub struct Drain<'a, T, A: CircularIndex = ModuloIndex> {
    ring: &'a mut RingBuffer<T, A>,
}

impl<T, A: CircularIndex> Iterator for Drain<'_, T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.ring.len();
        (len, Some(len))
    }
}

impl<T, A: CircularIndex> DoubleEndedIterator for Drain<'_, T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.ring.pop_back()
    }
}

impl<T, A: CircularIndex> ExactSizeIterator for Drain<'_, T, A> {}

impl<T, A: CircularIndex> core::iter::FusedIterator for Drain<'_, T, A> {}

impl<T, A: CircularIndex> Extend<T> for RingBuffer<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, A: CircularIndex> Default for RingBuffer<T, A> {
    /// A zero-capacity ring.
    fn default() -> Self {
        Self::allocate(0)
    }
}

impl<T: Clone, A: CircularIndex> Clone for RingBuffer<T, A> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            write_cursor: self.write_cursor,
            count: self.count,
            stats: self.stats,
            _policy: PhantomData,
        }
    }
}

impl<T: fmt::Debug, A: CircularIndex> fmt::Debug for RingBuffer<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Items<'a, T, A: CircularIndex>(&'a RingBuffer<T, A>);

        impl<T: fmt::Debug, A: CircularIndex> fmt::Debug for Items<'_, T, A> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("items", &Items(self))
            .finish()
    }
}

/// Rings compare equal when they hold equal items in the same order,
/// regardless of capacity, slot layout, or stats.
impl<T: PartialEq, A: CircularIndex, B: CircularIndex> PartialEq<RingBuffer<T, B>>
    for RingBuffer<T, A>
{
    fn eq(&self, other: &RingBuffer<T, B>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: CircularIndex> Eq for RingBuffer<T, A> {}

impl<T, A: CircularIndex> RingInfo for RingBuffer<T, A> {
    #[inline]
    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        RingBuffer::capacity(self)
    }
}

impl<T, A: CircularIndex> RingProducer<T> for RingBuffer<T, A> {
    #[inline]
    fn push_back(&mut self, item: T) {
        RingBuffer::push_back(self, item);
    }

    #[inline]
    fn try_push_back(&mut self, item: T) -> Result<(), PushError<T>> {
        RingBuffer::try_push_back(self, item)
    }
}

impl<T, A: CircularIndex> RingConsumer<T> for RingBuffer<T, A> {
    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        RingBuffer::pop_front(self)
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        RingBuffer::pop_back(self)
    }

    #[inline]
    fn peek_front(&self) -> Option<&T> {
        RingBuffer::front(self)
    }

    #[inline]
    fn peek_back(&self) -> Option<&T> {
        RingBuffer::back(self)
    }
}
