use crate::error::PushError;

/// Common ring buffer properties.
/// Provides size and capacity information shared by both producers and consumers.
pub trait RingInfo {
    /// Returns the number of items currently in the ring.
    fn len(&self) -> usize;

    /// Returns the total capacity of the ring.
    fn capacity(&self) -> usize;

    /// Returns `true` if the ring contains no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the next overwriting push would discard an item.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Producer side of a ring buffer.
///
/// See [`RingBuffer`](crate::RingBuffer) for the primary implementation.
pub trait RingProducer<T>: RingInfo {
    /// Pushes an item at the back, discarding the oldest item if the ring is full.
    fn push_back(&mut self, item: T);

    /// Pushes an item at the back only if a slot is free.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Full`] carrying the item if the ring is full.
    fn try_push_back(&mut self, item: T) -> Result<(), PushError<T>>;
}

/// Consumer side of a ring buffer.
///
/// Methods for reading and removing items at either end.
///
/// See [`RingBuffer`](crate::RingBuffer) for the primary implementation.
pub trait RingConsumer<T>: RingInfo {
    /// Removes the oldest item. Returns `None` if the ring is empty.
    #[must_use]
    fn pop_front(&mut self) -> Option<T>;

    /// Removes the newest item. Returns `None` if the ring is empty.
    #[must_use]
    fn pop_back(&mut self) -> Option<T>;

    /// Returns a reference to the oldest item without removing it.
    #[must_use]
    fn peek_front(&self) -> Option<&T>;

    /// Returns a reference to the newest item without removing it.
    #[must_use]
    fn peek_back(&self) -> Option<&T>;
}

/// Combined producer and consumer trait.
///
/// Automatically implemented for any type that implements both
/// [`RingProducer`] and [`RingConsumer`].
pub trait RingTrait<T>: RingProducer<T> + RingConsumer<T> {}

impl<T, R: RingProducer<T> + RingConsumer<T>> RingTrait<T> for R {}
