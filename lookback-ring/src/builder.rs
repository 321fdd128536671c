//! Builder pattern for constructing ring buffers.

use core::marker::PhantomData;

use crate::{
    RingBuffer,
    error::CapacityError,
    index::{CircularIndex, ModuloIndex, PowerOfTwoIndex},
};

/// Builder for constructing a [`RingBuffer`].
///
/// Created via [`RingBuffer::builder()`]. Configure options with chained
/// methods, then call [`.build()`](Self::build) to construct the ring.
///
/// # Example
///
/// ```
/// use lookback_ring::{ModuloIndex, PowerOfTwoIndex, RingBuffer};
///
/// // Default: modulo arithmetic, any capacity
/// let ring: RingBuffer<u64> = RingBuffer::builder().capacity(100).build().unwrap();
///
/// // Bit-mask arithmetic rejects capacities that are not powers of two
/// let err = RingBuffer::<u64>::builder().capacity(100).power_of_two().build();
/// assert!(err.is_err());
///
/// // Any policy by type
/// let ring = RingBuffer::<u64>::builder()
///     .capacity(8)
///     .arithmetic::<PowerOfTwoIndex>()
///     .arithmetic::<ModuloIndex>()
///     .build()
///     .unwrap();
/// assert_eq!(ring.capacity(), 8);
/// ```
pub struct RingBuilder<T, A: CircularIndex = ModuloIndex> {
    capacity: usize,
    _marker: PhantomData<(fn() -> T, A)>,
}

impl<T> RingBuilder<T, ModuloIndex> {
    pub(crate) fn new() -> Self {
        Self {
            capacity: 0,
            _marker: PhantomData,
        }
    }
}

impl<T, A: CircularIndex> RingBuilder<T, A> {
    /// Set the number of slots. Defaults to 0.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Use the index policy `B`.
    #[must_use]
    pub fn arithmetic<B: CircularIndex>(self) -> RingBuilder<T, B> {
        RingBuilder {
            capacity: self.capacity,
            _marker: PhantomData,
        }
    }

    /// Use bit-mask index arithmetic. The capacity must be a power of two.
    #[must_use]
    pub fn power_of_two(self) -> RingBuilder<T, PowerOfTwoIndex> {
        self.arithmetic()
    }

    /// Build the [`RingBuffer`].
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::Unsupported`] if the chosen index policy
    /// cannot serve the configured capacity.
    pub fn build(self) -> Result<RingBuffer<T, A>, CapacityError> {
        RingBuffer::try_with_capacity(self.capacity)
    }
}
