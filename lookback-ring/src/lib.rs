//! Fixed-capacity, double-ended ring buffer for bounded history windows.
//!
//! [`RingBuffer`] allocates its storage once. Pushing past capacity
//! overwrites the oldest item instead of growing. Items can be popped or
//! peeked at either end, and indexed from either end.
//!
//! Index arithmetic is a [`CircularIndex`] policy: [`ModuloIndex`] for any
//! capacity, [`PowerOfTwoIndex`] for bit-mask arithmetic on power-of-two
//! capacities.
//!
//! ```
//! use lookback_ring::RingBuffer;
//!
//! let mut window = RingBuffer::new(5);
//! for sample in 0..7 {
//!     window.push_back(sample);
//! }
//!
//! assert_eq!(window.len(), 5);
//! assert_eq!(window.front(), Some(&2));
//! assert_eq!(*window.back_nth(1), 5);
//! assert_eq!(window.iter().sum::<i32>(), 2 + 3 + 4 + 5 + 6);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod builder;
mod counter;
mod error;
mod index;
mod iter;
mod read;
mod ring;
mod stats;
mod traits;

#[cfg(test)]
mod tests;

pub use builder::RingBuilder;
pub use counter::SaturatingCounter;
pub use error::{CapacityError, PushError};
pub use index::{CircularIndex, ModuloIndex, PowerOfTwoIndex};
pub use iter::{IntoIter, Iter, IterMut};
pub use ring::{Drain, RingBuffer};
pub use stats::RingStats;
pub use traits::{RingConsumer, RingInfo, RingProducer, RingTrait};
