//! Error types for ring construction and insertion.

use core::fmt;

use snafu::Snafu;

/// Error constructing a ring with a capacity its index policy cannot serve.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CapacityError {
    /// The index policy does not support this capacity.
    #[snafu(display("capacity {capacity} is not supported by the {policy} index policy"))]
    Unsupported {
        /// Requested capacity.
        capacity: usize,
        /// Name of the rejecting policy.
        policy: &'static str,
    },
}

/// Error returned by non-overwriting pushes.
///
/// Carries the rejected item back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError<T> {
    /// The ring has no free slot.
    Full(T),
}

impl<T> PushError<T> {
    /// Recover the rejected item.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            PushError::Full(item) => item,
        }
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full(_) => f.write_str("ring is full"),
        }
    }
}

impl<T: fmt::Debug> core::error::Error for PushError<T> {}
