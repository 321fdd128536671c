//! Read accessors for `RingBuffer`.
//!
//! `front_nth`/`back_nth` treat an out-of-range index as a caller bug and
//! panic. `front`, `back` and `get` report the same condition as `None`.

use core::ops::{Index, IndexMut};

use crate::index::CircularIndex;
use crate::iter::{Iter, IterMut};
use crate::ring::RingBuffer;

impl<T, A: CircularIndex> RingBuffer<T, A> {
    /// Peek at the oldest item.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Peek at the newest item.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        Some(self.live(self.back_slot(0)))
    }

    /// Mutable reference to the oldest item.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.count == 0 {
            return None;
        }
        let idx = self.front_slot(0);
        Some(self.live_mut(idx))
    }

    /// Mutable reference to the newest item.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.count == 0 {
            return None;
        }
        let idx = self.back_slot(0);
        Some(self.live_mut(idx))
    }

    /// Get item by position (0 = oldest).
    #[inline]
    #[must_use]
    pub fn get(&self, n: usize) -> Option<&T> {
        if n >= self.count {
            return None;
        }
        Some(self.live(self.front_slot(n)))
    }

    /// The `n`-th item counted from the oldest. `front_nth(len - 1)` is the newest.
    ///
    /// # Panics
    ///
    /// Panics if `n >= len()`.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn front_nth(&self, n: usize) -> &T {
        self.check_position(n);
        self.live(self.front_slot(n))
    }

    /// The `n`-th item counted from the newest. `back_nth(len - 1)` is the oldest.
    ///
    /// # Panics
    ///
    /// Panics if `n >= len()`.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn back_nth(&self, n: usize) -> &T {
        self.check_position(n);
        self.live(self.back_slot(n))
    }

    /// Mutable form of [`front_nth`](Self::front_nth).
    ///
    /// # Panics
    ///
    /// Panics if `n >= len()`.
    #[inline]
    #[track_caller]
    pub fn front_nth_mut(&mut self, n: usize) -> &mut T {
        self.check_position(n);
        let idx = self.front_slot(n);
        self.live_mut(idx)
    }

    /// Mutable form of [`back_nth`](Self::back_nth).
    ///
    /// # Panics
    ///
    /// Panics if `n >= len()`.
    #[inline]
    #[track_caller]
    pub fn back_nth_mut(&mut self, n: usize) -> &mut T {
        self.check_position(n);
        let idx = self.back_slot(n);
        self.live_mut(idx)
    }

    /// Iterate oldest to newest.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, A> {
        Iter::new(self)
    }

    /// Iterate mutably, oldest to newest.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    #[inline]
    #[track_caller]
    fn check_position(&self, n: usize) {
        assert!(
            n < self.count,
            "ring position {n} out of range for ring of length {}",
            self.count
        );
    }

    #[inline]
    pub(crate) fn live(&self, idx: usize) -> &T {
        match &self.buffer[idx] {
            Some(item) => item,
            None => unreachable!("slot {idx} is within the live range but vacant"),
        }
    }

    #[inline]
    fn live_mut(&mut self, idx: usize) -> &mut T {
        match &mut self.buffer[idx] {
            Some(item) => item,
            None => unreachable!("slot {idx} is within the live range but vacant"),
        }
    }
}

impl<T, A: CircularIndex> Index<usize> for RingBuffer<T, A> {
    type Output = T;

    /// Same as [`RingBuffer::front_nth`].
    #[inline]
    #[track_caller]
    fn index(&self, n: usize) -> &T {
        self.front_nth(n)
    }
}

impl<T, A: CircularIndex> IndexMut<usize> for RingBuffer<T, A> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, n: usize) -> &mut T {
        self.front_nth_mut(n)
    }
}
