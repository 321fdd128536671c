//! Iterators for `RingBuffer`.

use core::{iter::FusedIterator, slice};

use crate::index::{CircularIndex, ModuloIndex};
use crate::ring::RingBuffer;

/// Immutable iterator, oldest to newest.
///
/// Walks logical positions `front..back` and resolves each through the ring's
/// index policy.
pub struct Iter<'a, T, A: CircularIndex = ModuloIndex> {
    ring: &'a RingBuffer<T, A>,
    front: usize,
    back: usize,
}

impl<'a, T, A: CircularIndex> Iter<'a, T, A> {
    pub(crate) fn new(ring: &'a RingBuffer<T, A>) -> Self {
        Self {
            ring,
            front: 0,
            back: ring.len(),
        }
    }
}

impl<T, A: CircularIndex> Clone for Iter<'_, T, A> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T, A: CircularIndex> Iterator for Iter<'a, T, A> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let ring = self.ring;
        let item = ring.live(ring.front_slot(self.front));
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.back - self.front {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl<T, A: CircularIndex> DoubleEndedIterator for Iter<'_, T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let ring = self.ring;
        Some(ring.live(ring.front_slot(self.back)))
    }
}

impl<T, A: CircularIndex> ExactSizeIterator for Iter<'_, T, A> {}
impl<T, A: CircularIndex> FusedIterator for Iter<'_, T, A> {}

/// Mutable iterator, oldest to newest.
///
/// Splits the live range into at most two contiguous runs of storage so that
/// each slot is borrowed exactly once.
pub struct IterMut<'a, T> {
    head: slice::IterMut<'a, Option<T>>,
    tail: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new<A: CircularIndex>(ring: &'a mut RingBuffer<T, A>) -> Self {
        let (upper, lower) = ring.live_ranges();
        let (wrapped, rest) = ring.buffer.split_at_mut(upper.start);
        Self {
            head: rest[..upper.len()].iter_mut(),
            tail: wrapped[lower].iter_mut(),
        }
    }
}

fn occupied<T>(slot: &mut Option<T>) -> &mut T {
    match slot {
        Some(item) => item,
        None => unreachable!("vacant slot inside the live range"),
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.head.next().or_else(|| self.tail.next()).map(occupied)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.head.len() + self.tail.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail
            .next_back()
            .or_else(|| self.head.next_back())
            .map(occupied)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, oldest to newest.
pub struct IntoIter<T, A: CircularIndex = ModuloIndex> {
    ring: RingBuffer<T, A>,
}

impl<T, A: CircularIndex> Iterator for IntoIter<T, A> {
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

impl<T, A: CircularIndex> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.ring.pop_back()
    }
}

impl<T, A: CircularIndex> ExactSizeIterator for IntoIter<T, A> {}
impl<T, A: CircularIndex> FusedIterator for IntoIter<T, A> {}

impl<T, A: CircularIndex> IntoIterator for RingBuffer<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { ring: self }
    }
}

impl<'a, T, A: CircularIndex> IntoIterator for &'a RingBuffer<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<'a, T, A: CircularIndex> IntoIterator for &'a mut RingBuffer<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IterMut::new(self)
    }
}
