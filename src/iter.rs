use core::iter::FusedIterator;
use core::slice;

use crate::array::Array;
use crate::utils::{count, wrap_add, wrap_sub};
use crate::RingBuffer;

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Iter<'a, T: 'a> {
    ring: &'a [T],
    /// Next slot yielded from the front.
    head: usize,
    /// One past the next slot yielded from the back.
    tail: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(ring: &'a [T], head: usize, tail: usize) -> Self {
        Iter { ring, head, tail }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.tail == self.head {
            return None;
        }
        let head = self.head;
        self.head = wrap_add(self.head, 1, self.ring.len());
        self.ring.get(head)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = count(self.head, self.tail, self.ring.len());
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.tail == self.head {
            return None;
        }
        self.tail = wrap_sub(self.tail, 1, self.ring.len());
        self.ring.get(self.tail)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// `RingBuffer` mutable iterator
///
/// Walks the two contiguous runs of live slots, the one starting at the
/// front element first.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct IterMut<'a, T: 'a> {
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new(front: &'a mut [T], back: &'a mut [T]) -> Self {
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.front.next() {
            Some(elem) => Some(elem),
            None => self.back.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.back.next_back() {
            Some(elem) => Some(elem),
            None => self.front.next_back(),
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// By-value `RingBuffer` iterator
///
/// Elements are moved out of their slots, which are left holding
/// `Default::default()`.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<A: Array> {
    inner: RingBuffer<A>,
}

impl<A: Array> IntoIter<A> {
    #[inline]
    pub(crate) fn new(inner: RingBuffer<A>) -> Self {
        IntoIter { inner }
    }
}

impl<A: Array> Iterator for IntoIter<A>
    where A::Item: Default
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        self.inner.take_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<A: Array> DoubleEndedIterator for IntoIter<A>
    where A::Item: Default
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        self.inner.take_back()
    }
}

impl<A: Array> ExactSizeIterator for IntoIter<A> where A::Item: Default {}

impl<A: Array> FusedIterator for IntoIter<A> where A::Item: Default {}
