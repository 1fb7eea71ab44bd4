//! A circular container with fixed capacity and overwrite-on-full semantics.
//!
//! It can be stored directly on the stack if needed.
//!
//! `RingBuffer` has `O(1)` amortized `push_back` and `pop_front`, `O(1)`
//! positional access through cursors, and `O(n)` insertion at an arbitrary
//! position. Writing to a full container silently evicts its oldest element,
//! which makes it a natural sliding window over the most recent values.
//!
//! # Feature Flags
//! The **circular-container** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for `RingBuffer` storage.
//!
//!
//! - `serde`
//!   - Optional
//!   - Serialize a `RingBuffer` as the sequence of its elements, front to
//!     back, and deserialize it from any sequence.
//!
//! # Capacity
//!
//! Note that the `capacity()` is always `backed_array.len() - 1`: one slot is
//! kept free so that `head == tail` always means "empty".
//! [Read more]
//!
//! [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Examples
//! ```
//! use circular_container::RingBuffer;
//!
//! let mut window: RingBuffer<[_; 6]> = RingBuffer::new();
//! assert_eq!(window.capacity(), 5);
//!
//! for sample in [10, 20, 30, 40, 50] {
//!     window.push_back(sample);
//! }
//! assert!(window.is_full());
//!
//! // full: the oldest sample makes room for the new one
//! window.push_back(60);
//! assert_eq!(window.front(), Ok(&20));
//! assert_eq!(window.back(), Ok(&60));
//!
//! window.pop_front();
//! assert_eq!(window.front(), Ok(&30));
//! assert_eq!(window.len(), 4);
//! ```
//!
//! # Cursors
//!
//! Cursors are positions into a container. Forward cursors walk from the
//! oldest to the newest element, reverse cursors the other way round.
//! A cursor borrows its container, so it stays valid until the container is
//! next mutated; a [`Position`] taken from a cursor can be handed back to
//! [`RingBuffer::insert`].
//!
//! ```
//! use circular_container::RingBuffer;
//!
//! let mut ring: RingBuffer<[_; 6]> = vec![1, 2, 4].into_iter().collect();
//!
//! let mut cursor = ring.begin();
//! cursor.move_next();
//! cursor.move_next();
//! assert_eq!(cursor.current(), Some(&4));
//!
//! let pos = cursor.position();
//! ring.insert(pos, 3);
//! assert_eq!(ring, vec![1, 2, 3, 4]);
//!
//! let mut backwards: Vec<&i32> = Vec::new();
//! let mut rev = ring.rbegin();
//! while rev != ring.rend() {
//!     backwards.extend(rev.current());
//!     rev.move_next();
//! }
//! assert_eq!(backwards, vec![&4, &3, &2, &1]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#![deny(missing_docs)]

use core::mem;

mod array;
mod cursor;
pub mod error;
mod iter;
mod rev_cursor;
#[cfg(feature = "serde")]
mod serde;
mod trait_impls;
mod utils;

pub use array::Array;
pub use cursor::{Cursor, CursorMut, Position};
pub use error::EmptyContainer;
pub use iter::{IntoIter, Iter, IterMut};
pub use rev_cursor::{RevCursor, RevCursorMut};

use utils::*;

/// A fixed capacity ring buffer.
///
/// It can be stored directly on the stack if needed.
///
/// The backing array `A` holds one slot more than the capacity. Every slot
/// always holds a valid value; slots outside the live range keep whatever
/// was last written there (or `Default::default()`), and are only dropped
/// when overwritten or when the container itself is dropped.
///
/// The "default" usage of this type as a queue is to use `push_back` to add
/// to the queue, and `pop_front` to remove from the queue. `extend` pushes
/// onto the back in this manner, and iterating over `RingBuffer` goes front
/// to back.
///
/// # Capacity
///
/// Note that the `capacity()` is always `backed_array.len() - 1`.
/// [Read more]
///
/// [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
#[derive(Clone, Copy)]
pub struct RingBuffer<A: Array> {
    slots: A,
    /// Slot of the oldest element.
    head: usize,
    /// Slot the next element gets written to.
    tail: usize,
    size: usize,
}

impl<A: Array> RingBuffer<A> {
    #[inline]
    fn slot_count() -> usize {
        A::slot_count()
    }

    #[inline]
    fn advance(index: usize) -> usize {
        advance(index, Self::slot_count())
    }

    #[inline]
    fn retreat(index: usize) -> usize {
        retreat(index, Self::slot_count())
    }

    #[inline]
    pub(crate) fn head_index(&self) -> usize {
        self.head
    }

    #[inline]
    pub(crate) fn tail_index(&self) -> usize {
        self.tail
    }

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> &A::Item {
        &self.slots.as_slice()[index]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut A::Item {
        &mut self.slots.as_mut_slice()[index]
    }

    /// Whether `index` names a slot holding a live element.
    #[inline]
    pub(crate) fn is_live(&self, index: usize) -> bool {
        index < Self::slot_count() && count(self.head, index, Self::slot_count()) < self.size
    }

    /// Whether an element may be inserted at `index`, i.e. `index` lies in
    /// `begin()..=end()`.
    #[inline]
    fn is_insert_position(&self, index: usize) -> bool {
        index < Self::slot_count() && count(self.head, index, Self::slot_count()) <= self.size
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.size <= self.capacity(),
                      "size={} cap={}",
                      self.size,
                      self.capacity());
        debug_assert_eq!(self.tail,
                         wrap_add(self.head, self.size, Self::slot_count()),
                         "head={} tail={} size={} slots={}",
                         self.head,
                         self.tail,
                         self.size,
                         Self::slot_count());
    }

    /// Accounts for an element just written to the `tail` slot, evicting
    /// the oldest element if the container was full.
    #[inline]
    fn commit_write(&mut self) {
        let was_full = self.is_full();
        self.tail = Self::advance(self.tail);
        if !was_full {
            self.size += 1;
        }
        if self.tail == self.head {
            self.head = Self::advance(self.head);
            self.size = self.capacity();
        }
        self.debug_check();
    }
}

impl<A: Array> RingBuffer<A>
    where A::Item: Default
{
    /// Creates an empty `RingBuffer`.
    ///
    /// Every slot of the backing array is filled with `Default::default()`.
    ///
    /// # Panics
    ///
    /// Panics if the backing array has no slot at all. A single slot gives
    /// a container of capacity zero, which stays empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let ring: RingBuffer<[usize; 3]> = RingBuffer::new();
    /// assert!(ring.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        assert!(A::slot_count() >= 1,
                "a RingBuffer needs at least one slot, got {}",
                A::slot_count());
        RingBuffer {
            slots: A::from_fn(|_| Default::default()),
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    /// Removes the front element and returns it, or `None` if the
    /// container is empty.
    ///
    /// The vacated slot is left holding `Default::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 3]> = RingBuffer::new();
    /// ring.push_back(String::from("a"));
    /// assert_eq!(ring.take_front(), Some(String::from("a")));
    /// assert_eq!(ring.take_front(), None);
    /// ```
    pub fn take_front(&mut self) -> Option<A::Item> {
        if self.is_empty() {
            return None;
        }
        let head = self.head;
        let element = mem::take(self.slot_mut(head));
        self.pop_front();
        Some(element)
    }

    pub(crate) fn take_back(&mut self) -> Option<A::Item> {
        if self.is_empty() {
            return None;
        }
        self.tail = Self::retreat(self.tail);
        self.size -= 1;
        self.debug_check();
        let tail = self.tail;
        Some(mem::take(self.slot_mut(tail)))
    }
}

impl<A: Array> RingBuffer<A> {
    /// Returns the number of elements the `RingBuffer` can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let ring: RingBuffer<[usize; 4]> = RingBuffer::new();
    /// assert_eq!(ring.capacity(), 3);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        Self::slot_count() - 1
    }

    /// Returns the number of elements in the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut v: RingBuffer<[_; 4]> = RingBuffer::new();
    /// assert_eq!(v.len(), 0);
    /// v.push_back(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the buffer contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 2]> = RingBuffer::new();
    ///
    /// assert!(!buf.is_full());
    ///
    /// buf.push_back(1);
    ///
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Appends an element to the back of the container.
    ///
    /// If the container is full, its oldest element is overwritten.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [1, _, _]
    /// [1, _, _] <-(+)- 2 => [1, 2, _]
    /// [1, 2, _] <-(+)- 3 => [1, 2, 3]
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4]
    /// ```
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 4]> = RingBuffer::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// ring.push_back(3);
    /// ring.push_back(4);
    ///
    /// assert_eq!(ring.front(), Ok(&2));
    /// assert_eq!(ring.back(), Ok(&4));
    /// ```
    pub fn push_back(&mut self, element: A::Item) {
        let tail = self.tail;
        *self.slot_mut(tail) = element;
        self.commit_write();
    }

    /// Appends the element built by `make` to the back of the container.
    ///
    /// Same as `push_back(make())`.
    #[inline]
    pub fn emplace_back<F>(&mut self, make: F)
        where F: FnOnce() -> A::Item
    {
        self.push_back(make())
    }

    /// Removes the front element.
    ///
    /// Popping an empty container does nothing besides resetting it to its
    /// initial state, the same as `clear()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 3]> = RingBuffer::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// ring.pop_front();
    /// assert_eq!(ring.front(), Ok(&2));
    /// ring.pop_front();
    /// ring.pop_front();
    /// assert!(ring.is_empty());
    /// ```
    pub fn pop_front(&mut self) {
        if self.head != self.tail {
            self.head = Self::advance(self.head);
            self.size -= 1;
            self.debug_check();
        } else {
            self.clear();
        }
    }

    /// Inserts an element at `pos`, shifting the element there and every
    /// element after it one position towards the back.
    ///
    /// Like `push_back`, inserting into a full container evicts its oldest
    /// element. Inserting at `begin()` of a full container replaces the
    /// front element.
    ///
    /// Runs in `O(n)` of the number of elements behind `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not in `begin()..=end()`, which can only happen
    /// when it was taken before the container was last mutated.
    ///
    /// # Examples
    ///
    /// ```text
    /// [10, 20, _] <-(+)- 15 @ 1 => [10, 15, 20]
    /// [10, 15, 20] <-(+)- 17 @ 2 => [15, 17, 20]
    /// [15, 17, 20] <-(+)- 5 @ 0 => [5, 17, 20]
    /// ```
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 4]> = RingBuffer::new();
    /// ring.push_back(10);
    /// ring.push_back(20);
    ///
    /// let pos = ring.begin().next_cursor().position();
    /// ring.insert(pos, 15);
    /// assert_eq!(ring, vec![10, 15, 20]);
    ///
    /// let pos = ring.rbegin().position();
    /// ring.insert(pos, 17);
    /// assert_eq!(ring, vec![15, 17, 20]);
    ///
    /// let pos = ring.begin().position();
    /// ring.insert(pos, 5);
    /// assert_eq!(ring, vec![5, 17, 20]);
    /// ```
    pub fn insert(&mut self, pos: Position, element: A::Item) {
        let index = pos.index();
        assert!(self.is_insert_position(index),
                "insertion position out of bounds: slot {} is outside {}..={} (slots {})",
                index,
                self.head,
                self.tail,
                Self::slot_count());

        if self.is_full() && index == self.head {
            // the front element is the one evicted
            *self.slot_mut(index) = element;
            self.debug_check();
            return;
        }

        // walk back from the free tail slot so nothing is overwritten
        // before it has been moved:
        //
        //       H     P     T
        //      [a  b  c  d  _  .]
        //
        //       H     P        T
        //      [a  b  I  c  d  .]
        let mut it = self.tail;
        while it != index {
            let prev = Self::retreat(it);
            self.slots.as_mut_slice().swap(it, prev);
            it = prev;
        }
        *self.slot_mut(index) = element;
        self.commit_write();
    }

    /// Clears the buffer.
    ///
    /// Only the bounds are reset; the stored values are dropped when they
    /// are overwritten or when the container is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut v: RingBuffer<[_; 4]> = RingBuffer::new();
    /// v.push_back(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
        self.head = 0;
        self.tail = 0;
    }

    /// Provides a reference to the front element, the oldest one.
    ///
    /// # Errors
    ///
    /// Returns `EmptyContainer` if the container is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::{EmptyContainer, RingBuffer};
    ///
    /// let mut ring: RingBuffer<[_; 4]> = RingBuffer::new();
    /// assert_eq!(ring.front(), Err(EmptyContainer));
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// assert_eq!(ring.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&A::Item, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }
        Ok(self.slot(self.head))
    }

    /// Provides a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns `EmptyContainer` if the container is empty.
    pub fn front_mut(&mut self) -> Result<&mut A::Item, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }
        let head = self.head;
        Ok(self.slot_mut(head))
    }

    /// Provides a reference to the back element, the most recently added
    /// one.
    ///
    /// # Errors
    ///
    /// Returns `EmptyContainer` if the container is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::{EmptyContainer, RingBuffer};
    ///
    /// let mut ring: RingBuffer<[_; 4]> = RingBuffer::new();
    /// assert_eq!(ring.back(), Err(EmptyContainer));
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// assert_eq!(ring.back(), Ok(&2));
    /// ```
    pub fn back(&self) -> Result<&A::Item, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }
        Ok(self.slot(Self::retreat(self.tail)))
    }

    /// Provides a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns `EmptyContainer` if the container is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 4]> = RingBuffer::new();
    /// ring.push_back(1);
    /// if let Ok(x) = ring.back_mut() {
    ///     *x = 9;
    /// }
    /// assert_eq!(ring.back(), Ok(&9));
    /// ```
    pub fn back_mut(&mut self) -> Result<&mut A::Item, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }
        let last = Self::retreat(self.tail);
        Ok(self.slot_mut(last))
    }

    /// Retrieves an element in the `RingBuffer` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 4]> = RingBuffer::new();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// buf.push_back(5);
    /// assert_eq!(buf.get(1), Some(&4));
    /// assert_eq!(buf.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&A::Item> {
        if index < self.size {
            Some(self.slot(wrap_add(self.head, index, Self::slot_count())))
        } else {
            None
        }
    }

    /// Retrieves an element in the `RingBuffer` mutably by index.
    ///
    /// Element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut A::Item> {
        if index < self.size {
            let idx = wrap_add(self.head, index, Self::slot_count());
            Some(self.slot_mut(idx))
        } else {
            None
        }
    }

    /// Returns `true` if the `RingBuffer` contains an element equal to the
    /// given value.
    pub fn contains(&self, x: &A::Item) -> bool
        where A::Item: PartialEq<A::Item>
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 4]> = RingBuffer::new();
    /// ring.extend([0, 1, 2, 3]);
    /// assert_eq!(ring.as_slices(), (&[1, 2, 3][..], &[][..]));
    ///
    /// ring.push_back(4);
    /// assert_eq!(ring.as_slices(), (&[2, 3][..], &[4][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[A::Item], &[A::Item]) {
        let buf = self.slots.as_slice();
        if self.head <= self.tail {
            (&buf[self.head..self.tail], &buf[..0])
        } else {
            let (left, right) = buf.split_at(self.head);
            (right, &left[..self.tail])
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the
    /// contents of the `RingBuffer`.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [A::Item], &mut [A::Item]) {
        let head = self.head;
        let tail = self.tail;
        let buf = self.slots.as_mut_slice();
        if head <= tail {
            let (_, rest) = buf.split_at_mut(head);
            let (live, empty) = rest.split_at_mut(tail - head);
            (live, &mut empty[..0])
        } else {
            let (left, right) = buf.split_at_mut(head);
            (right, &mut left[..tail])
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 4]> = RingBuffer::new();
    /// ring.push_back(5);
    /// ring.push_back(3);
    /// ring.push_back(4);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = ring.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<A::Item> {
        Iter::new(self.slots.as_slice(), self.head, self.tail)
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 4]> = RingBuffer::new();
    /// ring.push_back(5);
    /// ring.push_back(3);
    /// ring.push_back(4);
    /// for num in ring.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(ring, vec![3, 1, 2]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<A::Item> {
        let (front, back) = self.as_mut_slices();
        IterMut::new(front, back)
    }

    /// Returns a cursor at the front element.
    #[inline]
    pub fn begin(&self) -> Cursor<A> {
        Cursor::new(self, self.head)
    }

    /// Returns a cursor one past the back element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let ring: RingBuffer<[_; 4]> = vec![1, 2].into_iter().collect();
    ///
    /// let mut sum = 0;
    /// let mut cursor = ring.begin();
    /// while cursor != ring.end() {
    ///     sum += cursor.current().copied().unwrap_or(0);
    ///     cursor.move_next();
    /// }
    /// assert_eq!(sum, 3);
    /// assert_eq!(ring.end().current(), None);
    /// ```
    #[inline]
    pub fn end(&self) -> Cursor<A> {
        Cursor::new(self, self.tail)
    }

    /// Same as `begin()`.
    #[inline]
    pub fn cbegin(&self) -> Cursor<A> {
        self.begin()
    }

    /// Same as `end()`.
    #[inline]
    pub fn cend(&self) -> Cursor<A> {
        self.end()
    }

    /// Returns a mutable cursor at the front element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 4]> = vec![1, 2, 3].into_iter().collect();
    ///
    /// let mut cursor = ring.begin_mut();
    /// while !cursor.is_end() {
    ///     if let Some(x) = cursor.current_mut() {
    ///         *x *= 10;
    ///     }
    ///     cursor.move_next();
    /// }
    /// assert_eq!(ring, vec![10, 20, 30]);
    /// ```
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<A> {
        let head = self.head;
        CursorMut::new(self, head)
    }

    /// Returns a mutable cursor one past the back element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<A> {
        let tail = self.tail;
        CursorMut::new(self, tail)
    }

    /// Returns a reverse cursor at the back element.
    #[inline]
    pub fn rbegin(&self) -> RevCursor<A> {
        RevCursor::new(self, Self::retreat(self.tail))
    }

    /// Returns a reverse cursor one before the front element.
    #[inline]
    pub fn rend(&self) -> RevCursor<A> {
        RevCursor::new(self, Self::retreat(self.head))
    }

    /// Same as `rbegin()`.
    #[inline]
    pub fn crbegin(&self) -> RevCursor<A> {
        self.rbegin()
    }

    /// Same as `rend()`.
    #[inline]
    pub fn crend(&self) -> RevCursor<A> {
        self.rend()
    }

    /// Returns a mutable reverse cursor at the back element.
    #[inline]
    pub fn rbegin_mut(&mut self) -> RevCursorMut<A> {
        let last = Self::retreat(self.tail);
        RevCursorMut::new(self, last)
    }

    /// Returns a mutable reverse cursor one before the front element.
    #[inline]
    pub fn rend_mut(&mut self) -> RevCursorMut<A> {
        let before_first = Self::retreat(self.head);
        RevCursorMut::new(self, before_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use proptest::prelude::*;

    fn forward<A: Array>(ring: &RingBuffer<A>) -> Vec<A::Item>
        where A::Item: Clone
    {
        let mut out = Vec::new();
        let mut it = ring.begin();
        while it != ring.end() {
            out.extend(it.current().cloned());
            it.move_next();
        }
        out
    }

    fn backward<A: Array>(ring: &RingBuffer<A>) -> Vec<A::Item>
        where A::Item: Clone
    {
        let mut out = Vec::new();
        let mut it = ring.rbegin();
        while it != ring.rend() {
            out.extend(it.current().cloned());
            it.move_next();
        }
        out
    }

    #[test]
    fn simple() {
        let mut tester: RingBuffer<[_; 8]> = RingBuffer::new();
        assert_eq!(tester.capacity(), 7);
        assert_eq!(tester.len(), 0);

        tester.push_back(1);
        tester.push_back(2);
        tester.push_back(3);
        tester.push_back(4);
        assert_eq!(tester.len(), 4);

        assert_eq!(tester.take_front(), Some(1));
        assert_eq!(tester.take_front(), Some(2));
        assert_eq!(tester.len(), 2);
        assert_eq!(tester.take_front(), Some(3));
        assert_eq!(tester.take_front(), Some(4));
        assert_eq!(tester.take_front(), None);
    }

    #[test]
    fn push_within_capacity() {
        for k in 0..=5 {
            let mut tester: RingBuffer<[_; 6]> = RingBuffer::new();
            for v in 0..k {
                tester.push_back(v);
            }
            assert_eq!(tester.len(), k);
            assert_eq!(tester.is_full(), k == 5);
            assert_eq!(forward(&tester), (0..k).collect::<Vec<_>>());
        }
    }

    #[test]
    fn push_beyond_capacity_keeps_latest() {
        for k in 6..20 {
            let mut tester: RingBuffer<[_; 6]> = RingBuffer::new();
            for v in 0..k {
                tester.push_back(v);
            }
            assert_eq!(tester.len(), 5);
            assert!(tester.is_full());
            assert_eq!(forward(&tester), (k - 5..k).collect::<Vec<_>>());
        }
    }

    #[test]
    fn sliding_window_scenario() {
        let mut tester: RingBuffer<[_; 6]> = RingBuffer::new();
        for v in [10, 20, 30, 40, 50] {
            tester.push_back(v);
        }
        assert_eq!(tester.front(), Ok(&10));
        assert_eq!(tester.back(), Ok(&50));
        assert!(tester.is_full());

        tester.push_back(60);
        assert_eq!(tester.front(), Ok(&20));
        assert_eq!(tester.back(), Ok(&60));
        assert_eq!(tester.len(), 5);

        tester.pop_front();
        assert_eq!(tester.front(), Ok(&30));
        assert_eq!(tester.len(), 4);

        let pos = tester.begin().position();
        tester.insert(pos, 99);
        assert_eq!(tester.front(), Ok(&99));
        assert_eq!(tester.len(), 5);
        assert_eq!(tester, vec![99, 30, 40, 50, 60]);
    }

    #[test]
    fn front_back_on_empty() {
        let mut tester: RingBuffer<[i32; 4]> = RingBuffer::new();
        assert_eq!(tester.front(), Err(EmptyContainer));
        assert_eq!(tester.back(), Err(EmptyContainer));
        assert_eq!(tester.front_mut(), Err(EmptyContainer));
        assert_eq!(tester.back_mut(), Err(EmptyContainer));

        tester.push_back(1);
        tester.pop_front();
        assert_eq!(tester.front(), Err(EmptyContainer));
        assert_eq!(tester.back(), Err(EmptyContainer));
    }

    #[test]
    fn from_list_then_push() {
        let mut tester = RingBuffer::<[_; 6]>::from_iter(vec![1, 2, 3, 4, 5]);
        assert_eq!(forward(&tester), vec![1, 2, 3, 4, 5]);
        tester.push_back(6);
        assert_eq!(forward(&tester), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_long_list_keeps_latest() {
        let tester = RingBuffer::<[_; 4]>::from_iter(1..=10);
        assert_eq!(tester.len(), 3);
        assert_eq!(tester, vec![8, 9, 10]);
    }

    #[test]
    fn pop_empty() {
        let mut tester: RingBuffer<[i32; 3]> = RingBuffer::new();
        tester.pop_front();
        assert_eq!(tester.len(), 0);
        assert!(tester.is_empty());

        tester.push_back(1);
        tester.pop_front();
        tester.pop_front();
        assert_eq!(tester.len(), 0);
        assert_eq!(tester.begin(), tester.end());
    }

    #[test]
    fn pop_empty_resets_bounds() {
        let mut tester: RingBuffer<[_; 4]> = RingBuffer::new();
        tester.extend([1, 2]);
        tester.pop_front();
        tester.pop_front();
        assert_eq!(tester.begin().index(), 2);

        tester.pop_front();
        assert_eq!(tester.begin().index(), 0);
        assert_eq!(tester.end().index(), 0);
    }

    #[test]
    fn clear_matches_fresh() {
        let mut tester: RingBuffer<[_; 5]> = RingBuffer::new();
        tester.extend(0..7);
        tester.pop_front();
        tester.clear();

        let fresh: RingBuffer<[i32; 5]> = RingBuffer::new();
        assert_eq!(tester.len(), fresh.len());
        assert_eq!(tester.is_empty(), fresh.is_empty());
        assert_eq!(forward(&tester), forward(&fresh));
        assert_eq!(tester.begin().index(), 0);
        assert_eq!(tester.end().index(), 0);

        tester.push_back(42);
        assert_eq!(tester, vec![42]);
    }

    #[test]
    fn const_factories_alias() {
        let tester: RingBuffer<[_; 4]> = vec![1, 2].into_iter().collect();
        assert_eq!(tester.cbegin(), tester.begin());
        assert_eq!(tester.cend(), tester.end());
        assert_eq!(tester.crbegin(), tester.rbegin());
        assert_eq!(tester.crend(), tester.rend());
    }

    #[test]
    fn reverse_mirrors_forward() {
        let mut tester: RingBuffer<[_; 6]> = RingBuffer::new();
        for v in 0..13 {
            tester.push_back(v);
            let mut fwd = forward(&tester);
            fwd.reverse();
            assert_eq!(fwd, backward(&tester));
            assert_eq!(tester.iter().rev().cloned().collect::<Vec<_>>(), fwd);
        }
    }

    #[test]
    fn insert_middle_shifts_back() {
        let mut tester: RingBuffer<[_; 6]> = RingBuffer::new();
        tester.extend([1, 2, 4, 5]);
        let pos = tester.begin().next_cursor().next_cursor().position();
        tester.insert(pos, 3);
        assert_eq!(tester.len(), 5);
        assert_eq!(tester, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_wrapped() {
        let mut tester: RingBuffer<[_; 5]> = RingBuffer::new();
        tester.extend(0..6);
        // slots wrapped, head is past the middle
        tester.pop_front();
        tester.pop_front();
        assert_eq!(tester, vec![4, 5]);
        tester.push_back(6);

        let pos = tester.rbegin().position();
        tester.insert(pos, 55);
        assert_eq!(tester, vec![4, 5, 55, 6]);
        assert!(tester.is_full());
    }

    #[test]
    fn insert_at_end_is_push() {
        let mut tester: RingBuffer<[_; 4]> = RingBuffer::new();
        for v in 0..6 {
            let pos = tester.end().position();
            tester.insert(pos, v);
        }
        assert_eq!(tester, vec![3, 4, 5]);
    }

    #[test]
    fn insert_full_evicts_oldest() {
        let mut tester: RingBuffer<[_; 5]> = RingBuffer::new();
        tester.extend([1, 2, 3, 4]);
        let pos = tester.begin().next_cursor().next_cursor().position();
        tester.insert(pos, 9);
        assert_eq!(tester.len(), 4);
        assert_eq!(tester, vec![2, 9, 3, 4]);
    }

    #[test]
    fn insert_front_of_full_replaces_oldest() {
        let mut tester: RingBuffer<[_; 4]> = RingBuffer::new();
        tester.extend([1, 2, 3]);
        let pos = tester.begin().position();
        tester.insert(pos, 0);
        assert_eq!(tester, vec![0, 2, 3]);

        let mut tester: RingBuffer<[_; 6]> = RingBuffer::new();
        tester.extend([10, 20, 30, 40, 50]);
        let pos = tester.cbegin().position();
        tester.insert(pos, 99);
        assert_eq!(tester.front(), Ok(&99));
        assert_eq!(tester.len(), 5);
        assert_eq!(tester, vec![99, 20, 30, 40, 50]);

        // wrapped, head in the middle of the slots
        tester.push_back(60);
        tester.push_back(70);
        let pos = tester.begin().position();
        tester.insert(pos, 1);
        assert_eq!(tester, vec![1, 40, 50, 60, 70]);
        assert_eq!(backward(&tester), vec![70, 60, 50, 40, 1]);
    }

    #[test]
    #[should_panic(expected = "insertion position out of bounds")]
    fn insert_stale_position() {
        let mut tester: RingBuffer<[_; 6]> = RingBuffer::new();
        tester.extend([1, 2, 3]);
        let pos = tester.end().position();
        tester.clear();
        tester.insert(pos, 4);
    }

    #[test]
    fn emplace_back_pushes() {
        let mut tester: RingBuffer<[String; 3]> = RingBuffer::new();
        tester.emplace_back(|| String::from("a"));
        tester.emplace_back(|| String::from("b"));
        tester.emplace_back(|| String::from("c"));
        assert_eq!(tester, vec![String::from("b"), String::from("c")]);
    }

    #[test]
    fn index() {
        let mut tester: RingBuffer<[_; 4]> = RingBuffer::new();
        tester.push_back(1);
        tester.push_back(2);
        tester.push_back(3);
        assert_eq!(tester[0], 1);
        tester.pop_front();
        assert_eq!(tester[0], 2);
        tester.push_back(4);
        tester.push_back(5);
        assert_eq!(tester[0], 3);
        assert_eq!(tester[2], 5);
        tester[1] = 40;
        assert_eq!(tester, vec![3, 40, 5]);
    }

    #[test]
    #[should_panic]
    fn index_overflow() {
        let mut tester: RingBuffer<[_; 4]> = RingBuffer::new();
        tester.push_back(1);
        tester.push_back(2);
        tester[2];
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut tester: RingBuffer<[i32; 1]> = RingBuffer::new();
        assert_eq!(tester.capacity(), 0);
        assert!(tester.is_empty());

        tester.push_back(1);
        tester.emplace_back(|| 2);
        assert_eq!(tester.len(), 0);
        assert_eq!(tester.front(), Err(EmptyContainer));
        assert_eq!(tester.back(), Err(EmptyContainer));

        let pos = tester.begin().position();
        tester.insert(pos, 3);
        assert!(tester.is_empty());

        tester.pop_front();
        assert_eq!(tester.begin(), tester.end());
        assert_eq!(tester.rbegin(), tester.rend());
        assert_eq!(tester.iter().count(), 0);
        assert_eq!(RingBuffer::<[i32; 1]>::from_iter(1..4).len(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one slot")]
    fn no_slots() {
        let _: RingBuffer<[u8; 0]> = RingBuffer::new();
    }

    #[test]
    fn iter() {
        let mut tester: RingBuffer<[_; 3]> = RingBuffer::new();
        tester.push_back(1);
        tester.push_back(2);
        {
            let mut iter = tester.iter();
            assert_eq!(iter.size_hint(), (2, Some(2)));
            assert_eq!(iter.next(), Some(&1));
            assert_eq!(iter.next(), Some(&2));
            assert_eq!(iter.next(), None);
            assert_eq!(iter.size_hint(), (0, Some(0)));
        }
        tester.pop_front();
        tester.push_back(3);
        {
            let mut iter = (&tester).into_iter();
            assert_eq!(iter.next(), Some(&2));

            // test clone
            let mut iter2 = iter.clone();
            assert_eq!(iter.next(), Some(&3));
            assert_eq!(iter.next(), None);
            assert_eq!(iter2.next(), Some(&3));
            assert_eq!(iter2.next(), None);
        }
    }

    #[test]
    fn iter_mut() {
        let mut tester: RingBuffer<[_; 3]> = RingBuffer::new();
        tester.push_back(1);
        tester.push_back(2);
        {
            let mut iter = tester.iter_mut();
            assert_eq!(iter.size_hint(), (2, Some(2)));
            assert_eq!(iter.next(), Some(&mut 1));
            assert_eq!(iter.next(), Some(&mut 2));
            assert_eq!(iter.next(), None);
            assert_eq!(iter.size_hint(), (0, Some(0)));
        }
        tester.pop_front();
        tester.push_back(3);
        {
            let mut iter = (&mut tester).into_iter();
            assert_eq!(iter.next_back(), Some(&mut 3));
            assert_eq!(iter.next(), Some(&mut 2));
            assert_eq!(iter.next(), None);
        }
        {
            // mutation
            let mut iter = tester.iter_mut();
            if let Some(n) = iter.next() {
                *n += 1;
            }
            if let Some(n) = iter.next() {
                *n += 2;
            }
        }
        assert_eq!(tester, vec![3, 5]);
    }

    #[test]
    fn into_iter() {
        let mut tester: RingBuffer<[_; 4]> = RingBuffer::new();
        tester.extend(vec![String::from("a"), String::from("b"), String::from("c"), String::from("d")]);
        let mut iter = tester.into_iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.next_back(), Some(String::from("d")));
        assert_eq!(iter.next(), Some(String::from("b")));
        assert_eq!(iter.next(), Some(String::from("c")));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn as_slices_wrapped() {
        let mut tester: RingBuffer<[_; 5]> = RingBuffer::new();
        tester.extend(0..6);
        assert_eq!(tester.as_slices(), (&[2, 3, 4][..], &[5][..]));
        {
            let (a, b) = tester.as_mut_slices();
            a[0] = 20;
            b[0] = 50;
        }
        assert_eq!(tester, vec![20, 3, 4, 50]);
        assert!(tester.contains(&50));
        assert!(!tester.contains(&2));
    }

    #[test]
    fn clone_and_copy() {
        let tester: RingBuffer<[_; 16]> = (0..16).collect();
        let cloned = tester.clone();
        assert_eq!(tester, cloned);

        let mut copied = tester;
        copied.push_back(100);
        assert_ne!(tester, copied);
        assert_eq!(tester.back(), Ok(&15));
    }

    #[test]
    fn eq_ignores_slot_layout() {
        let mut a: RingBuffer<[_; 4]> = RingBuffer::new();
        a.extend([1, 2, 3]);
        let mut b: RingBuffer<[_; 4]> = RingBuffer::new();
        b.extend([9, 9, 1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);

        b.push_back(4);
        assert!(a < b);
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut tester: RingBuffer<[_; 4]> = RingBuffer::new();
        tester.extend(0..5);
        assert_eq!(format!("{:?}", tester), "[2, 3, 4]");
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Pop,
        Insert(u8, i32),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::Push),
            Just(Op::Pop),
            (any::<u8>(), any::<i32>()).prop_map(|(at, v)| Op::Insert(at, v)),
            Just(Op::Clear),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_matches_vecdeque(ops in prop::collection::vec(op(), 1..200)) {
            const CAPACITY: usize = 5;

            let mut ring: RingBuffer<[i32; CAPACITY + 1]> = RingBuffer::new();
            let mut model: VecDeque<i32> = VecDeque::with_capacity(CAPACITY + 1);

            for op in ops {
                match op {
                    Op::Push(v) => {
                        ring.push_back(v);
                        model.push_back(v);
                        if model.len() > CAPACITY {
                            model.pop_front();
                        }
                    }
                    Op::Pop => {
                        ring.pop_front();
                        model.pop_front();
                    }
                    Op::Insert(at, v) => {
                        let at = at as usize % (model.len() + 1);
                        let mut cursor = ring.begin();
                        for _ in 0..at {
                            cursor.move_next();
                        }
                        let pos = cursor.position();
                        ring.insert(pos, v);
                        if model.len() == CAPACITY && at == 0 {
                            model[0] = v;
                        } else {
                            model.insert(at, v);
                            if model.len() > CAPACITY {
                                model.pop_front();
                            }
                        }
                    }
                    Op::Clear => {
                        ring.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(ring.len(), model.len());
                prop_assert_eq!(ring.is_full(), model.len() == CAPACITY);
                prop_assert_eq!(ring.front().ok(), model.front());
                prop_assert_eq!(ring.back().ok(), model.back());
                prop_assert_eq!(forward(&ring), model.iter().cloned().collect::<Vec<_>>());
                prop_assert_eq!(backward(&ring), model.iter().rev().cloned().collect::<Vec<_>>());
            }
        }
    }
}
