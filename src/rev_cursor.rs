//! Reverse cursors over a `RingBuffer`.
//!
//! They share the forward cursors' slot indices and only swap the
//! directions: `rbegin()` is the slot before `end()` and `rend()` the slot
//! before `begin()`.

use core::fmt;
use core::ptr;

use crate::array::Array;
use crate::cursor::{Cursor, CursorMut, Position};
use crate::utils::{advance, retreat};
use crate::RingBuffer;

/// A read-only cursor walking a `RingBuffer` from back to front.
pub struct RevCursor<'a, A: 'a + Array> {
    ring: &'a RingBuffer<A>,
    index: usize,
}

impl<'a, A: Array> Clone for RevCursor<'a, A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A: Array> Copy for RevCursor<'a, A> {}

impl<'a, A: Array> RevCursor<'a, A> {
    #[inline]
    pub(crate) fn new(ring: &'a RingBuffer<A>, index: usize) -> Self {
        debug_assert!(index < A::slot_count(), "index={} slots={}", index, A::slot_count());
        RevCursor { ring, index }
    }

    /// Returns the slot index the cursor points at.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the cursor's position.
    ///
    /// Inserting there puts the new element in front of the one the cursor
    /// points at, the same as for a forward cursor at the same slot.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.index)
    }

    /// Returns the container the cursor walks.
    #[inline]
    pub fn ring(&self) -> &'a RingBuffer<A> {
        self.ring
    }

    /// Returns the element the cursor points at, or `None` at `rend()` and
    /// outside the live elements.
    #[inline]
    pub fn current(&self) -> Option<&'a A::Item> {
        if self.ring.is_live(self.index) {
            Some(self.ring.slot(self.index))
        } else {
            None
        }
    }

    /// Moves to the next slot towards the front.
    #[inline]
    pub fn move_next(&mut self) {
        self.index = retreat(self.index, A::slot_count());
    }

    /// Moves to the previous slot towards the back.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index = advance(self.index, A::slot_count());
    }

    /// Returns a copy of the cursor moved to the next slot towards the
    /// front.
    #[inline]
    pub fn next_cursor(mut self) -> Self {
        self.move_next();
        self
    }

    /// Returns a copy of the cursor moved to the previous slot towards the
    /// back.
    #[inline]
    pub fn prev_cursor(mut self) -> Self {
        self.move_prev();
        self
    }

    /// Returns true if the cursor sits at `rend()`.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == retreat(self.ring.head_index(), A::slot_count())
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (&'a RingBuffer<A>, usize) {
        (self.ring, self.index)
    }
}

/// A cursor walking a `RingBuffer` from back to front, with write access
/// to the elements.
pub struct RevCursorMut<'a, A: 'a + Array> {
    ring: &'a mut RingBuffer<A>,
    index: usize,
}

impl<'a, A: Array> RevCursorMut<'a, A> {
    #[inline]
    pub(crate) fn new(ring: &'a mut RingBuffer<A>, index: usize) -> Self {
        debug_assert!(index < A::slot_count(), "index={} slots={}", index, A::slot_count());
        RevCursorMut { ring, index }
    }

    /// Returns the slot index the cursor points at.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the cursor's position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.index)
    }

    /// Returns the element the cursor points at, or `None` outside the
    /// live elements.
    #[inline]
    pub fn current(&self) -> Option<&A::Item> {
        if self.ring.is_live(self.index) {
            Some(self.ring.slot(self.index))
        } else {
            None
        }
    }

    /// Returns the element the cursor points at mutably, or `None` outside
    /// the live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 4]> = vec![1, 2, 3].into_iter().collect();
    /// let mut cursor = ring.rbegin_mut();
    /// let mut rank = 0;
    /// while !cursor.is_end() {
    ///     if let Some(x) = cursor.current_mut() {
    ///         *x = rank;
    ///     }
    ///     rank += 1;
    ///     cursor.move_next();
    /// }
    /// assert_eq!(ring, vec![2, 1, 0]);
    /// ```
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut A::Item> {
        if self.ring.is_live(self.index) {
            Some(self.ring.slot_mut(self.index))
        } else {
            None
        }
    }

    /// Consumes the cursor, returning the element it points at for the
    /// whole lifetime of the borrow.
    #[inline]
    pub fn into_current(self) -> Option<&'a mut A::Item> {
        let RevCursorMut { ring, index } = self;
        if ring.is_live(index) {
            Some(ring.slot_mut(index))
        } else {
            None
        }
    }

    /// Moves to the next slot towards the front.
    #[inline]
    pub fn move_next(&mut self) {
        self.index = retreat(self.index, A::slot_count());
    }

    /// Moves to the previous slot towards the back.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index = advance(self.index, A::slot_count());
    }

    /// Returns true if the cursor sits at `rend()`.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == retreat(self.ring.head_index(), A::slot_count())
    }

    /// Reborrows the cursor as a read-only one at the same slot.
    #[inline]
    pub fn as_cursor(&self) -> RevCursor<A> {
        RevCursor::new(self.ring, self.index)
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (&'a mut RingBuffer<A>, usize) {
        (self.ring, self.index)
    }
}

impl<'a, 'b, A: Array> PartialEq<RevCursor<'b, A>> for RevCursor<'a, A> {
    #[inline]
    fn eq(&self, other: &RevCursor<'b, A>) -> bool {
        ptr::eq(self.ring, other.ring) && self.index == other.index
    }
}

impl<'a, A: Array> Eq for RevCursor<'a, A> {}

impl<'a, 'b, A: Array> PartialEq<RevCursor<'b, A>> for RevCursorMut<'a, A> {
    #[inline]
    fn eq(&self, other: &RevCursor<'b, A>) -> bool {
        ptr::eq(&*self.ring, other.ring) && self.index == other.index
    }
}

impl<'a, 'b, A: Array> PartialEq<RevCursorMut<'b, A>> for RevCursor<'a, A> {
    #[inline]
    fn eq(&self, other: &RevCursorMut<'b, A>) -> bool {
        other == self
    }
}

/// A forward cursor turned around at the same slot.
impl<'a, A: Array> From<Cursor<'a, A>> for RevCursor<'a, A> {
    #[inline]
    fn from(fwd: Cursor<'a, A>) -> Self {
        let (ring, index) = fwd.into_parts();
        RevCursor::new(ring, index)
    }
}

/// A forward cursor turned around at the same slot.
impl<'a, A: Array> From<CursorMut<'a, A>> for RevCursorMut<'a, A> {
    #[inline]
    fn from(fwd: CursorMut<'a, A>) -> Self {
        let (ring, index) = fwd.into_parts();
        RevCursorMut::new(ring, index)
    }
}

impl<'a, A: Array> fmt::Debug for RevCursor<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RevCursor").field("index", &self.index).finish()
    }
}

impl<'a, A: Array> fmt::Debug for RevCursorMut<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RevCursorMut").field("index", &self.index).finish()
    }
}
