//! Forward cursors over a `RingBuffer`.
//!
//! A cursor is a borrow of a container plus the index of one of its slots.
//! Moving a cursor never checks against the container's bounds, the caller
//! stops at `end()`; dereferencing one outside the live range yields `None`.

use core::fmt;
use core::ptr;

use crate::array::Array;
use crate::rev_cursor::{RevCursor, RevCursorMut};
use crate::utils::{advance, retreat};
use crate::RingBuffer;

/// The slot a cursor points at, detached from the cursor's borrow.
///
/// A `Position` is only meaningful for the container it was taken from and
/// only until that container is next mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    index: usize,
}

impl Position {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Position { index }
    }

    /// Returns the slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }
}

/// A read-only cursor walking a `RingBuffer` from front to back.
pub struct Cursor<'a, A: 'a + Array> {
    ring: &'a RingBuffer<A>,
    index: usize,
}

impl<'a, A: Array> Clone for Cursor<'a, A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A: Array> Copy for Cursor<'a, A> {}

impl<'a, A: Array> Cursor<'a, A> {
    #[inline]
    pub(crate) fn new(ring: &'a RingBuffer<A>, index: usize) -> Self {
        debug_assert!(index < A::slot_count(), "index={} slots={}", index, A::slot_count());
        Cursor { ring, index }
    }

    /// Returns the slot index the cursor points at.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the cursor's position, e.g. to insert there.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.index)
    }

    /// Returns the container the cursor walks.
    #[inline]
    pub fn ring(&self) -> &'a RingBuffer<A> {
        self.ring
    }

    /// Returns the element the cursor points at, or `None` if the cursor
    /// sits at `end()` or was moved outside the live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let ring: RingBuffer<[_; 3]> = vec![7].into_iter().collect();
    /// let mut cursor = ring.begin();
    /// assert_eq!(cursor.current(), Some(&7));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), None);
    /// ```
    #[inline]
    pub fn current(&self) -> Option<&'a A::Item> {
        if self.ring.is_live(self.index) {
            Some(self.ring.slot(self.index))
        } else {
            None
        }
    }

    /// Moves to the next slot towards the back.
    #[inline]
    pub fn move_next(&mut self) {
        self.index = advance(self.index, A::slot_count());
    }

    /// Moves to the previous slot towards the front.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index = retreat(self.index, A::slot_count());
    }

    /// Returns a copy of the cursor moved to the next slot.
    #[inline]
    pub fn next_cursor(mut self) -> Self {
        self.move_next();
        self
    }

    /// Returns a copy of the cursor moved to the previous slot.
    #[inline]
    pub fn prev_cursor(mut self) -> Self {
        self.move_prev();
        self
    }

    /// Returns true if the cursor sits at `end()`.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == self.ring.tail_index()
    }
}

/// A cursor walking a `RingBuffer` from front to back, with write access
/// to the elements.
///
/// It holds the container's only mutable borrow, so it can also insert.
pub struct CursorMut<'a, A: 'a + Array> {
    ring: &'a mut RingBuffer<A>,
    index: usize,
}

impl<'a, A: Array> CursorMut<'a, A> {
    #[inline]
    pub(crate) fn new(ring: &'a mut RingBuffer<A>, index: usize) -> Self {
        debug_assert!(index < A::slot_count(), "index={} slots={}", index, A::slot_count());
        CursorMut { ring, index }
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
        let CursorMut { ring, index } = self;
        if ring.is_live(index) {
            Some(ring.slot_mut(index))
        } else {
            None
        }
    }

    /// Moves to the next slot towards the back.
    #[inline]
    pub fn move_next(&mut self) {
        self.index = advance(self.index, A::slot_count());
    }

    /// Moves to the previous slot towards the front.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index = retreat(self.index, A::slot_count());
    }

    /// Returns true if the cursor sits at `end()`.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == self.ring.tail_index()
    }

    /// Reborrows the cursor as a read-only one at the same slot.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<A> {
        Cursor::new(self.ring, self.index)
    }

    /// Inserts `element` at the cursor, see `RingBuffer::insert`.
    ///
    /// The cursor keeps its slot, which now holds `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_container::RingBuffer;
    ///
    /// let mut ring: RingBuffer<[_; 5]> = vec![1, 3].into_iter().collect();
    /// {
    ///     let mut cursor = ring.begin_mut();
    ///     cursor.move_next();
    ///     cursor.insert(2);
    ///     assert_eq!(cursor.current(), Some(&2));
    /// }
    /// assert_eq!(ring, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn insert(&mut self, element: A::Item) {
        let pos = self.position();
        self.ring.insert(pos, element);
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (&'a mut RingBuffer<A>, usize) {
        (self.ring, self.index)
    }
}

impl<'a, A: Array> Cursor<'a, A> {
    #[inline]
    pub(crate) fn into_parts(self) -> (&'a RingBuffer<A>, usize) {
        (self.ring, self.index)
    }
}

impl<'a, 'b, A: Array> PartialEq<Cursor<'b, A>> for Cursor<'a, A> {
    #[inline]
    fn eq(&self, other: &Cursor<'b, A>) -> bool {
        ptr::eq(self.ring, other.ring) && self.index == other.index
    }
}

impl<'a, A: Array> Eq for Cursor<'a, A> {}

impl<'a, 'b, A: Array> PartialEq<Cursor<'b, A>> for CursorMut<'a, A> {
    #[inline]
    fn eq(&self, other: &Cursor<'b, A>) -> bool {
        ptr::eq(&*self.ring, other.ring) && self.index == other.index
    }
}

impl<'a, 'b, A: Array> PartialEq<CursorMut<'b, A>> for Cursor<'a, A> {
    #[inline]
    fn eq(&self, other: &CursorMut<'b, A>) -> bool {
        other == self
    }
}

/// A reverse cursor turned around at the same slot.
impl<'a, A: Array> From<RevCursor<'a, A>> for Cursor<'a, A> {
    #[inline]
    fn from(rev: RevCursor<'a, A>) -> Self {
        let (ring, index) = rev.into_parts();
        Cursor::new(ring, index)
    }
}

/// A reverse cursor turned around at the same slot.
impl<'a, A: Array> From<RevCursorMut<'a, A>> for CursorMut<'a, A> {
    #[inline]
    fn from(rev: RevCursorMut<'a, A>) -> Self {
        let (ring, index) = rev.into_parts();
        CursorMut::new(ring, index)
    }
}

impl<'a, A: Array> fmt::Debug for Cursor<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor").field("index", &self.index).finish()
    }
}

impl<'a, A: Array> fmt::Debug for CursorMut<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CursorMut").field("index", &self.index).finish()
    }
}
