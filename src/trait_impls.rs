use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Index, IndexMut};

use crate::array::Array;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::RingBuffer;

impl<A: Array> Default for RingBuffer<A>
    where A::Item: Default
{
    #[inline]
    fn default() -> Self {
        RingBuffer::new()
    }
}

impl<A: Array> PartialEq for RingBuffer<A>
    where A::Item: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<A: Array> Eq for RingBuffer<A> where A::Item: Eq {}

impl<A: Array, B> PartialEq<[B]> for RingBuffer<A>
    where A::Item: PartialEq<B>
{
    fn eq(&self, other: &[B]) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

impl<'a, A: Array, B> PartialEq<&'a [B]> for RingBuffer<A>
    where A::Item: PartialEq<B>
{
    fn eq(&self, other: &&'a [B]) -> bool {
        *self == **other
    }
}

#[cfg(any(feature = "std", test))]
impl<A: Array, B> PartialEq<Vec<B>> for RingBuffer<A>
    where A::Item: PartialEq<B>
{
    fn eq(&self, other: &Vec<B>) -> bool {
        *self == other[..]
    }
}

impl<A: Array> PartialOrd for RingBuffer<A>
    where A::Item: PartialOrd
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<A: Array> Ord for RingBuffer<A>
    where A::Item: Ord
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<A: Array> Hash for RingBuffer<A>
    where A::Item: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        let (a, b) = self.as_slices();
        Hash::hash_slice(a, state);
        Hash::hash_slice(b, state);
    }
}

impl<A: Array> Index<usize> for RingBuffer<A> {
    type Output = A::Item;

    #[inline]
    fn index(&self, index: usize) -> &A::Item {
        let len = self.len();
        match self.get(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

impl<A: Array> IndexMut<usize> for RingBuffer<A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut A::Item {
        let len = self.len();
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

/// Builds a `RingBuffer` by inserting every element at `end()` in turn.
///
/// An iterator longer than the capacity evicts its own earliest elements,
/// leaving the most recent ones.
impl<A: Array> iter::FromIterator<A::Item> for RingBuffer<A>
    where A::Item: Default
{
    fn from_iter<T: IntoIterator<Item = A::Item>>(iter: T) -> Self {
        let mut ring = RingBuffer::new();
        for elt in iter {
            let end = ring.end().position();
            ring.insert(end, elt);
        }
        ring
    }
}

impl<A: Array> IntoIterator for RingBuffer<A>
    where A::Item: Default
{
    type Item = A::Item;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, A: Array> IntoIterator for &'a RingBuffer<A> {
    type Item = &'a A::Item;
    type IntoIter = Iter<'a, A::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A: Array> IntoIterator for &'a mut RingBuffer<A> {
    type Item = &'a mut A::Item;
    type IntoIter = IterMut<'a, A::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Extend the `RingBuffer` with an iterator.
///
/// Every element is pushed to the back; once the container is full each
/// push evicts the oldest element.
impl<A: Array> Extend<A::Item> for RingBuffer<A> {
    fn extend<T: IntoIterator<Item = A::Item>>(&mut self, iter: T) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<A: Array> fmt::Debug for RingBuffer<A>
    where A::Item: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::RingBuffer;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn hash_ignores_slot_layout() {
        let a: RingBuffer<[_; 4]> = vec![1, 2, 3].into_iter().collect();
        let mut b: RingBuffer<[_; 4]> = RingBuffer::new();
        b.extend([7, 1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn eq_slices() {
        let ring: RingBuffer<[_; 4]> = vec![1, 2].into_iter().collect();
        assert_eq!(ring, &[1, 2][..]);
        assert!(ring != &[1, 2, 3][..]);
        assert!(ring != vec![2, 1]);
    }

    #[test]
    fn default_is_empty() {
        let ring: RingBuffer<[String; 3]> = Default::default();
        assert!(ring.is_empty());
        assert_eq!(ring.capacity(), 2);
    }
}
