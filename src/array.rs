//! Fixed-size backing arrays.

/// Trait for the fixed size arrays a `RingBuffer` stores its slots in.
///
/// One slot of the array is always kept free, so a backing array of
/// `K` slots gives a `RingBuffer` with a capacity of `K - 1`.
pub trait Array {
    /// The array’s element type
    type Item;

    /// Returns the number of slots in the array.
    fn slot_count() -> usize;

    /// Builds an array whose slot `i` holds `f(i)`.
    fn from_fn<F>(f: F) -> Self
        where F: FnMut(usize) -> Self::Item,
              Self: Sized;

    /// Converts the array to immutable slice
    fn as_slice(&self) -> &[Self::Item];

    /// Converts the array to mutable slice
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

impl<T, const N: usize> Array for [T; N] {
    type Item = T;

    #[inline(always)]
    fn slot_count() -> usize {
        N
    }

    #[inline]
    fn from_fn<F>(f: F) -> Self
        where F: FnMut(usize) -> T
    {
        core::array::from_fn(f)
    }

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Array;
    use generic_array::sequence::GenericSequence;
    use generic_array::typenum::Unsigned;
    use generic_array::{ArrayLength, GenericArray};

    impl<T, N> Array for GenericArray<T, N>
        where N: ArrayLength<T>
    {
        type Item = T;

        #[inline(always)]
        fn slot_count() -> usize {
            N::to_usize()
        }

        #[inline]
        fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> T
        {
            <GenericArray<T, N> as GenericSequence<T>>::generate(f)
        }

        #[inline(always)]
        fn as_slice(&self) -> &[T] {
            GenericArray::as_slice(self)
        }

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [T] {
            GenericArray::as_mut_slice(self)
        }
    }
}
