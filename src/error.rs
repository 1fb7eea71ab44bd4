//! Error types returned by `RingBuffer`.

#[cfg(feature = "std")]
use std::error::Error;
use core::fmt;

/// Error value indicating that an element was requested from an empty
/// container.
///
/// Returned by `front`, `back` and their `_mut` counterparts.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Hash, Default)]
pub struct EmptyContainer;

const EMPTY_ERROR: &str = "container is empty";

#[cfg(feature = "std")]
impl Error for EmptyContainer {}

impl fmt::Display for EmptyContainer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", EMPTY_ERROR)
    }
}

impl fmt::Debug for EmptyContainer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "EmptyContainer", EMPTY_ERROR)
    }
}
