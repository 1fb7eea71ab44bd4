//! Index arithmetic over the slot array.
//!
//! All functions take the number of slots, i.e. the capacity plus the
//! free sentinel slot.

#[inline]
pub fn wrap_add(index: usize, addend: usize, slots: usize) -> usize {
    debug_assert!(addend <= slots, "wrap_add index={} addend={} slots={}", index, addend, slots);
    (index + addend) % slots
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, slots: usize) -> usize {
    debug_assert!(subtrahend <= slots, "wrap_sub index={} subtrahend={} slots={}", index, subtrahend, slots);
    (index + slots - subtrahend) % slots
}

/// Moves `index` one slot towards the back.
#[inline]
pub fn advance(index: usize, slots: usize) -> usize {
    wrap_add(index, 1, slots)
}

/// Moves `index` one slot towards the front.
#[inline]
pub fn retreat(index: usize, slots: usize) -> usize {
    if index == 0 {
        slots - 1
    } else {
        index - 1
    }
}

/// Number of slots walked going from `head` forward to `tail`.
#[inline]
pub fn count(head: usize, tail: usize, slots: usize) -> usize {
    debug_assert!(head < slots);
    debug_assert!(tail < slots);
    if tail >= head {
        tail - head
    } else {
        slots + tail - head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_to_zero() {
        assert_eq!(advance(0, 6), 1);
        assert_eq!(advance(5, 6), 0);
    }

    #[test]
    fn retreat_wraps_to_last() {
        assert_eq!(retreat(3, 6), 2);
        assert_eq!(retreat(0, 6), 5);
    }

    #[test]
    fn count_across_wrap() {
        assert_eq!(count(2, 2, 6), 0);
        assert_eq!(count(1, 4, 6), 3);
        assert_eq!(count(4, 1, 6), 3);
        assert_eq!(count(5, 4, 6), 5);
    }

    #[test]
    fn wrap_sub_is_inverse_of_wrap_add() {
        for i in 0..6 {
            for n in 0..=6 {
                assert_eq!(wrap_sub(wrap_add(i, n, 6), n, 6), i);
            }
        }
    }
}
