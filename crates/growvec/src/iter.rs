//! By-value iteration over a [`GrowVec`](crate::GrowVec).
//!
//! Borrowing iteration comes straight from the live-range slices; this
//! module adds the owning [`IntoIter`], which drains values out of the
//! buffer and lets the storage drop when the pass ends.

use std::mem;
use std::slice;

use crate::array::GrowVec;
use crate::buf::OwnedBuf;

/// Owning iterator that moves values out of the buffer front-to-back.
///
/// Drained slots are refilled with `T::default()`; the buffer itself is
/// released when the iterator is dropped.
pub struct IntoIter<T> {
    buf: OwnedBuf<T>,
    /// Next slot to yield from the front.
    front: usize,
    /// One past the last slot still to yield.
    back: usize,
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = mem::take(&mut self.buf.as_mut_slice()[self.front]);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(mem::take(&mut self.buf.as_mut_slice()[self.back]))
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, len) = self.into_parts();
        IntoIter {
            buf,
            front: 0,
            back: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::GrowVec;

    #[test]
    fn into_iter_yields_live_values_in_order() {
        let v = GrowVec::from([1, 2, 3]);
        let collected: Vec<u32> = v.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn into_iter_skips_spare_capacity() {
        let mut v: GrowVec<u32> = GrowVec::with_capacity(8);
        v.extend([4, 5]);
        assert_eq!(v.into_iter().count(), 2);
    }

    #[test]
    fn into_iter_is_double_ended() {
        let v = GrowVec::from([1, 2, 3, 4]);
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn size_hint_is_exact() {
        let v = GrowVec::from([9, 8, 7]);
        let mut it = v.into_iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn into_iter_moves_non_copy_values() {
        let mut v = GrowVec::new();
        v.push(String::from("alpha"));
        v.push(String::from("beta"));
        let words: Vec<String> = v.into_iter().collect();
        assert_eq!(words, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn borrowing_for_loops_work() {
        let mut v = GrowVec::from([1, 2, 3]);
        let mut total = 0;
        for x in &v {
            total += *x;
        }
        assert_eq!(total, 6);
        for x in &mut v {
            *x += 1;
        }
        assert_eq!(v.as_slice(), &[2, 3, 4]);
    }
}
