//! The [`GrowVec`] dynamic array.
//!
//! Len/capacity bookkeeping and the growth policy live here; raw storage
//! is delegated to [`OwnedBuf`]. Two growth strategies coexist on
//! purpose: [`push`](GrowVec::push) and [`insert`](GrowVec::insert)
//! double capacity when full, while [`resize`](GrowVec::resize) and
//! [`reserve`](GrowVec::reserve) allocate exact-fit buffers.

use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::buf::OwnedBuf;
use crate::error::ArrayError;

/// A growable contiguous array over a single owned buffer.
///
/// Slots `[0, len)` hold live values; slots `[len, capacity)` are
/// allocated spares holding stale or default values that the public API
/// never exposes. Capacity only grows or is replaced wholesale — a size
/// decrease never releases storage.
///
/// Most operations require `T: Default` because the buffer
/// default-constructs its slots and vacated slots are refilled with
/// `T::default()` when a value is moved out. Read-only accessors carry
/// no bound.
///
/// # Example
///
/// ```
/// use growvec::GrowVec;
///
/// let mut v = GrowVec::from([10, 20, 30]);
/// v.remove(1);
/// v.insert(1, 99);
/// assert_eq!(v.as_slice(), &[10, 99, 30]);
/// ```
pub struct GrowVec<T> {
    /// Backing storage. Always exactly `capacity` slots long.
    buf: OwnedBuf<T>,
    /// Number of live elements. Invariant: `len <= buf.len()`.
    len: usize,
}

impl<T> GrowVec<T> {
    /// Create an empty array with no allocation.
    pub fn new() -> Self {
        Self {
            buf: OwnedBuf::empty(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Total slots currently allocated, spare tail included.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live range `[0, len)` as a shared slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// The live range `[0, len)` as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf.as_mut_slice()[..self.len]
    }

    /// Checked access: a reference to the element at `index`.
    ///
    /// Returns [`ArrayError::IndexOutOfBounds`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.as_slice().get(index).ok_or(ArrayError::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Checked access: a mutable reference to the element at `index`.
    ///
    /// Returns [`ArrayError::IndexOutOfBounds`] when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// The first live element, or `None` when empty.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The last live element, or `None` when empty.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Iterate over the live range. Each call yields a fresh pass.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutably iterate over the live range.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drop all live elements from the logical contents.
    ///
    /// O(1): only the length is reset. Capacity and buffer contents are
    /// retained for reuse; the vacated slots keep their old values but
    /// are no longer observable.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrink the live length to `new_len` if it is smaller.
    ///
    /// Like [`clear`](GrowVec::clear), this never reallocates or
    /// releases storage. A `new_len >= len` is a no-op.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Exchange buffers, lengths, and capacities with `other` in O(1).
    ///
    /// No element is moved or cloned.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Decompose into the raw buffer and live length.
    pub(crate) fn into_parts(self) -> (OwnedBuf<T>, usize) {
        (self.buf, self.len)
    }
}

impl<T: Default> GrowVec<T> {
    /// Create an array of `len` default values; `len == capacity == n`.
    pub fn with_len(len: usize) -> Self {
        Self {
            buf: OwnedBuf::new(len),
            len,
        }
    }

    /// Create an empty array with `capacity` slots reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: OwnedBuf::new(capacity),
            len: 0,
        }
    }

    /// Append `value` at the end.
    ///
    /// When full, capacity doubles (`max(1, 2 * capacity)`) and every
    /// live element is moved into the new buffer, so a single call is
    /// O(n) but a sequence of appends is amortized O(1).
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            let doubled = self.capacity().saturating_mul(2).max(1);
            self.regrow(doubled);
        }
        self.buf.as_mut_slice()[self.len] = value;
        self.len += 1;
    }

    /// Remove and return the last live element, or `None` when empty.
    ///
    /// Capacity is never reclaimed. The vacated slot is refilled with
    /// `T::default()`.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(mem::take(&mut self.buf.as_mut_slice()[self.len]))
    }

    /// Insert `value` before the element at `index`.
    ///
    /// `index == len` appends. Within capacity the suffix shifts one
    /// slot right; when full, live elements are rebuilt into a doubled
    /// buffer with `value` interleaved at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`. This is a caller contract violation,
    /// not a recoverable error.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insert index {index} out of bounds for length {}",
            self.len
        );
        if self.len < self.capacity() {
            let slots = self.buf.as_mut_slice();
            // Appending needs no shift; the loop is empty then.
            for i in (index..self.len).rev() {
                slots[i + 1] = mem::take(&mut slots[i]);
            }
            slots[index] = value;
        } else {
            let doubled = self.capacity().saturating_mul(2).max(1);
            let mut fresh = OwnedBuf::new(doubled);
            {
                let old = self.buf.as_mut_slice();
                let new = fresh.as_mut_slice();
                for i in 0..index {
                    new[i] = mem::take(&mut old[i]);
                }
                new[index] = value;
                for i in index..self.len {
                    new[i + 1] = mem::take(&mut old[i]);
                }
            }
            self.buf.swap(&mut fresh);
        }
        self.len += 1;
    }

    /// Remove and return the element at `index`, shifting the suffix
    /// one slot left. O(len - index).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`. This is a caller contract violation,
    /// not a recoverable error.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "remove index {index} out of bounds for length {}",
            self.len
        );
        let slots = self.buf.as_mut_slice();
        let removed = mem::take(&mut slots[index]);
        for i in index..self.len - 1 {
            slots[i] = mem::take(&mut slots[i + 1]);
        }
        self.len -= 1;
        removed
    }

    /// Set the live length to `new_len`.
    ///
    /// Shrinking is O(1) and keeps the current buffer. Growing always
    /// allocates an exact-fit buffer of `new_len` slots, moves the old
    /// live elements in, and sets `len == capacity == new_len`; the new
    /// tail holds default values. The exact-fit policy is deliberate —
    /// `resize` does not share [`push`](GrowVec::push)'s doubling.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.len {
            self.len = new_len;
        } else {
            self.regrow(new_len);
            self.len = new_len;
        }
    }

    /// Ensure capacity is at least `new_capacity`.
    ///
    /// A request at or below the current capacity is a no-op. Otherwise
    /// a buffer of exactly `new_capacity` slots replaces the current
    /// one, with the live elements moved across. Length is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        self.regrow(new_capacity);
    }

    /// Move the contents out, leaving `self` empty with zero capacity.
    ///
    /// The one canonical post-transfer state: `len == 0`,
    /// `capacity == 0`, no allocation retained.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Replace the buffer with a fresh one of `new_capacity` slots and
    /// move the live elements into it. Length bookkeeping is left to
    /// the caller. Requires `new_capacity >= len`.
    fn regrow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = OwnedBuf::new(new_capacity);
        let live = &mut self.buf.as_mut_slice()[..self.len];
        for (dst, src) in fresh.as_mut_slice().iter_mut().zip(live.iter_mut()) {
            *dst = mem::take(src);
        }
        self.buf.swap(&mut fresh);
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Clone> GrowVec<T> {
    /// Create an array of `len` clones of `value`; `len == capacity`.
    pub fn filled(len: usize, value: T) -> Self {
        let mut array = Self::with_len(len);
        for slot in array.as_mut_slice() {
            *slot = value.clone();
        }
        array
    }
}

impl<T: Default + Clone> Clone for GrowVec<T> {
    /// Clones into an exact-fit buffer: the clone's capacity equals its
    /// length regardless of the source's spare slots.
    fn clone(&self) -> Self {
        let mut array = Self::with_len(self.len);
        for (dst, src) in array.as_mut_slice().iter_mut().zip(self.iter()) {
            *dst = src.clone();
        }
        array
    }
}

impl<T: Default, const N: usize> From<[T; N]> for GrowVec<T> {
    /// Build from a literal sequence with an exact-fit buffer.
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_len(N);
        for (dst, src) in array.as_mut_slice().iter_mut().zip(values) {
            *dst = src;
        }
        array
    }
}

impl<T: Default> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Default> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    /// Unchecked-contract access: the caller vouches for `index < len`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}
