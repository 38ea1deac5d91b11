//! The owned raw buffer underlying [`GrowVec`](crate::GrowVec).
//!
//! An [`OwnedBuf`] is a fixed-length contiguous allocation of
//! default-constructed slots. It never resizes in place — a new length
//! means a new buffer, installed via [`OwnedBuf::swap`]. The storage is
//! released exactly once when the buffer is dropped.

use std::mem;

/// Exclusive owner of a contiguous allocation with a fixed slot count.
///
/// `OwnedBuf` is a trivial leaf: it knows nothing about live versus
/// spare slots. [`GrowVec`](crate::GrowVec) layers len/capacity
/// bookkeeping on top and does all index arithmetic through
/// [`as_slice`](OwnedBuf::as_slice) / [`as_mut_slice`](OwnedBuf::as_mut_slice).
pub struct OwnedBuf<T> {
    /// Backing storage. Exactly as many slots as were requested at
    /// allocation time; a zero-length buffer holds no allocation.
    slots: Box<[T]>,
}

impl<T> OwnedBuf<T> {
    /// Create a buffer that owns no storage.
    pub fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Number of slots this buffer owns.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the buffer owns no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw shared access to every slot, spare slots included.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Raw mutable access to every slot, spare slots included.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchange owned storage with `other` in O(1).
    ///
    /// No slot is moved, cloned, or dropped; only ownership of the two
    /// allocations changes hands.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
    }
}

impl<T: Default> OwnedBuf<T> {
    /// Allocate exactly `len` default-constructed slots.
    ///
    /// `len == 0` produces no allocation, same as [`OwnedBuf::empty`].
    pub fn new(len: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(len, T::default);
        Self {
            slots: slots.into_boxed_slice(),
        }
    }
}

impl<T> Default for OwnedBuf<T> {
    fn default() -> Self {
        Self::empty()
    }
}
