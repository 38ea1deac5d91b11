//! Benchmark fixtures for the growvec container.
//!
//! Provides pre-built arrays so the criterion benches measure the
//! operation under test rather than setup cost.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growvec::GrowVec;

/// Build an array of `n` sequential values with exact-fit capacity.
pub fn sequential(n: usize) -> GrowVec<u64> {
    let mut v = GrowVec::with_capacity(n);
    v.extend(0..n as u64);
    v
}

/// Build an empty array with `n` slots reserved.
pub fn reserved(n: usize) -> GrowVec<u64> {
    GrowVec::with_capacity(n)
}
