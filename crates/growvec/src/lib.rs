//! Growable contiguous array with explicit capacity control.
//!
//! [`GrowVec`] is a dynamic array layered over a single owned raw buffer
//! ([`OwnedBuf`]). It exposes random access, amortized-constant append and
//! removal at the end, linear insert/remove at arbitrary positions, and
//! explicit capacity reservation.
//!
//! # Architecture
//!
//! ```text
//! GrowVec<T> (len + capacity bookkeeping, growth policy)
//! └── OwnedBuf<T> (exactly `capacity` default-constructed slots;
//!                  replaced wholesale on growth, never resized in place)
//! ```
//!
//! Slots `[0, len)` are live; slots `[len, capacity)` are allocated but
//! logically absent and never observable through the public API.
//!
//! # Growth policies
//!
//! Two deliberately different strategies coexist:
//!
//! - [`GrowVec::push`] and [`GrowVec::insert`] double capacity when full
//!   (`max(1, 2 * capacity)`), giving amortized O(1) append.
//! - [`GrowVec::resize`] and [`GrowVec::reserve`] allocate an exact-fit
//!   buffer for the requested length or capacity.
//!
//! # Error model
//!
//! Checked access ([`GrowVec::at`] / [`GrowVec::at_mut`]) returns a
//! recoverable [`ArrayError`]. Positional preconditions on
//! [`GrowVec::insert`] and [`GrowVec::remove`] are caller contracts:
//! violating them panics. The two channels are never mixed.
//!
//! # Concurrency
//!
//! Single-threaded by contract. There is no internal locking; `GrowVec<T>`
//! is `Send`/`Sync` exactly when `T` is, and concurrent use must be
//! serialized externally.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod buf;
mod cmp;
pub mod error;
pub mod iter;

// Public re-exports for the primary API surface.
pub use array::GrowVec;
pub use buf::OwnedBuf;
pub use error::ArrayError;
pub use iter::IntoIter;
