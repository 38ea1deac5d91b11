//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that checked container operations can report.
///
/// Only bounds-checked access is recoverable. Positional preconditions
/// on [`insert`](crate::GrowVec::insert) and
/// [`remove`](crate::GrowVec::remove) are caller contracts and panic on
/// violation instead of surfacing here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A checked access named an index at or beyond the live length.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The live length at the time of the access.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_length() {
        let err = ArrayError::IndexOutOfBounds { index: 9, len: 3 };
        assert_eq!(err.to_string(), "index 9 out of bounds for length 3");
    }

    #[test]
    fn implements_std_error() {
        let err = ArrayError::IndexOutOfBounds { index: 0, len: 0 };
        let _: &dyn Error = &err;
    }
}
