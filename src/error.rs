//! Error types for the checked entry points.
//!
//! The vector primitives themselves never fail: they follow IEEE-754 semantics
//! and leave pointer validity to the caller. These errors are only produced by
//! the safe slice drivers and the bounds-checked gathers, which validate their
//! inputs before handing them to the primitives.

use std::fmt;

/// Errors that can occur in the checked operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two operands that must have the same length did not.
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// A gather index pointed outside the source slice.
    IndexOutOfBounds {
        /// Position of the offending index in the index slice.
        lane: usize,
        /// The index value as given.
        index: i32,
        /// Length of the source slice.
        len: usize,
    },
    /// Input validation error.
    Validation {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LengthMismatch { left, right } => write!(
                f,
                "Length mismatch: operands must have the same length (left: {}, right: {})",
                left, right
            ),
            Error::IndexOutOfBounds { lane, index, len } => write!(
                f,
                "Index out of bounds: index {} at lane {} (source length: {})",
                index, lane, len
            ),
            Error::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for checked operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Creates a length mismatch error.
pub fn length_mismatch(left: usize, right: usize) -> Error {
    Error::LengthMismatch { left, right }
}

/// Creates an out-of-bounds gather index error.
pub fn index_out_of_bounds(lane: usize, index: i32, len: usize) -> Error {
    Error::IndexOutOfBounds { lane, index, len }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> Error {
    Error::Validation {
        message: message.into(),
    }
}
