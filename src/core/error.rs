//! Error handling logic

use std::fmt;

/// Failures raised by the operator algebra.
///
/// Numerical degeneracy (near-zero magnitudes, vanishing `sin θ`) is never an
/// error: the decomposition and interpolation routines fall back to
/// well-defined formulas instead. Only genuinely undefined arithmetic and
/// malformed input surface here.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QuopError {
    /// Division of a complex value by an exact zero.
    DivisionByZero {
        /// DivisionByZero failure message
        message: String,
    },

    /// An operator was built from the wrong number of entries.
    MalformedOperator {
        /// Entry count a 2x2 operator requires (always 4).
        expected: usize,
        /// Entry count that was supplied.
        found: usize,
    },

    /// Text entry could not be read as a complex number or operator.
    Parse {
        /// The offending input, as given.
        input: String,
        /// Parse failure message
        message: String,
    },

    /// An operator expected to be unitary deviates beyond tolerance.
    NonUnitary {
        /// NonUnitary failure message
        message: String,
    },

    /// A decomposition factor violates its structural contract
    /// (e.g. a singular value matrix that is not non-negative diagonal).
    InvalidDecomposition {
        /// InvalidDecomposition failure message
        message: String,
    },
}

impl fmt::Display for QuopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuopError::DivisionByZero { message } => write!(f, "Division by Zero: {}", message),
            QuopError::MalformedOperator { expected, found } => write!(
                f,
                "Malformed Operator: expected {} entries, found {}",
                expected, found
            ),
            QuopError::Parse { input, message } => write!(f, "Parse Error ({:?}): {}", input, message),
            QuopError::NonUnitary { message } => write!(f, "Non-Unitary Operator: {}", message),
            QuopError::InvalidDecomposition { message } => write!(f, "Invalid Decomposition: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QuopError {}
