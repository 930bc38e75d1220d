use std::fmt;

use thiserror::Error;

/// Which dimension of a matrix an index or length refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised when a matrix is used in a way its shape or kind does not allow.
///
/// Every variant signals caller misuse; operations validate before mutating,
/// so a returned error means the matrix was left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A 1-based index fell outside `[1, bound]`.
    #[error("{axis} index {index} out of range [1, {bound}]")]
    Index {
        axis: Axis,
        index: usize,
        bound: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {operation}: expected {expected}, got {found}")]
    Dimension {
        operation: &'static str,
        expected: String,
        found: String,
    },

    /// The matrix kind forbids the requested operation or value.
    #[error("invalid operation on {kind} matrix: {reason}")]
    InvalidOperation { kind: &'static str, reason: String },
}

impl MatrixError {
    pub(crate) fn dimension(
        operation: &'static str,
        expected: impl fmt::Display,
        found: impl fmt::Display,
    ) -> Self {
        MatrixError::Dimension {
            operation,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub(crate) fn invalid(kind: &'static str, reason: impl Into<String>) -> Self {
        MatrixError::InvalidOperation {
            kind,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
