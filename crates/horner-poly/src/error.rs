//! Errors raised by polynomial construction, access and division.

use thiserror::Error;

/// Result alias for fallible polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;

/// Broad category of a [`PolyError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor argument was out of its domain.
    InvalidArgument,
    /// A coefficient index was out of range, or there was nothing to remove.
    IndexError,
    /// Long division against a divisor with a zero leading coefficient.
    DivisionFault,
}

/// Errors that can occur while building or operating on a polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error("degree cannot be negative (got {0})")]
    NegativeDegree(i64),

    #[error("index {index} out of range for polynomial of degree {degree}")]
    IndexOutOfRange { index: usize, degree: usize },

    #[error("no term to remove")]
    NoTermToRemove,

    #[error("division by a polynomial whose leading coefficient is zero")]
    ZeroLeadingCoefficient,
}

impl PolyError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PolyError::NegativeDegree(_) => ErrorKind::InvalidArgument,
            PolyError::IndexOutOfRange { .. } | PolyError::NoTermToRemove => ErrorKind::IndexError,
            PolyError::ZeroLeadingCoefficient => ErrorKind::DivisionFault,
        }
    }
}
