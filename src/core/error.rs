//! Error handling logic

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, QlinearError>;

/// Error types raised by the linear algebra core, the evolution engine and
/// the observable module.
///
/// Every operation validates its inputs eagerly and fails with one of these
/// variants instead of coercing or returning a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QlinearError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("Dimension Mismatch ({operation}): {message}")]
    DimensionMismatch {
        /// Name of the operation that rejected its operands.
        operation: &'static str,
        /// DimensionMismatch failure message
        message: String,
    },

    /// A position or index outside `[0, len)`.
    #[error("Index Out Of Range: index {index} for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the indexed dimension
        len: usize,
    },

    /// A zero-norm vector was used where division by its norm is required.
    #[error("Degenerate State: {message}")]
    DegenerateState {
        /// DegenerateState failure message
        message: String,
    },

    /// An observable-only operation received a matrix that is not Hermitian.
    #[error("Not Hermitian: matrix differs from its adjoint beyond tolerance {tolerance:e}")]
    NotHermitian {
        /// Tolerance used by the Hermiticity check
        tolerance: f64,
    },

    /// The computed variance is negative beyond numerical noise, which points
    /// at an unnormalized or malformed state.
    #[error("Negative Variance: {variance} (below -{tolerance:e})")]
    NegativeVariance {
        /// The offending variance
        variance: f64,
        /// Tolerance used for the comparison
        tolerance: f64,
    },

    /// A state vector failed boundary validation (normalization, distribution).
    #[error("Invalid State: {message}")]
    InvalidState {
        /// InvalidState failure message
        message: String,
    },

    /// An operator failed boundary validation (boolean, non-negative, unitary).
    #[error("Invalid Operator: {message}")]
    InvalidOperator {
        /// InvalidOperator failure message
        message: String,
    },

    /// The eigenvalue iteration did not converge within its budget.
    #[error("No Convergence: eigenvalue iteration exceeded {iterations} iterations")]
    NoConvergence {
        /// Iterations spent before giving up
        iterations: usize,
    },
}

impl QlinearError {
    pub(crate) fn dimension_mismatch(operation: &'static str, message: impl Into<String>) -> Self {
        QlinearError::DimensionMismatch { operation, message: message.into() }
    }
}
