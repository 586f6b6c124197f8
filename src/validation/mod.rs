// src/validation/mod.rs

//! Boundary checks for states and transition operators.
//!
//! These functions only inspect their input. The evolution engine never
//! normalizes or repairs a state; callers that need a probability
//! distribution or a unit-norm amplitude vector validate it here first.

use crate::core::constants::effective_tolerance;
use crate::core::{ComplexMatrix, ComplexVector, QlinearError, Result};
use crate::linalg::is_unitary;
use num_complex::Complex;

// --- Helper Functions ---

/// Finds the first entry with a non-negligible imaginary part or a negative
/// real part. Returns its index and value.
fn first_non_real_or_negative(entries: &[Complex<f64>], tolerance: f64) -> Option<(usize, Complex<f64>)> {
    entries
        .iter()
        .copied()
        .enumerate()
        .find(|(_, c)| c.im.abs() > tolerance || c.re < -tolerance)
}

// --- Public Validation Functions ---

/// Checks that the state vector is normalized (`Σ|v_i|² ≈ 1`).
///
/// # Arguments
/// * `state` - The amplitude vector to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `DEFAULT_TOLERANCE`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QlinearError::InvalidState)` otherwise.
pub fn check_normalization(state: &ComplexVector, tolerance: Option<f64>) -> Result<()> {
    let eps = effective_tolerance(tolerance);
    let norm_sq: f64 = state.iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > eps {
        Err(QlinearError::InvalidState {
            message: format!("State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})", norm_sq, eps),
        })
    } else {
        Ok(())
    }
}

/// Checks that the state is a probability distribution: real, non-negative
/// entries summing to 1.
pub fn check_probability_distribution(state: &ComplexVector, tolerance: Option<f64>) -> Result<()> {
    let eps = effective_tolerance(tolerance);
    if let Some((i, c)) = first_non_real_or_negative(state.as_slice(), eps) {
        return Err(QlinearError::InvalidState {
            message: format!("Entry {} = {} is not a non-negative real probability", i, c),
        });
    }
    let total: f64 = state.iter().map(|c| c.re).sum();
    if (total - 1.0).abs() > eps {
        return Err(QlinearError::InvalidState {
            message: format!("Probabilities sum to {} (Deviation > {})", total, eps),
        });
    }
    Ok(())
}

/// Checks that the state is a population vector: real, non-negative entries.
pub fn check_population(state: &ComplexVector, tolerance: Option<f64>) -> Result<()> {
    let eps = effective_tolerance(tolerance);
    match first_non_real_or_negative(state.as_slice(), eps) {
        Some((i, c)) => Err(QlinearError::InvalidState {
            message: format!("Entry {} = {} is not a non-negative real count", i, c),
        }),
        None => Ok(()),
    }
}

/// Checks that every operator entry is exactly `0` or `1`.
pub fn check_boolean_operator(operator: &ComplexMatrix) -> Result<()> {
    let (rows, cols) = operator.shape();
    for r in 0..rows {
        for c in 0..cols {
            let entry = operator.at(r, c);
            if entry.im != 0.0 || (entry.re != 0.0 && entry.re != 1.0) {
                return Err(QlinearError::InvalidOperator {
                    message: format!("Entry ({}, {}) = {} is not boolean", r, c, entry),
                });
            }
        }
    }
    Ok(())
}

/// Checks that every operator entry is real and non-negative.
pub fn check_nonnegative_operator(operator: &ComplexMatrix, tolerance: Option<f64>) -> Result<()> {
    let eps = effective_tolerance(tolerance);
    match first_non_real_or_negative(operator.as_slice(), eps) {
        Some((i, c)) => Err(QlinearError::InvalidOperator {
            message: format!(
                "Entry ({}, {}) = {} is not a non-negative real weight",
                i / operator.cols().max(1),
                i % operator.cols().max(1),
                c
            ),
        }),
        None => Ok(()),
    }
}

/// Checks that the operator is unitary within tolerance.
pub fn check_unitary(operator: &ComplexMatrix, tolerance: Option<f64>) -> Result<()> {
    if is_unitary(operator, tolerance) {
        Ok(())
    } else {
        Err(QlinearError::InvalidOperator {
            message: format!(
                "{}x{} operator is not unitary within tolerance {}",
                operator.rows(),
                operator.cols(),
                effective_tolerance(tolerance)
            ),
        })
    }
}
