// src/experiments/mod.rs

//! The three experiments of the classical-to-quantum progression.
//!
//! Each takes a transition operator, an initial state, a number of steps and
//! an optional tolerance (`None` means `DEFAULT_TOLERANCE`). It checks the
//! state (and where meaningful the operator) for the kind of system it
//! models, then runs the fixed-operator evolution. Nothing is normalized
//! along the way.

use crate::core::{ComplexMatrix, ComplexVector, Result};
use crate::evolution::evolve_fixed;
use crate::validation::{
    check_boolean_operator, check_nonnegative_operator, check_normalization, check_population,
    check_probability_distribution,
};

/// Deterministic marble movement: a population of marbles pushed around by
/// a boolean transition matrix.
///
/// # Errors
/// * `InvalidState` if the initial counts are negative or complex.
/// * `InvalidOperator` if some entry is not exactly 0 or 1.
/// * `DimensionMismatch` if the operator does not fit the state.
pub fn marbles(
    transition: &ComplexMatrix,
    initial: &ComplexVector,
    steps: usize,
    tolerance: Option<f64>,
) -> Result<ComplexVector> {
    check_population(initial, tolerance)?;
    check_boolean_operator(transition)?;
    evolve_fixed(initial, transition, steps)
}

/// Probabilistic bullets through a multi-slit wall.
///
/// The operator only needs non-negative real weights. Columns are not
/// required to sum to one, so mass can leave the system.
pub fn classical_slits(
    transition: &ComplexMatrix,
    initial: &ComplexVector,
    steps: usize,
    tolerance: Option<f64>,
) -> Result<ComplexVector> {
    check_probability_distribution(initial, tolerance)?;
    check_nonnegative_operator(transition, tolerance)?;
    evolve_fixed(initial, transition, steps)
}

/// Photons through a multi-slit wall, evolving probability amplitudes.
///
/// Only the initial state is checked; the operator may be any complex
/// matrix of the right shape.
pub fn quantum_slits(
    transition: &ComplexMatrix,
    initial: &ComplexVector,
    steps: usize,
    tolerance: Option<f64>,
) -> Result<ComplexVector> {
    check_normalization(initial, tolerance)?;
    evolve_fixed(initial, transition, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FRAC_1_SQRT_2, QlinearError};

    fn marble_operator() -> ComplexMatrix {
        ComplexMatrix::from_real(&[
            &[0.0, 0.0, 1.0, 0.0],
            &[0.0, 1.0, 0.0, 0.0],
            &[1.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_marbles() -> Result<()> {
        let state = marbles(&marble_operator(), &ComplexVector::from_real(&[1.0, 0.0, 0.0, 0.0]), 1, None)?;
        assert_eq!(state, ComplexVector::from_real(&[0.0, 0.0, 1.0, 0.0]));

        // Marble counts are conserved by a permutation
        let state = marbles(&marble_operator(), &ComplexVector::from_real(&[6.0, 2.0, 1.0, 5.0]), 3, None)?;
        assert_eq!(state, ComplexVector::from_real(&[1.0, 2.0, 6.0, 5.0]));
        Ok(())
    }

    #[test]
    fn test_marbles_rejects_negative_counts() {
        let result = marbles(&marble_operator(), &ComplexVector::from_real(&[-1.0, 0.0, 0.0, 0.0]), 1, None);
        assert!(matches!(result, Err(QlinearError::InvalidState { .. })));
    }

    #[test]
    fn test_classical_slits_loses_mass_through_zero_column() -> Result<()> {
        let op = ComplexMatrix::from_real(&[&[0.0, 0.5, 0.5], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])?;
        let state = classical_slits(&op, &ComplexVector::from_real(&[1.0, 0.0, 0.0]), 1, None)?;
        assert_eq!(state, ComplexVector::zeros(3));
        Ok(())
    }

    #[test]
    fn test_classical_slits_rejects_bad_inputs() -> Result<()> {
        let op = ComplexMatrix::from_real(&[&[0.0, 0.5], &[1.0, 0.5]])?;
        assert!(classical_slits(&op, &ComplexVector::from_real(&[2.0, 0.0]), 1, None).is_err());
        let negative = ComplexMatrix::from_real(&[&[0.0, -0.5], &[1.0, 0.5]])?;
        assert!(matches!(
            classical_slits(&negative, &ComplexVector::from_real(&[1.0, 0.0]), 1, None),
            Err(QlinearError::InvalidOperator { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_quantum_slits_accepts_non_unitary_operator() -> Result<()> {
        let s = FRAC_1_SQRT_2;
        let op = ComplexMatrix::from_real(&[&[0.0, s, s], &[s, 0.0, s], &[s, s, 0.0]])?;
        let state = quantum_slits(&op, &ComplexVector::from_real(&[1.0, 0.0, 0.0]), 1, None)?;
        assert!((state.get(1)?.re - 0.70710678).abs() < 1e-8);
        assert!((state.get(2)?.re - 0.70710678).abs() < 1e-8);
        assert!(quantum_slits(&op, &ComplexVector::from_real(&[1.0, 1.0, 0.0]), 1, None).is_err());
        Ok(())
    }

    #[test]
    fn test_tolerance_is_passed_through() -> Result<()> {
        let s = FRAC_1_SQRT_2;
        let op = ComplexMatrix::from_real(&[&[0.0, s, s], &[s, 0.0, s], &[s, s, 0.0]])?;
        let almost = ComplexVector::from_real(&[1.0, 1e-2, 0.0]);
        assert!(quantum_slits(&op, &almost, 1, None).is_err());
        assert!(quantum_slits(&op, &almost, 1, Some(1e-2)).is_ok());

        let bullets = ComplexMatrix::from_real(&[&[0.0, 0.5, 0.5], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])?;
        let short = ComplexVector::from_real(&[0.999, 0.0, 0.0]);
        assert!(matches!(classical_slits(&bullets, &short, 1, None), Err(QlinearError::InvalidState { .. })));
        assert!(classical_slits(&bullets, &short, 1, Some(1e-2)).is_ok());
        Ok(())
    }
}
