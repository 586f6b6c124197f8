// src/lib.rs

//! `qlinear` - Complex linear algebra and discrete-time state evolution
//!
//! This library models systems whose state is a vector and whose dynamics is
//! a sequence of matrices: marbles moved by boolean matrices, bullets
//! diffusing through slits with probabilities, photons interfering through
//! slits with complex amplitudes. On top of the same algebra it provides the
//! basic measurement postulates of quantum mechanics.

pub mod core;
pub mod linalg;
pub mod validation;
pub mod evolution;
pub mod observable;
pub mod experiments;

// Re-export the most common types for easier top-level use
pub use crate::core::{ComplexMatrix, ComplexVector, QlinearError, Result, DEFAULT_TOLERANCE};
pub use linalg::{EigenDecomposition, eigen_decompose};
pub use evolution::{EvolutionSequence, EvolutionSequenceBuilder, EvolutionTrace, Evolver, StateKind, evolve, evolve_fixed};
pub use observable::{
    EigenProbabilities,
    Measurement,
    Observable,
    eigen_probabilities,
    mean_and_variance,
    probability_at_index,
    transition_amplitude,
};
pub use validation::{
    check_normalization,
    check_probability_distribution,
    check_unitary,
};

// Example 1: Quantum Double Slit
// A photon starts at the source (position 0) and one step of the slit
// matrix spreads its amplitude equally over both slits.
/// ```
/// use qlinear::{ComplexMatrix, ComplexVector, EvolutionSequenceBuilder, Evolver, StateKind, QlinearError};
/// use qlinear::core::FRAC_1_SQRT_2;
///
/// let s = FRAC_1_SQRT_2;
/// let slits = ComplexMatrix::from_real(&[
///     &[0.0, s, s],
///     &[s, 0.0, s],
///     &[s, s, 0.0],
/// ])?;
///
/// let sequence = EvolutionSequenceBuilder::new().add_op(slits).build();
/// let initial = ComplexVector::from_real(&[1.0, 0.0, 0.0]);
///
/// let trace = Evolver::with_validation(StateKind::Amplitude).run(&sequence, &initial)?;
/// println!("{}", trace);
///
/// let probabilities = trace.probabilities();
/// assert!(probabilities[0].abs() < 1e-12);
/// assert!((probabilities[1] - 0.5).abs() < 1e-12);
/// assert!((probabilities[2] - 0.5).abs() < 1e-12);
/// # Ok::<(), QlinearError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Measuring an Observable
// Mean and variance of a Hermitian observable, then its spectrum.
/// ```
/// use qlinear::{ComplexMatrix, ComplexVector, Observable, QlinearError, probability_at_index};
/// use num_complex::Complex;
///
/// // Probability of finding the particle at position 2
/// let v = ComplexVector::new(vec![
///     Complex::new(-3.0, -1.0),
///     Complex::new(0.0, -2.0),
///     Complex::new(0.0, 1.0),
///     Complex::new(2.0, 0.0),
/// ]);
/// let p = probability_at_index(&v, 2)?;
/// assert!((p - 1.0 / 19.0).abs() < 1e-12);
///
/// let omega = Observable::new(ComplexMatrix::from_real(&[&[1.0, 0.0], &[0.0, -1.0]])?, None)?;
/// let psi = ComplexVector::from_real(&[0.6, 0.8]);
/// let m = omega.mean_and_variance(&psi, None)?;
/// // 0.36 - 0.64
/// assert!((m.mean + 0.28).abs() < 1e-12);
/// assert!((m.variance - (1.0 - 0.28 * 0.28)).abs() < 1e-12);
///
/// let eig = omega.eigen_decompose()?;
/// assert_eq!(eig.real_eigenvalues(), vec![1.0, -1.0]);
/// # Ok::<(), QlinearError>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 3: Non-Hermitian Matrices Are Not Observables
/// ```
/// use qlinear::{ComplexMatrix, ComplexVector, QlinearError, mean_and_variance};
///
/// let shear = ComplexMatrix::from_real(&[&[1.0, 1.0], &[0.0, 1.0]])?;
/// let result = mean_and_variance(&shear, &ComplexVector::from_real(&[1.0, 0.0]), None);
/// assert!(matches!(result, Err(QlinearError::NotHermitian { .. })));
/// # Ok::<(), QlinearError>(())
/// ```
#[doc(hidden)]
const _: () = ();
