// src/observable/mod.rs

//! Measurement postulates over state vectors: probability of finding the
//! system at a position, transition amplitudes between states, and the mean
//! and variance of a Hermitian observable.
//!
//! Operations that need an observable check Hermiticity first and fail with
//! `QlinearError::NotHermitian` rather than returning an empty result.

use crate::core::constants::effective_tolerance;
use crate::core::{ComplexMatrix, ComplexVector, QlinearError, Result};
use crate::linalg::{EigenDecomposition, apply, eigen_decompose, inner_product, is_hermitian, largest_modulus, norm};
use num_complex::Complex;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Mean and variance of measuring an observable in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub mean: f64,
    pub variance: f64,
}

impl Measurement {
    /// Standard deviation, `sqrt(max(variance, 0))`.
    pub fn std_dev(&self) -> f64 {
        self.variance.max(0.0).sqrt()
    }
}

/// Eigenvalues of an observable together with the transition probability
/// from a state into each of a list of candidate states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenProbabilities {
    /// Real spectrum of the observable.
    pub eigenvalues: Vec<f64>,
    /// `probabilities[i]` belongs to the `i`-th candidate state.
    pub probabilities: Vec<f64>,
}

/// A square matrix that passed the Hermiticity check.
///
/// Only serializable one way: loading goes through `ComplexMatrix` and
/// `Observable::new`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observable {
    matrix: ComplexMatrix,
}

impl Observable {
    /// Wraps `matrix` if it is Hermitian within `tolerance`.
    pub fn new(matrix: ComplexMatrix, tolerance: Option<f64>) -> Result<Self> {
        if !is_hermitian(&matrix, tolerance) {
            return Err(QlinearError::NotHermitian { tolerance: effective_tolerance(tolerance) });
        }
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &ComplexMatrix {
        &self.matrix
    }

    /// Dimension of the space the observable acts on.
    pub fn dim(&self) -> usize {
        self.matrix.rows()
    }

    /// `⟨ψ|Ω|ψ⟩` and `⟨ψ|Ω²|ψ⟩ - mean²`.
    ///
    /// The state is used as given. A variance below `-tolerance` means the
    /// state was not normalized (or is malformed) and fails with
    /// `NegativeVariance`; smaller negative values are numerical noise and
    /// are returned unchanged.
    pub fn mean_and_variance(&self, state: &ComplexVector, tolerance: Option<f64>) -> Result<Measurement> {
        let omega_psi = apply(&self.matrix, state)?;
        let omega2_psi = apply(&self.matrix, &omega_psi)?;
        // ⟨ψ|Ωψ⟩ = Σ conj(ψ_i)(Ωψ)_i
        let mean = inner_product(&omega_psi, state)?.re;
        let second_moment = inner_product(&omega2_psi, state)?.re;
        let variance = second_moment - mean * mean;

        let eps = effective_tolerance(tolerance);
        if variance < -eps {
            return Err(QlinearError::NegativeVariance { variance, tolerance: eps });
        }
        Ok(Measurement { mean, variance })
    }

    /// Eigenvalues and eigenvectors of the observable.
    pub fn eigen_decompose(&self) -> Result<EigenDecomposition> {
        eigen_decompose(&self.matrix)
    }
}

/// `|state[index]|² / ‖state‖²`.
///
/// # Errors
/// * `IndexOutOfRange` if `index >= state.len()`.
/// * `DegenerateState` if the state is the zero vector.
pub fn probability_at_index(state: &ComplexVector, index: usize) -> Result<f64> {
    state.get(index)?;
    let weights = scaled_weights(state, "probability at index")?;
    Ok(weights[index] / weights.iter().sum::<f64>())
}

/// Probability of every position at once; sums to 1.
pub fn position_probabilities(state: &ComplexVector) -> Result<Vec<f64>> {
    let weights = scaled_weights(state, "position probabilities")?;
    let total: f64 = weights.iter().sum();
    Ok(weights.into_iter().map(|w| w / total).collect())
}

/// `|⟨b, a⟩|²`, the squared magnitude of the inner product.
pub fn transition_amplitude(a: &ComplexVector, b: &ComplexVector) -> Result<f64> {
    Ok(inner_product(b, a)?.norm_sqr())
}

/// `⟨a, b⟩ / (‖a‖ ‖b‖)`: the complex transition amplitude between the
/// normalized versions of `a` and `b`.
pub fn normalized_transition_amplitude(a: &ComplexVector, b: &ComplexVector) -> Result<Complex<f64>> {
    let unit_a = unit(a, "normalized transition amplitude")?;
    let unit_b = unit(b, "normalized transition amplitude")?;
    inner_product(&unit_a, &unit_b)
}

/// Mean and variance of `observable` in `state`.
///
/// # Errors
/// * `NotHermitian` if `observable` is not Hermitian within `tolerance`.
/// * `DimensionMismatch` if the state does not fit the observable.
/// * `NegativeVariance` if the variance is below `-tolerance`.
pub fn mean_and_variance(observable: &ComplexMatrix, state: &ComplexVector, tolerance: Option<f64>) -> Result<Measurement> {
    Observable::new(observable.clone(), tolerance)?.mean_and_variance(state, tolerance)
}

/// The observable's eigenvalues, paired with `transition_amplitude(state,
/// candidate)` for each candidate final state.
///
/// The probabilities are taken against the candidates as given, not against
/// the observable's eigenvectors.
pub fn eigen_probabilities(
    observable: &ComplexMatrix,
    state: &ComplexVector,
    candidates: &[ComplexVector],
    tolerance: Option<f64>,
) -> Result<EigenProbabilities> {
    let observable = Observable::new(observable.clone(), tolerance)?;
    if state.len() != observable.dim() {
        return Err(QlinearError::dimension_mismatch(
            "eigen probabilities",
            format!("state has length {} but the observable is {}x{}", state.len(), observable.dim(), observable.dim()),
        ));
    }
    let probabilities = candidates
        .iter()
        .map(|candidate| transition_amplitude(state, candidate))
        .collect::<Result<Vec<f64>>>()?;
    let eigenvalues = observable.eigen_decompose()?.real_eigenvalues();
    Ok(EigenProbabilities { eigenvalues, probabilities })
}

/// Draws a position with probability `probability_at_index(state, i)`.
pub fn sample_position<R: Rng + ?Sized>(state: &ComplexVector, rng: &mut R) -> Result<usize> {
    let probabilities = position_probabilities(state)?;
    let draw: f64 = rng.random::<f64>();
    let mut cumulative = 0.0;
    for (i, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if draw < cumulative {
            return Ok(i);
        }
    }
    // Rounding can leave the cumulative sum just under 1
    Ok(probabilities.iter().rposition(|&p| p > 0.0).unwrap_or(0))
}

fn degenerate(state: &ComplexVector, operation: &str) -> QlinearError {
    QlinearError::DegenerateState {
        message: format!("{} requires a non-zero state vector of length {}", operation, state.len()),
    }
}

/// `|v_i / m|²` with `m` the largest entry modulus, so the weights neither
/// underflow nor overflow. They are proportional to `|v_i|²`.
fn scaled_weights(state: &ComplexVector, operation: &str) -> Result<Vec<f64>> {
    let largest = largest_modulus(state);
    if largest == 0.0 {
        return Err(degenerate(state, operation));
    }
    Ok(state.iter().map(|c| (c / largest).norm_sqr()).collect())
}

fn unit(state: &ComplexVector, operation: &str) -> Result<ComplexVector> {
    let length = norm(state);
    if length == 0.0 {
        return Err(degenerate(state, operation));
    }
    Ok(state.iter().map(|c| c / length).collect())
}
