// src/linalg/eigen.rs

//! Eigen-decomposition of small square complex matrices.
//!
//! Hermitian input goes through nalgebra's `SymmetricEigen`, which yields a
//! real spectrum and orthonormal eigenvectors. Any other square matrix is
//! brought to a complex Schur form `A = Q T Qᴴ` with nalgebra's `Schur`;
//! eigenvalues are the diagonal of `T` and eigenvectors come from back
//! substitution on `T`, mapped back through `Q`.

use super::{is_hermitian, norm};
use crate::core::{ComplexMatrix, ComplexVector, QlinearError, Result};
use nalgebra::{DMatrix, Schur, SymmetricEigen};
use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Iteration budget per eigenvalue before giving up.
const MAX_ITERATIONS_PER_EIGENVALUE: usize = 30;

/// Relative threshold under which back substitution treats a pivot as a
/// repeated eigenvalue.
const DEGENERACY_THRESHOLD: f64 = 1e-10;

/// Eigenvalues of a square matrix paired with unit-norm eigenvectors.
///
/// `eigenvectors[k]` belongs to `eigenvalues[k]`. Each eigenvector is scaled
/// so that its largest-modulus component is real and positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenDecomposition {
    pub eigenvalues: Vec<Complex<f64>>,
    pub eigenvectors: Vec<ComplexVector>,
}

impl EigenDecomposition {
    /// Number of eigenpairs.
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Iterates over `(eigenvalue, eigenvector)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (Complex<f64>, &ComplexVector)> {
        self.eigenvalues.iter().copied().zip(self.eigenvectors.iter())
    }

    /// Real parts of the eigenvalues. Meaningful for Hermitian input, whose
    /// spectrum is real.
    pub fn real_eigenvalues(&self) -> Vec<f64> {
        self.eigenvalues.iter().map(|l| l.re).collect()
    }
}

/// Computes eigenvalues and eigenvectors of a square matrix.
///
/// Diagonal input returns its diagonal, in order, with the standard basis.
///
/// # Errors
/// * `DimensionMismatch` if `m` is not square.
/// * `NoConvergence` if the iteration exhausts its budget.
pub fn eigen_decompose(m: &ComplexMatrix) -> Result<EigenDecomposition> {
    if !m.is_square() {
        return Err(QlinearError::dimension_mismatch(
            "eigen-decomposition",
            format!("matrix is {}x{}, expected a square matrix", m.rows(), m.cols()),
        ));
    }
    let n = m.rows();
    if is_diagonal(m) {
        return Ok(EigenDecomposition {
            eigenvalues: (0..n).map(|k| m.at(k, k)).collect(),
            eigenvectors: (0..n).map(|k| ComplexVector::basis(n, k)).collect::<Result<_>>()?,
        });
    }

    let budget = MAX_ITERATIONS_PER_EIGENVALUE * n;
    let dense = DMatrix::from_row_slice(n, n, m.as_slice());
    if is_hermitian(m, Some(0.0)) {
        let eig = SymmetricEigen::try_new(dense, f64::EPSILON, budget)
            .ok_or(QlinearError::NoConvergence { iterations: budget })?;
        let eigenvalues = eig.eigenvalues.iter().map(|&l| Complex::new(l, 0.0)).collect();
        let eigenvectors = eig
            .eigenvectors
            .column_iter()
            .map(|col| fix_phase(col.iter().copied().collect()))
            .collect();
        return Ok(EigenDecomposition { eigenvalues, eigenvectors });
    }

    let (q, t) = Schur::try_new(dense, f64::EPSILON, budget)
        .ok_or(QlinearError::NoConvergence { iterations: budget })?
        .unpack();
    let scale = t.norm().max(f64::MIN_POSITIVE);
    let eigenvalues = (0..n).map(|k| t[(k, k)]).collect();
    let eigenvectors = (0..n).map(|k| schur_eigenvector(&t, &q, k, scale)).collect();
    Ok(EigenDecomposition { eigenvalues, eigenvectors })
}

fn is_diagonal(m: &ComplexMatrix) -> bool {
    let n = m.rows();
    (0..n).all(|r| (0..n).all(|c| r == c || m.at(r, c).is_zero()))
}

/// Eigenvector for `t[(k, k)]`: solves `(T - λI) y = 0` with `y_k = 1` and
/// `y_j = 0` for `j > k`, then returns `Q y` normalized.
fn schur_eigenvector(t: &DMatrix<Complex<f64>>, q: &DMatrix<Complex<f64>>, k: usize, scale: f64) -> ComplexVector {
    let n = t.nrows();
    let lambda = t[(k, k)];
    let near = DEGENERACY_THRESHOLD * scale;
    let tiny = f64::EPSILON * scale;

    let mut y = vec![Complex::zero(); n];
    y[k] = Complex::one();
    for j in (0..k).rev() {
        let rhs: Complex<f64> = (j + 1..=k).map(|m| t[(j, m)] * y[m]).sum();
        let pivot = t[(j, j)] - lambda;
        y[j] = if pivot.norm() > near {
            -rhs / pivot
        } else if rhs.norm() <= near {
            // Repeated eigenvalue with a decoupled block: keep the Schur vector.
            Complex::zero()
        } else {
            -rhs / Complex::new(tiny, 0.0)
        };
    }

    fix_phase(
        (0..n)
            .map(|i| (0..=k).map(|j| q[(i, j)] * y[j]).sum::<Complex<f64>>())
            .collect(),
    )
}

/// Scales `v` to unit norm with its largest-modulus component real and
/// positive. The zero vector is returned unchanged.
fn fix_phase(v: ComplexVector) -> ComplexVector {
    let length = norm(&v);
    let pivot = v
        .iter()
        .copied()
        .fold(Complex::zero(), |best: Complex<f64>, c| if c.norm() > best.norm() { c } else { best });
    if length == 0.0 || pivot.norm() == 0.0 {
        return v;
    }
    let phase = pivot / pivot.norm();
    v.iter().map(|&c| c / phase / length).collect()
}
