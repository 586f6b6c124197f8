// src/linalg/mod.rs

//! Named linear algebra operations over `ComplexVector` and `ComplexMatrix`.
//!
//! Every operation returns a newly built value and leaves its arguments
//! untouched. Operations that combine two operands check their shapes first
//! and fail with `QlinearError::DimensionMismatch` instead of broadcasting.
//!
//! Tolerance-based predicates compare entries with the absolute rule
//! `|a - b| <= ε` (complex modulus of the difference), where `ε` defaults to
//! [`DEFAULT_TOLERANCE`](crate::core::DEFAULT_TOLERANCE).

pub mod eigen;

pub use eigen::{EigenDecomposition, eigen_decompose};

use crate::core::constants::effective_tolerance;
use crate::core::{ComplexMatrix, ComplexVector, QlinearError, Result};
use num_complex::Complex;

/// Values whose entries can be combined position by position.
///
/// Implemented by both `ComplexVector` and `ComplexMatrix`, so `add`,
/// `negate`, `scale`, `conjugate` and `approx_eq` accept either.
pub trait Elementwise: Sized {
    /// Shape used for compatibility checks; vectors report `(len, 1)`.
    fn dims(&self) -> (usize, usize);

    /// Entries in storage order.
    fn entries(&self) -> &[Complex<f64>];

    /// A value of the same shape holding `entries`.
    fn with_entries(&self, entries: Vec<Complex<f64>>) -> Self;

    /// Applies `f` to every entry.
    fn map_entries(&self, f: impl Fn(Complex<f64>) -> Complex<f64>) -> Self {
        self.with_entries(self.entries().iter().map(|&c| f(c)).collect())
    }
}

impl Elementwise for ComplexVector {
    fn dims(&self) -> (usize, usize) {
        (self.len(), 1)
    }

    fn entries(&self) -> &[Complex<f64>] {
        self.as_slice()
    }

    fn with_entries(&self, entries: Vec<Complex<f64>>) -> Self {
        ComplexVector::new(entries)
    }
}

impl Elementwise for ComplexMatrix {
    fn dims(&self) -> (usize, usize) {
        self.shape()
    }

    fn entries(&self) -> &[Complex<f64>] {
        self.as_slice()
    }

    fn with_entries(&self, entries: Vec<Complex<f64>>) -> Self {
        ComplexMatrix::from_parts(self.rows(), self.cols(), entries)
    }
}

/// Values that have a Kronecker (tensor) product.
pub trait Tensor: Sized {
    fn kron(&self, other: &Self) -> Self;
}

impl Tensor for ComplexVector {
    fn kron(&self, other: &Self) -> Self {
        self.iter()
            .flat_map(|&a| other.iter().map(move |&b| a * b))
            .collect()
    }
}

impl Tensor for ComplexMatrix {
    fn kron(&self, other: &Self) -> Self {
        let (rb, cb) = other.shape();
        ComplexMatrix::from_fn(self.rows() * rb, self.cols() * cb, |r, c| {
            self.at(r / rb, c / cb) * other.at(r % rb, c % cb)
        })
    }
}

fn ensure_same_shape<T: Elementwise>(operation: &'static str, a: &T, b: &T) -> Result<()> {
    if a.dims() != b.dims() {
        return Err(QlinearError::dimension_mismatch(
            operation,
            format!("operand shapes {:?} and {:?} differ", a.dims(), b.dims()),
        ));
    }
    Ok(())
}

/// Elementwise sum of two vectors or two matrices of identical shape.
pub fn add<T: Elementwise>(a: &T, b: &T) -> Result<T> {
    ensure_same_shape("add", a, b)?;
    Ok(a.with_entries(a.entries().iter().zip(b.entries()).map(|(x, y)| x + y).collect()))
}

/// Elementwise difference `a - b`.
pub fn subtract<T: Elementwise>(a: &T, b: &T) -> Result<T> {
    ensure_same_shape("subtract", a, b)?;
    Ok(a.with_entries(a.entries().iter().zip(b.entries()).map(|(x, y)| x - y).collect()))
}

/// Elementwise additive inverse.
pub fn negate<T: Elementwise>(a: &T) -> T {
    a.map_entries(|c| -c)
}

/// Multiplies every entry by a complex scalar.
pub fn scale<T: Elementwise>(scalar: Complex<f64>, a: &T) -> T {
    a.map_entries(|c| scalar * c)
}

/// Elementwise complex conjugate.
pub fn conjugate<T: Elementwise>(a: &T) -> T {
    a.map_entries(|c| c.conj())
}

/// Swaps row and column indices. A `1 x N` row becomes `N x 1` and back.
pub fn transpose(m: &ComplexMatrix) -> ComplexMatrix {
    ComplexMatrix::from_fn(m.cols(), m.rows(), |r, c| m.at(c, r))
}

/// Conjugate transpose, `transpose(conjugate(m))`.
pub fn adjoint(m: &ComplexMatrix) -> ComplexMatrix {
    ComplexMatrix::from_fn(m.cols(), m.rows(), |r, c| m.at(c, r).conj())
}

/// Matrix-matrix product. Requires `cols(a) == rows(b)`.
pub fn multiply(a: &ComplexMatrix, b: &ComplexMatrix) -> Result<ComplexMatrix> {
    if a.cols() != b.rows() {
        return Err(QlinearError::dimension_mismatch(
            "multiply",
            format!("left operand is {:?}, right operand is {:?}", a.shape(), b.shape()),
        ));
    }
    Ok(ComplexMatrix::from_fn(a.rows(), b.cols(), |r, c| {
        (0..a.cols()).map(|k| a.at(r, k) * b.at(k, c)).sum()
    }))
}

/// Action of a matrix on a vector, `m · v`. Requires `cols(m) == len(v)`.
pub fn apply(m: &ComplexMatrix, v: &ComplexVector) -> Result<ComplexVector> {
    if m.cols() != v.len() {
        return Err(QlinearError::dimension_mismatch(
            "apply",
            format!("operator is {:?} but state has length {}", m.shape(), v.len()),
        ));
    }
    let x = v.as_slice();
    Ok((0..m.rows())
        .map(|r| (0..m.cols()).map(|c| m.at(r, c) * x[c]).sum::<Complex<f64>>())
        .collect())
}

/// Inner product `Σ u_i · conj(v_i)`.
///
/// Not symmetric: `inner_product(v, u)` is the conjugate of
/// `inner_product(u, v)`.
pub fn inner_product(u: &ComplexVector, v: &ComplexVector) -> Result<Complex<f64>> {
    if u.len() != v.len() {
        return Err(QlinearError::dimension_mismatch(
            "inner product",
            format!("vector lengths {} and {} differ", u.len(), v.len()),
        ));
    }
    Ok(u.iter().zip(v.iter()).map(|(a, b)| a * b.conj()).sum())
}

/// Largest entry modulus, `0.0` for an empty or all-zero vector.
pub(crate) fn largest_modulus(v: &ComplexVector) -> f64 {
    v.iter().map(|c| c.norm()).fold(0.0, f64::max)
}

/// Euclidean norm `sqrt(⟨v, v⟩)`.
///
/// Entries are scaled by the largest modulus before squaring, so the result
/// is zero only for the zero vector and finite for every finite vector.
pub fn norm(v: &ComplexVector) -> f64 {
    let largest = largest_modulus(v);
    if largest == 0.0 {
        return 0.0;
    }
    // ⟨v, v⟩ = Σ|v_i|² has no imaginary part
    largest * v.iter().map(|c| (c / largest).norm_sqr()).sum::<f64>().sqrt()
}

/// `norm(u - v)`.
pub fn distance(u: &ComplexVector, v: &ComplexVector) -> Result<f64> {
    if u.len() != v.len() {
        return Err(QlinearError::dimension_mismatch(
            "distance",
            format!("vector lengths {} and {} differ", u.len(), v.len()),
        ));
    }
    Ok(norm(&subtract(u, v)?))
}

/// Kronecker product. Vectors yield length `len_a · len_b`; matrices yield
/// `rows_a · rows_b x cols_a · cols_b`.
pub fn tensor_product<T: Tensor>(a: &T, b: &T) -> T {
    a.kron(b)
}

/// Elementwise `|a - b| <= ε`. Values of different shape are never equal.
pub fn approx_eq<T: Elementwise>(a: &T, b: &T, tolerance: Option<f64>) -> bool {
    let eps = effective_tolerance(tolerance);
    a.dims() == b.dims()
        && a.entries().iter().zip(b.entries()).all(|(x, y)| (x - y).norm() <= eps)
}

/// `true` iff `m` is square and `m · adjoint(m)` equals the identity within
/// tolerance.
pub fn is_unitary(m: &ComplexMatrix, tolerance: Option<f64>) -> bool {
    if !m.is_square() {
        return false;
    }
    match multiply(m, &adjoint(m)) {
        Ok(product) => approx_eq(&product, &ComplexMatrix::identity(m.rows()), tolerance),
        Err(_) => false,
    }
}

/// `true` iff `m` is square and equals its own adjoint within tolerance.
pub fn is_hermitian(m: &ComplexMatrix, tolerance: Option<f64>) -> bool {
    m.is_square() && approx_eq(m, &adjoint(m), tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FRAC_1_SQRT_2;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    fn sample_x() -> ComplexMatrix {
        ComplexMatrix::new(vec![
            vec![c(1.0, 2.0), c(3.0, 4.0)],
            vec![c(5.0, 6.0), c(7.0, 8.0)],
        ])
        .unwrap()
    }

    fn sample_y() -> ComplexMatrix {
        ComplexMatrix::new(vec![
            vec![c(2.0, -1.0), c(1.0, -3.0)],
            vec![c(4.0, -2.0), c(3.0, -1.0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_add_vectors() -> Result<()> {
        let a = ComplexVector::new(vec![c(1.0, 2.0), c(3.0, 4.0)]);
        let b = ComplexVector::new(vec![c(2.0, -1.0), c(1.0, -3.0)]);
        assert_eq!(add(&a, &b)?, ComplexVector::new(vec![c(3.0, 1.0), c(4.0, 1.0)]));
        Ok(())
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = ComplexVector::from_real(&[1.0, 2.0]);
        let b = ComplexVector::from_real(&[1.0, 2.0, 3.0]);
        assert!(matches!(add(&a, &b), Err(QlinearError::DimensionMismatch { operation: "add", .. })));

        let m = ComplexMatrix::identity(2);
        let n = ComplexMatrix::identity(3);
        assert!(add(&m, &n).is_err());
    }

    #[test]
    fn test_negate_and_scale() {
        let a = ComplexVector::new(vec![c(1.0, 2.0), c(3.0, 4.0)]);
        assert_eq!(negate(&a), ComplexVector::new(vec![c(-1.0, -2.0), c(-3.0, -4.0)]));
        // (2+3i)(1+2i) = -4+7i, (2+3i)(3+4i) = -6+17i
        assert_eq!(scale(c(2.0, 3.0), &a), ComplexVector::new(vec![c(-4.0, 7.0), c(-6.0, 17.0)]));
    }

    #[test]
    fn test_matrix_add_and_negate() -> Result<()> {
        let sum = add(&sample_x(), &sample_y())?;
        assert_eq!(sum.to_rows(), vec![vec![c(3.0, 1.0), c(4.0, 1.0)], vec![c(9.0, 4.0), c(10.0, 7.0)]]);
        assert_eq!(add(&sample_x(), &negate(&sample_x()))?, ComplexMatrix::zeros(2, 2));
        Ok(())
    }

    #[test]
    fn test_transpose_conjugate_adjoint() {
        let x = sample_x();
        assert_eq!(transpose(&x).to_rows(), vec![vec![c(1.0, 2.0), c(5.0, 6.0)], vec![c(3.0, 4.0), c(7.0, 8.0)]]);
        assert_eq!(conjugate(&x).to_rows(), vec![vec![c(1.0, -2.0), c(3.0, -4.0)], vec![c(5.0, -6.0), c(7.0, -8.0)]]);
        assert_eq!(adjoint(&x), transpose(&conjugate(&x)));
    }

    #[test]
    fn test_transpose_flips_vector_orientation() {
        let v = ComplexVector::from_real(&[1.0, 2.0, 3.0]);
        assert_eq!(transpose(&v.to_row_matrix()), v.to_column_matrix());
    }

    #[test]
    fn test_multiply() -> Result<()> {
        let product = multiply(&sample_x(), &sample_y())?;
        // Row 0: (1+2i)(2-i) + (3+4i)(4-2i) = (4+3i) + (20+10i)
        assert_eq!(product.get(0, 0)?, c(24.0, 13.0));
        let rect = ComplexMatrix::zeros(2, 3);
        assert!(multiply(&rect, &sample_x()).is_err());
        assert_eq!(multiply(&sample_x(), &rect)?.shape(), (2, 3));
        Ok(())
    }

    #[test]
    fn test_apply_dimension_check() {
        let v = ComplexVector::from_real(&[1.0, 0.0, 0.0]);
        assert!(matches!(apply(&sample_x(), &v), Err(QlinearError::DimensionMismatch { operation: "apply", .. })));
    }

    #[test]
    fn test_inner_product_is_conjugate_symmetric() -> Result<()> {
        let u = ComplexVector::new(vec![c(1.0, 2.0), c(3.0, 4.0)]);
        let v = ComplexVector::new(vec![c(2.0, -1.0), c(1.0, -3.0)]);
        let uv = inner_product(&u, &v)?;
        // (1+2i)(2+i) + (3+4i)(1+3i) = (0+5i) + (-9+13i)
        assert_eq!(uv, c(-9.0, 18.0));
        assert_eq!(inner_product(&v, &u)?, uv.conj());
        Ok(())
    }

    #[test]
    fn test_norm_and_distance() -> Result<()> {
        let v = ComplexVector::new(vec![c(3.0, 4.0), c(0.0, 0.0)]);
        assert!((norm(&v) - 5.0).abs() < 1e-12);
        assert_eq!(norm(&ComplexVector::zeros(4)), 0.0);
        let u = ComplexVector::new(vec![c(0.0, 4.0), c(0.0, 0.0)]);
        assert!((distance(&v, &u)? - 3.0).abs() < 1e-12);
        assert!(distance(&v, &ComplexVector::zeros(3)).is_err());
        Ok(())
    }

    #[test]
    fn test_norm_survives_extreme_magnitudes() {
        let tiny = ComplexVector::from_real(&[1e-170, 0.0]);
        let huge = ComplexVector::from_real(&[1e200, 0.0]);
        assert_eq!(norm(&tiny), 1e-170);
        assert_eq!(norm(&huge), 1e200);

        // (3e-200)² underflows to zero without scaling
        let small_pair = ComplexVector::new(vec![c(3e-200, 0.0), c(4e-200, 0.0)]);
        assert!((norm(&small_pair) / 5e-200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tensor_product_shapes() -> Result<()> {
        let kx = tensor_product(&sample_x(), &sample_y());
        assert_eq!(kx.shape(), (4, 4));
        // Block (0, 1) is x[0][1] * y
        assert_eq!(kx.get(1, 3)?, c(3.0, 4.0) * c(3.0, -1.0));

        let a = ComplexVector::from_real(&[1.0, 2.0]);
        let b = ComplexVector::from_real(&[3.0, 4.0, 5.0]);
        assert_eq!(tensor_product(&a, &b), ComplexVector::from_real(&[3.0, 4.0, 5.0, 6.0, 8.0, 10.0]));

        let rect = ComplexMatrix::zeros(2, 3);
        assert_eq!(tensor_product(&rect, &ComplexMatrix::identity(2)).shape(), (4, 6));
        Ok(())
    }

    #[test]
    fn test_unitary_checks() -> Result<()> {
        let s = FRAC_1_SQRT_2;
        let hadamard = ComplexMatrix::from_real(&[&[s, s], &[s, -s]])?;
        assert!(is_unitary(&hadamard, None));
        assert!(!is_unitary(&sample_x(), None));
        assert!(!is_unitary(&ComplexMatrix::zeros(2, 3), None));
        Ok(())
    }

    #[test]
    fn test_hermitian_checks() -> Result<()> {
        let pauli_y = ComplexMatrix::new(vec![vec![c(0.0, 0.0), c(0.0, -1.0)], vec![c(0.0, 1.0), c(0.0, 0.0)]])?;
        assert!(is_hermitian(&pauli_y, None));
        assert!(!is_hermitian(&sample_x(), None));
        assert!(!is_hermitian(&ComplexMatrix::zeros(1, 2), None));
        Ok(())
    }

    #[test]
    fn test_tolerance_is_absolute_and_configurable() -> Result<()> {
        let nearly = ComplexMatrix::from_real(&[&[1.0, 1e-5], &[0.0, 1.0]])?;
        assert!(!is_hermitian(&nearly, None));
        assert!(is_hermitian(&nearly, Some(1e-4)));
        Ok(())
    }
}
