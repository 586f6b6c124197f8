// src/core/vector.rs

use super::error::{QlinearError, Result};
use super::matrix::ComplexMatrix;
use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of complex numbers of fixed length.
///
/// Index `i` is a "position" or basis state. Depending on the experiment the
/// entries are a population count, a probability mass or a probability
/// amplitude; the vector itself carries no normalization requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)] // Avoid Eq for floating-point complex numbers
#[serde(transparent)]
pub struct ComplexVector {
    entries: Vec<Complex<f64>>,
}

impl ComplexVector {
    /// Creates a vector from complex entries. The length is fixed from here on.
    pub fn new(entries: Vec<Complex<f64>>) -> Self {
        Self { entries }
    }

    /// Creates a vector whose entries have zero imaginary part.
    pub fn from_real(values: &[f64]) -> Self {
        values.iter().map(|&re| Complex::new(re, 0.0)).collect()
    }

    /// The zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self { entries: vec![Complex::zero(); len] }
    }

    /// The basis vector `e_index`: 1 at `index`, 0 elsewhere.
    pub fn basis(len: usize, index: usize) -> Result<Self> {
        if index >= len {
            return Err(QlinearError::IndexOutOfRange { index, len });
        }
        let mut entries = vec![Complex::zero(); len];
        entries[index] = Complex::one();
        Ok(Self { entries })
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, or `IndexOutOfRange`.
    pub fn get(&self, index: usize) -> Result<Complex<f64>> {
        self.entries
            .get(index)
            .copied()
            .ok_or(QlinearError::IndexOutOfRange { index, len: self.len() })
    }

    /// Provides read-only access to the entries.
    pub fn as_slice(&self) -> &[Complex<f64>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex<f64>> {
        self.entries.iter()
    }

    /// Consumes the vector, returning its entries.
    pub fn into_inner(self) -> Vec<Complex<f64>> {
        self.entries
    }

    /// Squared modulus `|v_i|²` of every entry, in order.
    ///
    /// For an amplitude vector this is the (unnormalized) probability of
    /// finding the system at each position.
    pub fn probabilities(&self) -> Vec<f64> {
        self.entries.iter().map(|c| c.norm_sqr()).collect()
    }

    /// The vector as a `1 x N` row matrix.
    pub fn to_row_matrix(&self) -> ComplexMatrix {
        ComplexMatrix::from_parts(1, self.len(), self.entries.clone())
    }

    /// The vector as an `N x 1` column matrix.
    pub fn to_column_matrix(&self) -> ComplexMatrix {
        ComplexMatrix::from_parts(self.len(), 1, self.entries.clone())
    }
}

impl From<Vec<Complex<f64>>> for ComplexVector {
    fn from(entries: Vec<Complex<f64>>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<Complex<f64>> for ComplexVector {
    fn from_iter<I: IntoIterator<Item = Complex<f64>>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a ComplexVector {
    type Item = &'a Complex<f64>;
    type IntoIter = std::slice::Iter<'a, Complex<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ComplexVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.entries.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_vector() -> Result<()> {
        let e2 = ComplexVector::basis(4, 2)?;
        assert_eq!(e2, ComplexVector::from_real(&[0.0, 0.0, 1.0, 0.0]));
        assert_eq!(
            ComplexVector::basis(3, 3),
            Err(QlinearError::IndexOutOfRange { index: 3, len: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_get_out_of_range() {
        let v = ComplexVector::from_real(&[1.0, 2.0]);
        assert_eq!(v.get(1), Ok(Complex::new(2.0, 0.0)));
        assert_eq!(v.get(2), Err(QlinearError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_probabilities_are_squared_moduli() {
        let v = ComplexVector::new(vec![Complex::new(3.0, 4.0), Complex::new(0.0, -1.0)]);
        assert_eq!(v.probabilities(), vec![25.0, 1.0]);
    }

    #[test]
    fn test_row_and_column_orientation() {
        let v = ComplexVector::from_real(&[1.0, 2.0, 3.0]);
        assert_eq!(v.to_row_matrix().shape(), (1, 3));
        assert_eq!(v.to_column_matrix().shape(), (3, 1));
    }

    #[test]
    fn test_display() {
        let v = ComplexVector::from_real(&[0.5, 1.0]);
        assert_eq!(v.to_string(), "[0.5000+0.0000i, 1.0000+0.0000i]");
    }
}
