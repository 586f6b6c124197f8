// src/core/matrix.rs

use super::error::{QlinearError, Result};
use super::vector::ComplexVector;
use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A rectangular `rows x cols` array of complex numbers, stored row-major.
///
/// Used either as a linear operator acting on a `ComplexVector` of matching
/// dimension, or (when square and Hermitian) as an observable.
/// Serialized as a list of rows; deserialization rejects ragged rows.
/// A `0 x N` matrix with `N > 0` has no row to carry its width and cannot
/// be serialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Vec<Complex<f64>>>")]
pub struct ComplexMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex<f64>>,
}

impl ComplexMatrix {
    /// Builds a matrix from its rows. Fails with `DimensionMismatch` if the
    /// rows do not all have the same length.
    pub fn new(rows: Vec<Vec<Complex<f64>>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(QlinearError::dimension_mismatch(
                    "matrix construction",
                    format!("row {} has {} entries, expected {}", r, row.len(), n_cols),
                ));
            }
            data.extend(row);
        }
        Ok(Self { rows: n_rows, cols: n_cols, data })
    }

    /// Builds a matrix from real-valued rows.
    pub fn from_real(rows: &[&[f64]]) -> Result<Self> {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|&re| Complex::new(re, 0.0)).collect())
                .collect(),
        )
    }

    /// The `rows x cols` zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![Complex::zero(); rows * cols] }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = Complex::one();
        }
        m
    }

    /// Creates a matrix from a row-major buffer whose length is already known
    /// to be `rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<Complex<f64>>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Builds a matrix by evaluating `f(r, c)` for every entry.
    pub(crate) fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Complex<f64>) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`, or `IndexOutOfRange` naming the offending index.
    pub fn get(&self, row: usize, col: usize) -> Result<Complex<f64>> {
        if row >= self.rows {
            return Err(QlinearError::IndexOutOfRange { index: row, len: self.rows });
        }
        if col >= self.cols {
            return Err(QlinearError::IndexOutOfRange { index: col, len: self.cols });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Row `row` as a vector.
    pub fn row(&self, row: usize) -> Result<ComplexVector> {
        if row >= self.rows {
            return Err(QlinearError::IndexOutOfRange { index: row, len: self.rows });
        }
        Ok(ComplexVector::new(self.data[row * self.cols..(row + 1) * self.cols].to_vec()))
    }

    /// Column `col` as a vector.
    pub fn column(&self, col: usize) -> Result<ComplexVector> {
        if col >= self.cols {
            return Err(QlinearError::IndexOutOfRange { index: col, len: self.cols });
        }
        Ok((0..self.rows).map(|r| self.data[r * self.cols + col]).collect())
    }

    /// Row-major view of all entries.
    pub fn as_slice(&self) -> &[Complex<f64>] {
        &self.data
    }

    /// Unchecked entry access for the crate's inner loops.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Complex<f64> {
        self.data[row * self.cols + col]
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Complex<f64>>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[_]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Complex<f64>>>> for ComplexMatrix {
    type Error = QlinearError;

    fn try_from(rows: Vec<Vec<Complex<f64>>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<ComplexMatrix> for Vec<Vec<Complex<f64>>> {
    fn from(m: ComplexMatrix) -> Self {
        m.to_rows()
    }
}

impl Serialize for ComplexMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.rows == 0 && self.cols > 0 {
            return Err(serde::ser::Error::custom(format!(
                "a 0x{} matrix cannot be written as a list of rows",
                self.cols
            )));
        }
        self.to_rows().serialize(serializer)
    }
}

impl fmt::Display for ComplexMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            write!(f, "[")?;
            for c in 0..self.cols {
                write!(f, "{}{:.4}", if c > 0 { ", " } else { "" }, self.at(r, c))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
