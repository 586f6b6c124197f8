// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod matrix;
pub mod vector;

// Re-export public types for convenient access via `qlinear::core::TypeName`
pub use error::{QlinearError, Result};
pub use matrix::ComplexMatrix;
pub use vector::ComplexVector;

pub mod constants;
pub use constants::{DEFAULT_TOLERANCE, FRAC_1_SQRT_2}; // Re-export
