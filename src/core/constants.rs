//! Numerical constants shared by the tolerance-based predicates.

/// Default absolute tolerance `ε` for every `|a - b| <= ε` comparison.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// `1/√2`, the amplitude of an even two-way split.
pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Resolves an optional caller tolerance against the default.
pub(crate) fn effective_tolerance(tolerance: Option<f64>) -> f64 {
    tolerance.unwrap_or(DEFAULT_TOLERANCE)
}
