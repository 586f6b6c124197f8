// src/evolution/mod.rs

//! Discrete-time evolution of a state vector under transition operators.
//! This module contains the pure `evolve`/`evolve_fixed` functions and the
//! `Evolver` entry point, which adds boundary validation and records every
//! intermediate state.
//!
//! The engine never normalizes. A marble population, a probability
//! distribution and a probability amplitude all evolve by the same rule
//! `state_{k+1} = operator_k · state_k`; only their interpretation differs.

mod results;
mod sequence;

pub use results::EvolutionTrace;
pub use sequence::{EvolutionSequence, EvolutionSequenceBuilder};

use crate::core::{ComplexMatrix, ComplexVector, QlinearError, Result};
use crate::linalg::apply;
use crate::validation::{
    check_boolean_operator, check_nonnegative_operator, check_normalization, check_population,
    check_probability_distribution,
};
use tracing::{debug, trace};

/// Applies every operator of `operators` in order, starting from `initial`.
///
/// # Errors
/// `DimensionMismatch` if some operator's column count differs from the
/// length of the state it would act on. Conformance is checked for the whole
/// sequence before any product is computed.
pub fn evolve(initial: &ComplexVector, operators: &EvolutionSequence) -> Result<ComplexVector> {
    operators.check_conformance(initial.len())?;
    operators
        .operators()
        .iter()
        .try_fold(initial.clone(), |state, op| apply(op, &state))
}

/// Applies the same `operator` `steps` times. Zero steps returns `initial`.
pub fn evolve_fixed(initial: &ComplexVector, operator: &ComplexMatrix, steps: usize) -> Result<ComplexVector> {
    if steps > 0 && operator.cols() != initial.len() {
        return Err(QlinearError::dimension_mismatch(
            "evolve",
            format!("operator is {}x{} but the state has length {}", operator.rows(), operator.cols(), initial.len()),
        ));
    }
    if steps > 1 && !operator.is_square() {
        return Err(QlinearError::dimension_mismatch(
            "evolve",
            format!("a {}x{} operator cannot be applied repeatedly", operator.rows(), operator.cols()),
        ));
    }
    (0..steps).try_fold(initial.clone(), |state, _| apply(operator, &state))
}

/// How the state vector of a run is interpreted, which selects the boundary
/// checks `Evolver` performs before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateKind {
    /// No validation.
    #[default]
    Unchecked,
    /// Non-negative real counts moved by boolean operators (marbles).
    Population,
    /// A probability distribution moved by non-negative real operators.
    Probability,
    /// A unit-norm vector of probability amplitudes.
    Amplitude,
}

/// The evolution engine.
///
/// Validation happens once, at the boundary, and never corrects its input.
#[derive(Debug, Clone, Default)]
pub struct Evolver {
    kind: StateKind,
    tolerance: Option<f64>,
}

impl Evolver {
    /// Creates an evolver that performs no validation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evolver that validates inputs as `kind` before running.
    pub fn with_validation(kind: StateKind) -> Self {
        Self { kind, tolerance: None }
    }

    /// Overrides the validation tolerance (defaults to `DEFAULT_TOLERANCE`).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// Runs the boundary checks for this evolver's `StateKind`.
    pub fn validate(&self, sequence: &EvolutionSequence, initial: &ComplexVector) -> Result<()> {
        sequence.check_conformance(initial.len())?;
        match self.kind {
            StateKind::Unchecked => {}
            StateKind::Population => {
                check_population(initial, self.tolerance)?;
                for op in sequence.operators() {
                    check_boolean_operator(op)?;
                }
            }
            StateKind::Probability => {
                check_probability_distribution(initial, self.tolerance)?;
                for op in sequence.operators() {
                    check_nonnegative_operator(op, self.tolerance)?;
                }
            }
            StateKind::Amplitude => check_normalization(initial, self.tolerance)?,
        }
        Ok(())
    }

    /// Runs `sequence` from `initial`, recording every intermediate state.
    ///
    /// # Returns
    /// * `Ok(EvolutionTrace)` with `sequence.len() + 1` states.
    /// * `Err(QlinearError)` if validation fails or the shapes do not conform.
    pub fn run(&self, sequence: &EvolutionSequence, initial: &ComplexVector) -> Result<EvolutionTrace> {
        debug!(steps = sequence.len(), dim = initial.len(), kind = ?self.kind, "starting evolution");
        self.validate(sequence, initial)?;

        let mut history = EvolutionTrace::new(initial.clone());
        for (step, op) in sequence.operators().iter().enumerate() {
            let next = apply(op, history.final_state())?;
            trace!(step, state = %next, "applied operator");
            history.record(next);
        }

        debug!(final_state = %history.final_state(), "evolution finished");
        Ok(history)
    }
}
