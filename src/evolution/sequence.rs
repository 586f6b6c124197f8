// src/evolution/sequence.rs

//! Ordered sequences of transition operators.
//!
//! An `EvolutionSequence` is applied first to last: the operator at position
//! `k` premultiplies the state produced by positions `0..k`. Matrix products
//! do not commute, so the order is never changed.

use crate::core::{ComplexMatrix, QlinearError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents an ordered sequence of transition operators.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvolutionSequence {
    /// The order is the order of application.
    operators: Vec<ComplexMatrix>,
}

impl EvolutionSequence {
    /// Creates a new, empty sequence.
    pub fn new() -> Self {
        Self { operators: Vec::new() }
    }

    /// The fixed-operator sequence: `operator` applied `steps` times.
    pub fn repeat(operator: ComplexMatrix, steps: usize) -> Self {
        Self { operators: vec![operator; steps] }
    }

    /// Adds a single operator to the end of the sequence.
    pub fn push(&mut self, operator: ComplexMatrix) {
        self.operators.push(operator);
    }

    /// Adds multiple operators from an iterator to the end of the sequence.
    pub fn extend<I>(&mut self, operators: I)
    where
        I: IntoIterator<Item = ComplexMatrix>,
    {
        self.operators.extend(operators);
    }

    /// Returns a slice containing the operators in application order.
    pub fn operators(&self) -> &[ComplexMatrix] {
        &self.operators
    }

    /// Returns the number of steps in the sequence.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns `true` if the sequence contains no operators.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Checks, without computing anything, that every operator can act on
    /// the state produced by the previous one, starting from a state of
    /// length `state_len`.
    pub fn check_conformance(&self, state_len: usize) -> Result<()> {
        let mut len = state_len;
        for (step, op) in self.operators.iter().enumerate() {
            if op.cols() != len {
                return Err(QlinearError::dimension_mismatch(
                    "evolve",
                    format!("operator {} is {}x{} but the state at that step has length {}", step, op.rows(), op.cols(), len),
                ));
            }
            len = op.rows();
        }
        Ok(())
    }
}

impl FromIterator<ComplexMatrix> for EvolutionSequence {
    fn from_iter<I: IntoIterator<Item = ComplexMatrix>>(iter: I) -> Self {
        Self { operators: iter.into_iter().collect() }
    }
}

//-------------------------------------------------------------------------
// Sequence Builder
//-------------------------------------------------------------------------

/// A helper struct for constructing `EvolutionSequence` instances using method chaining.
#[derive(Default)]
pub struct EvolutionSequenceBuilder {
    sequence: EvolutionSequence,
}

impl EvolutionSequenceBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self { sequence: EvolutionSequence::new() }
    }

    /// Appends one operator. Returns `self` to allow for continued method chaining.
    pub fn add_op(mut self, operator: ComplexMatrix) -> Self {
        self.sequence.push(operator);
        self
    }

    /// Appends `operator` `steps` times.
    pub fn add_repeated(mut self, operator: ComplexMatrix, steps: usize) -> Self {
        self.sequence.extend(std::iter::repeat_n(operator, steps));
        self
    }

    /// Appends multiple operators from an iterator.
    pub fn add_ops<I>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = ComplexMatrix>,
    {
        self.sequence.extend(operators);
        self
    }

    /// Finalizes the construction process and returns the built sequence.
    pub fn build(self) -> EvolutionSequence {
        self.sequence
    }
}

impl fmt::Display for EvolutionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "qlinear::EvolutionSequence[{} operators]", self.operators.len())?;
        for (step, op) in self.operators.iter().enumerate() {
            writeln!(f, "  step {} ({}x{}):", step, op.rows(), op.cols())?;
            for line in op.to_string().lines() {
                writeln!(f, "    {}", line)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for EvolutionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
