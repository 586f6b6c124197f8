// src/evolution/results.rs
use crate::core::ComplexVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the states visited by an `Evolver` run.
/// The initial state comes first and the final state last, so a run of `k`
/// operators records `k + 1` states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionTrace {
    states: Vec<ComplexVector>,
}

impl EvolutionTrace {
    /// Starts a trace at `initial`. (Internal visibility)
    pub(crate) fn new(initial: ComplexVector) -> Self {
        Self { states: vec![initial] }
    }

    /// Records the state produced by the next step. (Internal visibility)
    pub(crate) fn record(&mut self, state: ComplexVector) {
        self.states.push(state);
    }

    /// The state before any operator was applied.
    pub fn initial(&self) -> &ComplexVector {
        &self.states[0]
    }

    /// The state after the last operator.
    pub fn final_state(&self) -> &ComplexVector {
        &self.states[self.states.len() - 1]
    }

    /// Consumes the trace, returning the final state.
    pub fn into_final_state(mut self) -> ComplexVector {
        self.states.swap_remove(self.states.len() - 1)
    }

    /// All recorded states in order.
    pub fn states(&self) -> &[ComplexVector] {
        &self.states
    }

    /// Number of operators applied.
    pub fn steps(&self) -> usize {
        self.states.len() - 1
    }

    /// `|v_i|²` for every position of the final state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.final_state().probabilities()
    }
}

impl fmt::Display for EvolutionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evolution Trace ({} steps):", self.steps())?;
        for (step, state) in self.states.iter().enumerate() {
            writeln!(f, "  t={}: {}", step, state)?;
        }
        Ok(())
    }
}
