// src/simulation/engine.rs

use log::{debug, trace};

use crate::core::StateVector;
use crate::operations::Gate;

/// Replays gates onto a single-qubit state, renormalizing on a fixed cadence.
/// (Internal visibility)
#[derive(Debug)]
pub(crate) struct SimulationEngine {
    state: StateVector,
    /// Renormalize after this many gates. Always at least 1.
    renormalize_every: usize,
    since_renormalize: usize,
    tolerance: f64,
}

impl SimulationEngine {
    /// Starts from |0⟩.
    pub(crate) fn init(renormalize_every: usize, tolerance: f64) -> Self {
        Self {
            state: StateVector::ground(),
            renormalize_every: renormalize_every.max(1),
            since_renormalize: 0,
            tolerance,
        }
    }

    /// Applies one gate: `|ψ⟩ ← U|ψ⟩`.
    pub(crate) fn apply_gate(&mut self, gate: &Gate) {
        self.state = self.state.apply(&gate.matrix());
        trace!("applied {} -> {}", gate, self.state);
        self.since_renormalize += 1;
        if self.since_renormalize >= self.renormalize_every {
            self.renormalize();
        }
    }

    /// Rescales the state to unit norm. Drift is corrected silently; it is
    /// only logged when it exceeds the tolerance.
    pub(crate) fn renormalize(&mut self) {
        let drift = (self.state.norm_sqr() - 1.0).abs();
        if drift > self.tolerance {
            debug!("renormalizing state, |α|² + |β|² drifted by {:e}", drift);
        }
        self.state = self.state.normalized();
        self.since_renormalize = 0;
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) {
        self.state = state;
    }

    /// Finishes the replay with a final renormalization.
    pub(crate) fn finish(mut self) -> StateVector {
        self.renormalize();
        self.state
    }
}
