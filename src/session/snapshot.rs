// src/session/snapshot.rs

use num_complex::Complex64;
use serde::Serialize;
use std::fmt;

use super::SessionPhase;
use crate::circuits::CircuitLog;
use crate::core::state::round_to;
use crate::core::StateVector;
use crate::operations::Gate;
use crate::projection::BlochVector;

/// Everything a renderer needs after one command: the point on the sphere,
/// amplitudes and probabilities rounded for display, the distance travelled,
/// the gate history and the trail of past points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Where the session is in its lifecycle.
    pub phase: SessionPhase,
    /// Current Bloch coordinates (unrounded).
    pub bloch: BlochVector,
    /// α, rounded to the configured display precision.
    pub alpha: Complex64,
    /// β, rounded to the configured display precision.
    pub beta: Complex64,
    /// `P(0)`, rounded.
    pub p0: f64,
    /// `P(1)`, rounded.
    pub p1: f64,
    /// Total great-circle distance travelled, in radians (unrounded).
    pub cumulative_distance: f64,
    /// Gates applied since the last reset, oldest first.
    pub gate_history: Vec<Gate>,
    /// Every trajectory point, seed included.
    pub trajectory: Vec<BlochVector>,
    /// The exact state behind the rounded readouts.
    #[serde(skip)]
    pub state: StateVector,
    #[serde(skip)]
    pub(crate) precision: usize,
}

impl Snapshot {
    pub(crate) fn new(
        phase: SessionPhase,
        state: StateVector,
        bloch: BlochVector,
        log: &CircuitLog,
        trajectory: &[BlochVector],
        cumulative_distance: f64,
        precision: usize,
    ) -> Self {
        let [alpha, beta] = state.rounded(precision);
        let (p0, p1) = state.probabilities();
        Self {
            phase,
            bloch,
            alpha,
            beta,
            p0: round_to(p0, precision),
            p1: round_to(p1, precision),
            cumulative_distance,
            gate_history: log.gates().to_vec(),
            trajectory: trajectory.to_vec(),
            state,
            precision,
        }
    }

    /// Labels of the gate history, e.g. `["H", "P(90°)"]`.
    pub fn gate_labels(&self) -> Vec<String> {
        self.gate_history.iter().map(Gate::label).collect()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        writeln!(f, "Bloch Vector: {:.p$}", self.bloch, p = p)?;
        writeln!(f, "Final State Vector: ({})|0⟩ + ({})|1⟩", self.alpha, self.beta)?;
        writeln!(f, "Probability of measuring |0⟩ = {}", self.p0)?;
        writeln!(f, "Probability of measuring |1⟩ = {}", self.p1)?;
        writeln!(
            f,
            "Distance Travelled: {} radians",
            round_to(self.cumulative_distance, p)
        )?;
        let log: CircuitLog = self.gate_history.iter().copied().collect();
        write!(f, "{}", log)
    }
}
