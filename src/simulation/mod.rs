// src/simulation/mod.rs

//! Recomputes the qubit state from a [`CircuitLog`].
//!
//! The state is never carried forward between interactions. Every call to
//! [`Simulator::run`] starts from |0⟩ and replays the whole log, so the
//! result is always exactly consistent with the gate history. The internal
//! `SimulationEngine` renormalizes on a configurable cadence to keep
//! floating-point drift out of long logs.

mod results;
pub(crate) mod engine;

pub use results::MeasurementCounts;

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::circuits::CircuitLog;
use crate::core::{SessionConfig, StateVector};
use engine::SimulationEngine;

/// Replays circuit logs and samples measurement outcomes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    renormalize_every: usize,
    tolerance: f64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl Simulator {
    /// Creates a simulator with default settings (renormalize after every gate).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator using the replay settings of `config`.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            renormalize_every: config.renormalize_every.max(1),
            tolerance: config.tolerance,
        }
    }

    /// Sets how many gates are applied between renormalizations.
    /// Values below 1 are treated as 1.
    pub fn with_renormalize_every(mut self, gates: usize) -> Self {
        self.renormalize_every = gates.max(1);
        self
    }

    /// Replays `log` from |0⟩ and returns the resulting state.
    ///
    /// An empty log yields |0⟩. The returned state is always renormalized.
    pub fn run(&self, log: &CircuitLog) -> StateVector {
        let mut engine = SimulationEngine::init(self.renormalize_every, self.tolerance);
        for gate in log {
            engine.apply_gate(gate);
        }
        let state = engine.finish();
        trace!("replayed {} gates -> {}", log.len(), state);
        state
    }

    /// Samples `shots` computational-basis measurements of `state` without
    /// collapsing it. Deterministic for a given `seed`.
    pub fn sample(&self, state: &StateVector, shots: u64, seed: u64) -> MeasurementCounts {
        let (p0, _) = state.probabilities();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut zeros = 0;
        for _ in 0..shots {
            let p_sample: f64 = rng.random::<f64>(); // Sample in [0, 1)
            if p_sample < p0 {
                zeros += 1;
            }
        }
        MeasurementCounts { zeros, ones: shots - zeros }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::operations::{Gate, GateKind};
    use crate::projection::BlochVector;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn assert_state_approx_equal(actual: &StateVector, expected: &StateVector, context: &str) {
        for (a, e) in actual.amplitudes().iter().zip(expected.amplitudes()) {
            let dist_sq = (*a - e).norm_sqr();
            assert!(
                dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
                "state mismatch - actual: {}, expected: {}, context: {}",
                actual, expected, context
            );
        }
    }

    #[test]
    fn empty_log_yields_ground_state() {
        let state = Simulator::new().run(&CircuitLog::new());
        assert_eq!(state, StateVector::ground());
    }

    #[test]
    fn x_flips_to_excited() {
        let log = CircuitBuilder::new().add_gate(Gate::PauliX).build();
        assert_state_approx_equal(&Simulator::new().run(&log), &StateVector::excited(), "X|0>");
    }

    #[test]
    fn gates_apply_left_to_right() {
        // H then Z gives |->; Z then H gives |+>.
        let hz = CircuitBuilder::new().add_gates([Gate::Hadamard, Gate::PauliZ]).build();
        let zh = CircuitBuilder::new().add_gates([Gate::PauliZ, Gate::Hadamard]).build();
        let sim = Simulator::new();
        assert_abs_diff_eq!(BlochVector::from_state(&sim.run(&hz)).x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(BlochVector::from_state(&sim.run(&zh)).x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn long_logs_stay_normalized_at_any_cadence() -> Result<(), crate::core::BlochError> {
        let gates = [
            Gate::from_degrees(GateKind::Rotation, &[37.0, 11.0])?,
            Gate::Hadamard,
            Gate::from_degrees(GateKind::Phase, &[-71.0])?,
            Gate::PauliY,
        ];
        let log: CircuitLog = gates.iter().copied().cycle().take(20_000).collect();
        for cadence in [1, 7, 1_000, usize::MAX] {
            let state = Simulator::new().with_renormalize_every(cadence).run(&log);
            assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn engine_finish_corrects_drift() {
        let mut engine = SimulationEngine::init(1, TEST_TOLERANCE);
        engine.set_state(StateVector::new(Complex64::new(1.5, 0.0), Complex64::new(0.0, 2.0)));
        let state = engine.finish();
        assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(state.alpha().re, 0.6, epsilon = 1e-15);
    }

    #[test]
    fn sampling_follows_probabilities() {
        let sim = Simulator::new();
        let ground = sim.sample(&StateVector::ground(), 500, 1);
        assert_eq!(ground, MeasurementCounts { zeros: 500, ones: 0 });
        let excited = sim.sample(&StateVector::excited(), 500, 1);
        assert_eq!(excited, MeasurementCounts { zeros: 0, ones: 500 });

        let plus = sim.run(&CircuitBuilder::new().add_gate(Gate::Hadamard).build());
        let counts = sim.sample(&plus, 10_000, 42);
        assert_eq!(counts.shots(), 10_000);
        assert!((counts.frequency_zero() - 0.5).abs() < 0.05, "{}", counts);
    }

    #[test]
    fn sampling_is_deterministic_per_seed() {
        let sim = Simulator::new();
        let plus = sim.run(&CircuitBuilder::new().add_gate(Gate::Hadamard).build());
        assert_eq!(sim.sample(&plus, 256, 9), sim.sample(&plus, 256, 9));
    }
}
