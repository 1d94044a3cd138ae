// src/session/controller.rs

//! The session controller: owns the circuit log and trajectory for one
//! interactive user and runs the full pipeline on every command.

use log::debug;

use super::command::{Command, CommandScript};
use super::snapshot::Snapshot;
use super::SessionPhase;
use crate::circuits::CircuitLog;
use crate::core::{BlochError, SessionConfig, StateVector};
use crate::operations::{Gate, GateKind};
use crate::projection::project;
use crate::simulation::{MeasurementCounts, Simulator};
use crate::trajectory::Trajectory;
use crate::validation::validate_state;

/// One user's walk around the Bloch sphere.
///
/// A `Session` is an owned value. The host keeps one alive per user and
/// calls its methods on every interaction; nothing is shared between
/// sessions and no locking is involved.
///
/// Each [`Session::apply_gate`] appends to the circuit log, replays the log
/// from |0⟩, projects the result and records it on the trajectory, in that
/// order. [`Session::reset`] returns to the initial state from any state.
///
/// # Examples
///
/// ```
/// # use blochwalk::{Session, Gate, SessionPhase};
/// let mut session = Session::new();
/// let snapshot = session.apply_gate(Gate::Hadamard);
/// assert!((snapshot.bloch.x - 1.0).abs() < 1e-9);
/// assert_eq!(snapshot.phase, SessionPhase::Active);
///
/// let snapshot = session.reset();
/// assert_eq!(snapshot.cumulative_distance, 0.0);
/// assert_eq!(snapshot.phase, SessionPhase::Initialized);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    simulator: Simulator,
    log: CircuitLog,
    trajectory: Trajectory,
    /// Result of the latest replay; always `simulator.run(&log)`.
    state: StateVector,
}

impl Session {
    /// Creates a session with default configuration.
    pub fn new() -> Self {
        Self::build(SessionConfig::default())
    }

    /// Creates a session after validating `config`.
    pub fn with_config(config: SessionConfig) -> Result<Self, BlochError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SessionConfig) -> Self {
        Self {
            simulator: Simulator::from_config(&config),
            config,
            log: CircuitLog::new(),
            trajectory: Trajectory::new(),
            state: StateVector::ground(),
        }
    }

    /// `Initialized` while the log is empty, `Active` once a gate is applied.
    pub fn phase(&self) -> SessionPhase {
        if self.log.is_empty() {
            SessionPhase::Initialized
        } else {
            SessionPhase::Active
        }
    }

    /// Appends `gate`, recomputes the state from the full log, projects it
    /// and records the new point on the trajectory.
    pub fn apply_gate(&mut self, gate: Gate) -> Snapshot {
        self.log.append(gate);
        self.state = self.simulator.run(&self.log);
        let projection = project(&self.state);
        let step = self.trajectory.record(projection.bloch);
        debug!(
            "applied {} (#{}): bloch {} moved {:.6} rad, total {:.6} rad",
            gate,
            self.log.len(),
            projection.bloch,
            step,
            self.trajectory.cumulative_distance()
        );
        self.snapshot()
    }

    /// Builds a gate from degree parameters and applies it.
    ///
    /// # Errors
    /// Propagates [`Gate::from_degrees`] errors; the session is unchanged
    /// when one is returned.
    pub fn apply(&mut self, kind: GateKind, params: &[f64]) -> Result<Snapshot, BlochError> {
        let gate = Gate::from_degrees(kind, params)?;
        Ok(self.apply_gate(gate))
    }

    /// Clears the log and trajectory and returns the state to |0⟩.
    ///
    /// Idempotent, and atomic: the replacement is built before any field of
    /// the session is touched.
    pub fn reset(&mut self) -> Snapshot {
        let gates = self.log.len();
        let fresh = Self::build(self.config.clone());
        *self = fresh;
        debug!("session reset, discarded {} gates", gates);
        self.snapshot()
    }

    /// Runs a single command.
    pub fn execute(&mut self, command: &Command) -> Snapshot {
        match command {
            Command::Apply(gate) => self.apply_gate(*gate),
            Command::Reset => self.reset(),
        }
    }

    /// Runs every command in order, returning one snapshot per command.
    pub fn run_script(&mut self, script: &CommandScript) -> Vec<Snapshot> {
        script.commands().iter().map(|command| self.execute(command)).collect()
    }

    /// The current readout, without changing anything.
    pub fn snapshot(&self) -> Snapshot {
        let projection = project(&self.state);
        Snapshot::new(
            self.phase(),
            self.state,
            projection.bloch,
            &self.log,
            self.trajectory.points(),
            self.trajectory.cumulative_distance(),
            self.config.display_precision,
        )
    }

    /// Samples `shots` measurements of the current state with the configured
    /// seed. The state is not collapsed.
    pub fn measure(&self, shots: u64) -> MeasurementCounts {
        self.simulator.sample(&self.state, shots, self.config.seed)
    }

    /// Checks the current state and its Bloch vector against the configured
    /// tolerance.
    ///
    /// # Errors
    /// [`BlochError::NotNormalized`] if either has drifted off unit length.
    pub fn validate(&self) -> Result<(), BlochError> {
        validate_state(&self.state, Some(self.config.tolerance))
    }

    /// The current state.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Gates applied since the last reset.
    pub fn log(&self) -> &CircuitLog {
        &self.log
    }

    /// The trajectory since the last reset.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Total distance travelled since the last reset, in radians.
    pub fn cumulative_distance(&self) -> f64 {
        self.trajectory.cumulative_distance()
    }

    /// The configuration in use.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
