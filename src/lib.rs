// src/lib.rs

//! `blochwalk` - Track a qubit's walk around the Bloch sphere
//!
//! This library follows a single two-level quantum state through a sequence
//! of unitary gates, projecting it onto the Bloch sphere after each one and
//! keeping a running trail of positions and the great-circle distance
//! travelled.
//!
//! The state is never updated incrementally. Each gate is appended to a
//! [`CircuitLog`], and the state is recomputed by replaying the whole log
//! from |0⟩. Rendering, input widgets and session storage are left to the
//! host; the host keeps one [`Session`] per user and hands each
//! [`Snapshot`] to its renderer.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod projection;
pub mod trajectory;
pub mod simulation;
pub mod session;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{BlochError, SessionConfig, StateVector};
pub use operations::{AngleParameter, Gate, GateKind, Matrix2};
pub use circuits::{CircuitBuilder, CircuitLog};
pub use projection::{project, BlochAngles, BlochVector, Projection};
pub use trajectory::{angle_between, Trajectory};
pub use simulation::{MeasurementCounts, Simulator};
pub use session::{Command, CommandScript, Session, SessionPhase, Snapshot};
pub use validation::{
    check_normalization,
    check_unit_bloch,
    check_unitary,
    is_unitary,
    validate_state,
};

// Example 1: Walking from |0⟩ to |1⟩ the long way round
// A Hadamard moves the state to the +X point of the equator; a rotation by
// 90° about the y axis then carries it down to the south pole.
/// ```
/// use blochwalk::{Session, Gate, GateKind, BlochError};
/// use std::f64::consts::PI;
///
/// # fn main() -> Result<(), BlochError> {
/// let mut session = Session::new();
///
/// let after_h = session.apply_gate(Gate::Hadamard);
/// assert!((after_h.bloch.x - 1.0).abs() < 1e-9);
///
/// // θ = 90°, axis φ = 90° (the y axis)
/// let after_r = session.apply(GateKind::Rotation, &[90.0, 90.0])?;
/// assert!((after_r.bloch.z + 1.0).abs() < 1e-9);
/// assert_eq!(after_r.p1, 1.0);
///
/// // Two quarter turns: π radians in total.
/// assert!((after_r.cumulative_distance - PI).abs() < 1e-9);
/// println!("{}", after_r);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Driving a session from a script
// The same pipeline, fed by the line-oriented command form a host UI might
// log or replay.
/// ```
/// use blochwalk::{CommandScript, Session, SessionPhase};
///
/// let script = CommandScript::parse("
///     ## flip, then come back
///     x
///     x
///     reset
/// ").expect("script should parse");
///
/// let mut session = Session::new();
/// let snapshots = session.run_script(&script);
/// assert_eq!(snapshots.len(), 3);
/// assert!((snapshots[0].bloch.z + 1.0).abs() < 1e-9);
/// assert!((snapshots[1].bloch.z - 1.0).abs() < 1e-9);
/// assert_eq!(snapshots[2].phase, SessionPhase::Initialized);
/// assert_eq!(snapshots[2].cumulative_distance, 0.0);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
