//! Error handling logic

use thiserror::Error;

use crate::operations::{AngleParameter, GateKind};

/// Errors raised at the boundary of the crate.
///
/// The replay, projection and trajectory pipeline never fails; numerical
/// anomalies there are resolved by clamping and renormalization. These
/// variants cover malformed input (angles, commands, configuration) and the
/// explicit checks in [`crate::validation`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlochError {
    /// A gate angle lies outside its accepted range, or is not finite.
    #[error("{parameter} = {degrees}° is outside the accepted range ({}°, {}°]", .range.0, .range.1)]
    AngleOutOfRange {
        /// Which angle was rejected.
        parameter: AngleParameter,
        /// The rejected value, in degrees.
        degrees: f64,
        /// The accepted half-open bounds `(low, high]`, in degrees.
        range: (f64, f64),
    },

    /// A gate received the wrong number of numeric parameters.
    #[error("{kind} expects {expected} parameter(s), got {found}")]
    ParameterCount {
        /// The gate being constructed.
        kind: GateKind,
        /// Human readable description of the accepted count.
        expected: &'static str,
        /// Number of parameters actually supplied.
        found: usize,
    },

    /// A gate name could not be resolved to a [`GateKind`].
    #[error("unknown gate '{name}'")]
    UnknownGate {
        /// The unrecognised name.
        name: String,
    },

    /// A line of a command script could not be parsed.
    #[error("line {line}: {message}")]
    InvalidCommand {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A state vector's squared norm deviates from 1 beyond tolerance.
    #[error("state vector not normalized, |α|² + |β|² = {norm_sqr}")]
    NotNormalized {
        /// The measured squared norm.
        norm_sqr: f64,
    },

    /// Both amplitudes are zero, so no state can be formed.
    #[error("amplitudes are both zero; cannot form a state")]
    DegenerateState,

    /// A matrix fails the U·U† = I check.
    #[error("matrix is not unitary, max |U·U† - I| = {deviation}")]
    NotUnitary {
        /// Largest element-wise deviation from the identity.
        deviation: f64,
    },

    /// Configuration could not be parsed or holds an invalid value.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What went wrong.
        message: String,
    },
}

impl From<toml::de::Error> for BlochError {
    fn from(err: toml::de::Error) -> Self {
        BlochError::InvalidConfig { message: err.to_string() }
    }
}
