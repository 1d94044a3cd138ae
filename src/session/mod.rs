// src/session/mod.rs

//! The interaction layer: a [`Session`] owns one user's circuit log and
//! trajectory, accepts [`Command`]s and answers each with a [`Snapshot`].

mod command;
mod controller;
mod snapshot;

pub use command::{Command, CommandScript};
pub use controller::Session;
pub use snapshot::Snapshot;

use serde::Serialize;
use std::fmt;

/// Lifecycle of a session. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SessionPhase {
    /// Empty log, state |0⟩, trajectory at its seed, zero distance.
    Initialized,
    /// At least one gate applied since the last reset.
    Active,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Initialized => f.write_str("Initialized"),
            SessionPhase::Active => f.write_str("Active"),
        }
    }
}
