// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;
pub mod config;
pub mod constants;

// Re-export public types for convenient access via `blochwalk::core::TypeName`
pub use error::BlochError;
pub use state::StateVector;
pub use config::SessionConfig;
pub use constants::bloch_constants::{DEG_TO_RAD, DISPLAY_PRECISION, NORM_TOLERANCE, NORTH_POLE};
