// src/validation/mod.rs

//! Numerical checks on states, Bloch vectors and gate matrices.
//!
//! The pipeline itself never calls these to reject anything: drift is
//! corrected silently by renormalization. They exist for tests, for hosts
//! that want to assert invariants, and for diagnostic logging.

use crate::core::constants::bloch_constants::NORM_TOLERANCE;
use crate::core::{BlochError, StateVector};
use crate::operations::matrices::{dagger, identity, multiply};
use crate::operations::Matrix2;
use crate::projection::BlochVector;

// Unitarity is checked at the same default tolerance as normalization
const DEFAULT_UNITARY_TOLERANCE: f64 = NORM_TOLERANCE;

/// Checks that `|α|² + |β|² ≈ 1`.
///
/// # Arguments
/// * `state` - The state to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(BlochError::NotNormalized)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), BlochError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(BlochError::NotNormalized { norm_sqr })
    } else {
        Ok(())
    }
}

/// Checks that a Bloch vector lies on the unit sphere, `x² + y² + z² ≈ 1`.
pub fn check_unit_bloch(vector: &BlochVector, tolerance: Option<f64>) -> Result<(), BlochError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sqr = vector.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(BlochError::NotNormalized { norm_sqr })
    } else {
        Ok(())
    }
}

/// Largest element-wise magnitude of `U·U† - I`.
pub fn unitarity_deviation(matrix: &Matrix2) -> f64 {
    let product = multiply(matrix, &dagger(matrix));
    let id = identity();
    let mut worst: f64 = 0.0;
    for row in 0..2 {
        for col in 0..2 {
            worst = worst.max((product[row][col] - id[row][col]).norm());
        }
    }
    worst
}

/// `true` if `U·U† = I` within `tolerance`.
pub fn is_unitary(matrix: &Matrix2, tolerance: f64) -> bool {
    unitarity_deviation(matrix) <= tolerance
}

/// Checks that `U·U† = I`, reporting the deviation on failure.
pub fn check_unitary(matrix: &Matrix2, tolerance: Option<f64>) -> Result<(), BlochError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_UNITARY_TOLERANCE);
    let deviation = unitarity_deviation(matrix);
    if deviation > effective_tolerance {
        Err(BlochError::NotUnitary { deviation })
    } else {
        Ok(())
    }
}

/// Runs the state and projection checks together.
pub fn validate_state(state: &StateVector, tolerance: Option<f64>) -> Result<(), BlochError> {
    check_normalization(state, tolerance)?;
    check_unit_bloch(&BlochVector::from_state(state), tolerance)
}
