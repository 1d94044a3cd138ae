//! Numerical constants shared across the crate.

/// Constants used by the state, projection and trajectory code.
pub mod bloch_constants {
    /// Default tolerance for normalization and unit-length checks.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Multiply degrees by this to get radians.
    pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
    /// The |0⟩ pole of the Bloch sphere.
    pub const NORTH_POLE: [f64; 3] = [0.0, 0.0, 1.0];
    /// Digits kept when rounding amplitudes and probabilities for display.
    pub const DISPLAY_PRECISION: usize = 3;
}
