// src/core/state.rs

use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::Serialize;
use std::fmt;

use super::error::BlochError;
use crate::operations::Matrix2;

/// The pure state of a single qubit, `|ψ⟩ = α|0⟩ + β|1⟩`.
///
/// A `StateVector` is a value: gates never mutate it in place, they produce
/// a new one via [`StateVector::apply`]. Vectors produced by the crate satisfy
/// `|α|² + |β|² = 1` within floating tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    alpha: Complex64,
    beta: Complex64,
}

impl StateVector {
    /// The computational basis state |0⟩, the north pole of the Bloch sphere.
    pub fn ground() -> Self {
        Self { alpha: Complex64::one(), beta: Complex64::zero() }
    }

    /// The computational basis state |1⟩, the south pole of the Bloch sphere.
    pub fn excited() -> Self {
        Self { alpha: Complex64::zero(), beta: Complex64::one() }
    }

    /// Wraps amplitudes as-is. Callers inside the crate guarantee normalization.
    pub(crate) fn new(alpha: Complex64, beta: Complex64) -> Self {
        Self { alpha, beta }
    }

    /// Builds a state from arbitrary amplitudes, normalizing them.
    ///
    /// # Errors
    /// [`BlochError::DegenerateState`] if both amplitudes are zero or any
    /// component is not finite.
    pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> Result<Self, BlochError> {
        let norm_sqr = alpha.norm_sqr() + beta.norm_sqr();
        if !norm_sqr.is_finite() || norm_sqr <= f64::MIN_POSITIVE {
            return Err(BlochError::DegenerateState);
        }
        Ok(Self::new(alpha, beta).normalized())
    }

    /// Amplitude of |0⟩.
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// Amplitude of |1⟩.
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// Both amplitudes as `[α, β]`.
    pub fn amplitudes(&self) -> [Complex64; 2] {
        [self.alpha, self.beta]
    }

    /// `|α|² + |β|²`.
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Measurement probabilities `(P(0), P(1)) = (|α|², |β|²)`.
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha.norm_sqr(), self.beta.norm_sqr())
    }

    /// Returns the state scaled to unit norm. A zero vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        let norm = self.norm_sqr().sqrt();
        if norm <= f64::MIN_POSITIVE {
            return *self;
        }
        Self::new(self.alpha / norm, self.beta / norm)
    }

    /// Applies a 2x2 matrix: `[α', β'] = M · [α, β]`.
    pub fn apply(&self, matrix: &Matrix2) -> Self {
        Self::new(
            matrix[0][0] * self.alpha + matrix[0][1] * self.beta,
            matrix[1][0] * self.alpha + matrix[1][1] * self.beta,
        )
    }

    /// Amplitudes with real and imaginary parts rounded to `digits` decimals.
    pub fn rounded(&self, digits: usize) -> [Complex64; 2] {
        let round = |c: Complex64| Complex64::new(round_to(c.re, digits), round_to(c.im, digits));
        [round(self.alpha), round(self.beta)]
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::ground()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        write!(
            f,
            "({:.p$})|0⟩ + ({:.p$})|1⟩",
            self.alpha,
            self.beta,
            p = precision
        )
    }
}

/// Rounds half away from zero to `digits` decimals, folding `-0.0` into `0.0`.
pub(crate) fn round_to(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale + 0.0
}
