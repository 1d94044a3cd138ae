// src/projection/mod.rs

//! The Bloch projector: maps a [`StateVector`] onto the unit sphere and
//! reads off its measurement probabilities.
//!
//! For `|ψ⟩ = α|0⟩ + β|1⟩`:
//!
//! * `x = 2·Re(α·β̄)`
//! * `y = 2·Im(β·ᾱ)`
//! * `z = |α|² - |β|²`
//!
//! Global phase cancels in every term, so states that differ only by
//! `e^(iγ)` land on the same point.

use num_complex::Complex64;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

use crate::core::constants::bloch_constants::NORTH_POLE;
use crate::core::StateVector;

/// A point on the Bloch sphere in Cartesian coordinates.
///
/// Always derived from a state (or the north-pole seed); there is no public
/// constructor from raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlochVector {
    /// X coordinate, ⟨σx⟩.
    pub x: f64,
    /// Y coordinate, ⟨σy⟩.
    pub y: f64,
    /// Z coordinate, ⟨σz⟩. +1 is |0⟩, -1 is |1⟩.
    pub z: f64,
}

/// Spherical coordinates of a Bloch vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π], measured from +Z.
    pub theta: f64,
    /// Azimuth φ ∈ [0, 2π), measured from +X towards +Y.
    pub phi: f64,
}

impl BlochVector {
    pub(crate) fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The |0⟩ pole, `(0, 0, 1)`.
    pub fn north_pole() -> Self {
        let [x, y, z] = NORTH_POLE;
        Self::new(x, y, z)
    }

    /// Projects a state onto the sphere.
    pub fn from_state(state: &StateVector) -> Self {
        let alpha = state.alpha();
        let beta = state.beta();
        Self::new(
            2.0 * (alpha * beta.conj()).re,
            2.0 * (beta * alpha.conj()).im,
            alpha.norm_sqr() - beta.norm_sqr(),
        )
    }

    /// `[x, y, z]`.
    pub fn coordinates(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean inner product.
    pub fn dot(&self, other: &BlochVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// `x² + y² + z²`. One for any pure state.
    pub fn norm_sqr(&self) -> f64 {
        self.dot(self)
    }

    /// Length of the vector.
    pub fn magnitude(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Converts to spherical coordinates.
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        // Handle near-zero vector
        if r < 1e-10 {
            return BlochAngles { theta: 0.0, phi: 0.0 };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(4);
        write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z, p = p)
    }
}

/// Everything the projector derives from one state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    /// Position on the sphere.
    pub bloch: BlochVector,
    /// Amplitude of |0⟩.
    pub alpha: Complex64,
    /// Amplitude of |1⟩.
    pub beta: Complex64,
    /// `P(0) = |α|²`.
    pub p0: f64,
    /// `P(1) = |β|²`.
    pub p1: f64,
}

/// Projects a state: Bloch coordinates, amplitudes and probabilities.
pub fn project(state: &StateVector) -> Projection {
    let (p0, p1) = state.probabilities();
    Projection {
        bloch: BlochVector::from_state(state),
        alpha: state.alpha(),
        beta: state.beta(),
        p0,
        p1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn state(alpha: Complex64, beta: Complex64) -> StateVector {
        StateVector::from_amplitudes(alpha, beta).unwrap()
    }

    fn assert_bloch(actual: BlochVector, expected: [f64; 3]) {
        for (a, e) in actual.coordinates().iter().zip(expected) {
            assert_abs_diff_eq!(*a, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn basis_states_sit_on_poles() {
        assert_bloch(BlochVector::from_state(&StateVector::ground()), [0.0, 0.0, 1.0]);
        assert_bloch(BlochVector::from_state(&StateVector::excited()), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn equator_states() {
        let h = FRAC_1_SQRT_2;
        let plus = state(Complex64::new(h, 0.0), Complex64::new(h, 0.0));
        let minus = state(Complex64::new(h, 0.0), Complex64::new(-h, 0.0));
        let plus_i = state(Complex64::new(h, 0.0), Complex64::new(0.0, h));
        let minus_i = state(Complex64::new(h, 0.0), Complex64::new(0.0, -h));
        assert_bloch(BlochVector::from_state(&plus), [1.0, 0.0, 0.0]);
        assert_bloch(BlochVector::from_state(&minus), [-1.0, 0.0, 0.0]);
        assert_bloch(BlochVector::from_state(&plus_i), [0.0, 1.0, 0.0]);
        assert_bloch(BlochVector::from_state(&minus_i), [0.0, -1.0, 0.0]);
    }

    #[test]
    fn global_phase_does_not_move_the_point() {
        let a = Complex64::new(0.6, 0.0);
        let b = Complex64::new(0.0, 0.8);
        let phase = Complex64::from_polar(1.0, 1.1);
        let original = BlochVector::from_state(&state(a, b));
        let rotated = BlochVector::from_state(&state(a * phase, b * phase));
        assert_bloch(rotated, original.coordinates());
    }

    #[test]
    fn projection_has_unit_norm_and_probabilities_sum_to_one() {
        let p = project(&state(Complex64::new(0.3, -0.2), Complex64::new(-0.5, 0.7)));
        assert_abs_diff_eq!(p.bloch.norm_sqr(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.p0 + p.p1, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.bloch.z, p.p0 - p.p1, epsilon = 1e-12);
    }

    #[test]
    fn angles_of_known_points() {
        let north = BlochVector::north_pole().to_angles();
        assert_abs_diff_eq!(north.theta, 0.0);
        let y_axis = BlochVector::new(0.0, 1.0, 0.0).to_angles();
        assert_abs_diff_eq!(y_axis.theta, PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y_axis.phi, PI / 2.0, epsilon = 1e-12);
        let minus_y = BlochVector::new(0.0, -1.0, 0.0).to_angles();
        assert_abs_diff_eq!(minus_y.phi, 3.0 * PI / 2.0, epsilon = 1e-12);
    }
}
