// src/operations/matrices.rs

//! The 2x2 unitaries behind each [`Gate`](super::Gate), plus the small amount
//! of matrix arithmetic needed to check them.

use num_complex::Complex64;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;

/// A 2x2 complex matrix, row-major.
pub type Matrix2 = [[Complex64; 2]; 2];

/// The identity.
pub fn identity() -> Matrix2 {
    [
        [Complex64::one(), Complex64::zero()],
        [Complex64::zero(), Complex64::one()],
    ]
}

/// `H = 1/√2 [[1, 1], [1, -1]]`
pub fn hadamard() -> Matrix2 {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

/// `X = [[0, 1], [1, 0]]`
pub fn pauli_x() -> Matrix2 {
    [
        [Complex64::zero(), Complex64::one()],
        [Complex64::one(), Complex64::zero()],
    ]
}

/// `Y = [[0, -i], [i, 0]]`
pub fn pauli_y() -> Matrix2 {
    let i = Complex64::i();
    [[Complex64::zero(), -i], [i, Complex64::zero()]]
}

/// `Z = [[1, 0], [0, -1]]`
pub fn pauli_z() -> Matrix2 {
    [
        [Complex64::one(), Complex64::zero()],
        [Complex64::zero(), -Complex64::one()],
    ]
}

/// Rotation by `theta` about the equatorial axis `cos(phi)·x̂ + sin(phi)·ŷ`.
///
/// `R(θ, φ) = [[cos(θ/2), -i·e^(-iφ)·sin(θ/2)], [-i·e^(iφ)·sin(θ/2), cos(θ/2)]]`
pub fn rotation(theta: f64, phi: f64) -> Matrix2 {
    let half = theta / 2.0;
    let (sin_half, cos_half) = half.sin_cos();
    let minus_i = -Complex64::i();
    [
        [Complex64::new(cos_half, 0.0), minus_i * Complex64::from_polar(sin_half, -phi)],
        [minus_i * Complex64::from_polar(sin_half, phi), Complex64::new(cos_half, 0.0)],
    ]
}

/// Phase shift about Z: `P(θ) = [[1, 0], [0, e^(iθ)]]`
pub fn phase(theta: f64) -> Matrix2 {
    [
        [Complex64::one(), Complex64::zero()],
        [Complex64::zero(), Complex64::from_polar(1.0, theta)],
    ]
}

/// Matrix product `a · b`.
pub fn multiply(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut out = [[Complex64::zero(); 2]; 2];
    for (row, out_row) in out.iter_mut().enumerate() {
        for (col, cell) in out_row.iter_mut().enumerate() {
            *cell = a[row][0] * b[0][col] + a[row][1] * b[1][col];
        }
    }
    out
}

/// Conjugate transpose `U†`.
pub fn dagger(m: &Matrix2) -> Matrix2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn assert_matrix_eq(actual: &Matrix2, expected: &Matrix2) {
        for row in 0..2 {
            for col in 0..2 {
                let diff = actual[row][col] - expected[row][col];
                assert!(
                    diff.norm() < 1e-12,
                    "mismatch at ({}, {}): {} vs {}",
                    row, col, actual[row][col], expected[row][col]
                );
            }
        }
    }

    #[test]
    fn paulis_square_to_identity() {
        for m in [pauli_x(), pauli_y(), pauli_z(), hadamard()] {
            assert_matrix_eq(&multiply(&m, &m), &identity());
        }
    }

    #[test]
    fn rotation_about_x_by_pi_is_x_up_to_phase() {
        // R(π, 0) = -i·X
        let r = rotation(PI, 0.0);
        let minus_i_x = pauli_x().map(|row| row.map(|c| -Complex64::i() * c));
        assert_matrix_eq(&r, &minus_i_x);
    }

    #[test]
    fn rotation_about_y_axis_is_real() {
        // φ = π/2 selects the y axis, giving the real Ry matrix.
        let r = rotation(PI / 3.0, PI / 2.0);
        for row in r {
            for c in row {
                assert_abs_diff_eq!(c.im, 0.0, epsilon = 1e-12);
            }
        }
        assert_abs_diff_eq!(r[0][1].re, -(PI / 6.0).sin(), epsilon = 1e-12);
    }

    #[test]
    fn phase_by_pi_is_z() {
        assert_matrix_eq(&phase(PI), &pauli_z());
    }

    #[test]
    fn dagger_inverts_rotation() {
        let r = rotation(1.234, -0.56);
        assert_matrix_eq(&multiply(&r, &dagger(&r)), &identity());
        assert_matrix_eq(&dagger(&r), &rotation(-1.234, -0.56));
    }
}
