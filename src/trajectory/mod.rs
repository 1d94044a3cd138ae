// src/trajectory/mod.rs

//! The running record of where the qubit has been on the sphere, and how far
//! it has travelled.

use log::trace;
use serde::Serialize;

use crate::projection::BlochVector;

/// Great-circle angle between two unit vectors, in radians.
///
/// The dot product is clamped to `[-1, 1]` before `acos`: rounding can push
/// the dot product of two unit vectors just past ±1, which would otherwise
/// yield NaN. On the unit sphere this angle is also the arc length.
pub fn angle_between(a: &BlochVector, b: &BlochVector) -> f64 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Ordered Bloch vectors plus the cumulative angular distance between
/// consecutive entries.
///
/// A fresh trajectory holds the north pole twice, so the first recorded
/// point measures its distance from |0⟩.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    points: Vec<BlochVector>,
    cumulative_distance: f64,
}

impl Trajectory {
    /// A trajectory seeded with two north-pole points and zero distance.
    pub fn new() -> Self {
        Self {
            points: vec![BlochVector::north_pole(), BlochVector::north_pole()],
            cumulative_distance: 0.0,
        }
    }

    /// Appends `point` and adds the angle from the previous entry to the
    /// cumulative distance. Returns that angle.
    pub fn record(&mut self, point: BlochVector) -> f64 {
        // Never empty: seeded on construction and on reset.
        let previous = self.points.last().copied().unwrap_or_else(BlochVector::north_pole);
        let step = angle_between(&point, &previous);
        self.points.push(point);
        self.cumulative_distance += step;
        trace!(
            "trajectory leg {} -> {}: {:.6} rad (total {:.6})",
            previous, point, step, self.cumulative_distance
        );
        step
    }

    /// Restores the two-point seed and zero distance.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Every recorded point, seed included, oldest first.
    pub fn points(&self) -> &[BlochVector] {
        &self.points
    }

    /// The most recent point.
    pub fn last(&self) -> BlochVector {
        self.points.last().copied().unwrap_or_else(BlochVector::north_pole)
    }

    /// Sum of the angles between consecutive points, in radians.
    pub fn cumulative_distance(&self) -> f64 {
        self.cumulative_distance
    }

    /// Number of stored points, seed included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if no points are stored. A trajectory built by [`Trajectory::new`]
    /// or [`Trajectory::reset`] holds the seed pair, so this returns `false`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` while only the seed pair is present.
    pub fn is_seed(&self) -> bool {
        self.points.len() == 2 && self.cumulative_distance == 0.0
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn new_trajectory_is_the_seed_pair() {
        let t = Trajectory::new();
        assert_eq!(t.points(), &[BlochVector::north_pole(), BlochVector::north_pole()]);
        assert_eq!(t.cumulative_distance(), 0.0);
        assert!(t.is_seed());
        assert!(!t.is_empty());
    }

    #[test]
    fn record_accumulates_great_circle_angles() {
        let mut t = Trajectory::new();
        let step = t.record(BlochVector::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(step, FRAC_PI_2, epsilon = 1e-12);
        t.record(BlochVector::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(t.cumulative_distance(), PI, epsilon = 1e-12);
        assert_eq!(t.len(), 4);
        assert_eq!(t.last(), BlochVector::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn repeated_point_adds_nothing() {
        let mut t = Trajectory::new();
        assert_eq!(t.record(BlochVector::north_pole()), 0.0);
        assert_eq!(t.cumulative_distance(), 0.0);
        assert!(!t.is_seed());
    }

    #[test]
    fn clamped_angle_of_overshooting_dot_product_is_zero() {
        // Slightly longer than unit: the dot product rounds past 1.0.
        let a = BlochVector::new(0.0, 0.0, 1.0 + 1e-10);
        assert!(a.dot(&a) > 1.0);
        let angle = angle_between(&a, &a);
        assert!(!angle.is_nan());
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn clamped_angle_of_antipodal_overshoot_is_pi() {
        let a = BlochVector::new(0.0, 0.0, 1.0 + 1e-10);
        let b = BlochVector::new(0.0, 0.0, -1.0 - 1e-10);
        assert_eq!(angle_between(&a, &b), PI);
    }

    #[test]
    fn reset_restores_seed() {
        let mut t = Trajectory::new();
        t.record(BlochVector::new(0.0, 1.0, 0.0));
        t.record(BlochVector::new(0.0, -1.0, 0.0));
        t.reset();
        assert_eq!(t, Trajectory::new());
    }
}
