// src/simulation/results.rs
use serde::Serialize;
use std::fmt;

/// Outcome tallies from sampling a state in the computational basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementCounts {
    /// Shots that resolved to |0⟩.
    pub zeros: u64,
    /// Shots that resolved to |1⟩.
    pub ones: u64,
}

impl MeasurementCounts {
    /// Total number of shots.
    pub fn shots(&self) -> u64 {
        self.zeros + self.ones
    }

    /// Observed frequency of |0⟩. Zero when no shots were taken.
    pub fn frequency_zero(&self) -> f64 {
        match self.shots() {
            0 => 0.0,
            n => self.zeros as f64 / n as f64,
        }
    }

    /// Observed frequency of |1⟩. Zero when no shots were taken.
    pub fn frequency_one(&self) -> f64 {
        match self.shots() {
            0 => 0.0,
            n => self.ones as f64 / n as f64,
        }
    }
}

impl fmt::Display for MeasurementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Results ({} shots):", self.shots())?;
        writeln!(f, "  |0⟩: {} ({:.3})", self.zeros, self.frequency_zero())?;
        writeln!(f, "  |1⟩: {} ({:.3})", self.ones, self.frequency_one())
    }
}
