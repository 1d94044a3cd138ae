// src/operations/mod.rs

//! The gate library: the closed set of single-qubit unitaries a session can
//! apply, and the degree-based boundary through which they are requested.
//!
//! Angles are held in radians inside a [`Gate`]. Callers that think in degrees
//! go through [`Gate::from_degrees`], which checks ranges and converts.

pub mod matrices;

pub use matrices::Matrix2;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::constants::bloch_constants::DEG_TO_RAD;
use crate::core::state::round_to;
use crate::core::BlochError;

/// The kind of a gate, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GateKind {
    /// Hadamard.
    Hadamard,
    /// Pauli X (bit flip).
    PauliX,
    /// Pauli Y.
    PauliY,
    /// Pauli Z (phase flip).
    PauliZ,
    /// Rotation by θ about the axis `cos(φ)·x̂ + sin(φ)·ŷ`.
    Rotation,
    /// Phase shift by θ about Z.
    Phase,
}

impl GateKind {
    /// Every kind, in the order a gate palette would list them.
    pub const ALL: [GateKind; 6] = [
        GateKind::Hadamard,
        GateKind::PauliX,
        GateKind::PauliY,
        GateKind::PauliZ,
        GateKind::Rotation,
        GateKind::Phase,
    ];

    /// Short circuit-diagram symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            GateKind::Hadamard => "H",
            GateKind::PauliX => "X",
            GateKind::PauliY => "Y",
            GateKind::PauliZ => "Z",
            GateKind::Rotation => "R",
            GateKind::Phase => "P",
        }
    }

    /// Plain-text matrix formula, suitable for tooltips or help output.
    pub fn matrix_text(&self) -> &'static str {
        match self {
            GateKind::Hadamard => "H = 1/√2 [[1, 1], [1, -1]]",
            GateKind::PauliX => "X = [[0, 1], [1, 0]]",
            GateKind::PauliY => "Y = [[0, -i], [i, 0]]",
            GateKind::PauliZ => "Z = [[1, 0], [0, -1]]",
            GateKind::Rotation => {
                "R(θ, φ) = [[cos(θ/2), -i·e^(-iφ)·sin(θ/2)], [-i·e^(iφ)·sin(θ/2), cos(θ/2)]]"
            }
            GateKind::Phase => "P(θ) = [[1, 0], [0, e^(iθ)]]",
        }
    }

    /// `true` for kinds that take angle parameters.
    pub fn is_parametrized(&self) -> bool {
        matches!(self, GateKind::Rotation | GateKind::Phase)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateKind::Hadamard => "Hadamard",
            GateKind::PauliX => "Pauli X",
            GateKind::PauliY => "Pauli Y",
            GateKind::PauliZ => "Pauli Z",
            GateKind::Rotation => "Rotation",
            GateKind::Phase => "Phase",
        };
        f.write_str(name)
    }
}

impl FromStr for GateKind {
    type Err = BlochError;

    /// Accepts symbols and names in any case, ignoring spaces, `-` and `_`:
    /// `h`, `Hadamard`, `x`, `pauli-x`, `rot`, `phase`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "h" | "hadamard" => Ok(GateKind::Hadamard),
            "x" | "paulix" => Ok(GateKind::PauliX),
            "y" | "pauliy" => Ok(GateKind::PauliY),
            "z" | "pauliz" => Ok(GateKind::PauliZ),
            "r" | "rot" | "rotate" | "rotation" => Ok(GateKind::Rotation),
            "p" | "phase" => Ok(GateKind::Phase),
            _ => Err(BlochError::UnknownGate { name: s.to_string() }),
        }
    }
}

/// An angle accepted at the degree boundary, each with its own range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleParameter {
    /// Rotation angle θ, in (-180°, 180°].
    RotationTheta,
    /// Rotation axis azimuth φ, in (-360°, 360°].
    RotationPhi,
    /// Phase angle θ, in (-360°, 360°].
    PhaseTheta,
}

impl AngleParameter {
    /// Half-open bounds `(low, high]` in degrees.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            AngleParameter::RotationTheta => (-180.0, 180.0),
            AngleParameter::RotationPhi | AngleParameter::PhaseTheta => (-360.0, 360.0),
        }
    }

    /// `true` if `degrees` is finite and within `(low, high]`.
    pub fn accepts(&self, degrees: f64) -> bool {
        let (low, high) = self.bounds();
        degrees.is_finite() && degrees > low && degrees <= high
    }

    /// Checks `degrees` against the range and converts it to radians.
    pub fn to_radians(&self, degrees: f64) -> Result<f64, BlochError> {
        if self.accepts(degrees) {
            Ok(degrees * DEG_TO_RAD)
        } else {
            Err(BlochError::AngleOutOfRange { parameter: *self, degrees, range: self.bounds() })
        }
    }

    /// Converts `radians` back to degrees for printing, rounded to `digits`
    /// decimals unless rounding would leave the accepted range.
    ///
    /// The result of printing an accepted angle is itself accepted, so text
    /// written from a gate parses back into a gate.
    pub fn degrees_of(&self, radians: f64, digits: usize) -> f64 {
        let (low, high) = self.bounds();
        let exact = radians.to_degrees();
        // The round trip through radians can land a bound a few ulps outside.
        let exact = if exact <= low && low - exact < 1e-9 {
            f64::from_bits(low.to_bits() - 1)
        } else if exact > high && exact - high < 1e-9 {
            high
        } else {
            exact
        };
        let rounded = round_to(exact, digits);
        if self.accepts(rounded) { rounded } else { exact }
    }
}

impl fmt::Display for AngleParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleParameter::RotationTheta => f.write_str("rotation θ"),
            AngleParameter::RotationPhi => f.write_str("rotation φ"),
            AngleParameter::PhaseTheta => f.write_str("phase θ"),
        }
    }
}

/// A single-qubit unitary. Immutable once built; angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Gate {
    /// Hadamard.
    Hadamard,
    /// Pauli X.
    PauliX,
    /// Pauli Y.
    PauliY,
    /// Pauli Z.
    PauliZ,
    /// Rotation by `theta` about `cos(phi)·x̂ + sin(phi)·ŷ`.
    Rotation {
        /// Rotation angle in radians.
        theta: f64,
        /// Axis azimuth in radians.
        phi: f64,
    },
    /// Phase shift `e^(i·theta)` on |1⟩.
    Phase {
        /// Phase angle in radians.
        theta: f64,
    },
}

impl Gate {
    /// Builds a gate from degree parameters, the form in which user input arrives.
    ///
    /// Fixed gates take no parameters. `Rotation` takes `[θ]` or `[θ, φ]`
    /// (φ defaults to 0°). `Phase` takes `[θ]`.
    ///
    /// # Errors
    /// * [`BlochError::ParameterCount`] when the number of parameters is wrong.
    /// * [`BlochError::AngleOutOfRange`] when an angle is outside its range or not finite.
    ///
    /// # Examples
    /// ```
    /// # use blochwalk::{Gate, GateKind};
    /// let gate = Gate::from_degrees(GateKind::Phase, &[90.0]).unwrap();
    /// assert_eq!(gate, Gate::Phase { theta: std::f64::consts::FRAC_PI_2 });
    /// assert!(Gate::from_degrees(GateKind::Rotation, &[-180.0]).is_err());
    /// ```
    pub fn from_degrees(kind: GateKind, params: &[f64]) -> Result<Self, BlochError> {
        let count_error = |expected: &'static str| BlochError::ParameterCount {
            kind,
            expected,
            found: params.len(),
        };
        match kind {
            GateKind::Hadamard | GateKind::PauliX | GateKind::PauliY | GateKind::PauliZ => {
                if !params.is_empty() {
                    return Err(count_error("0"));
                }
                Ok(match kind {
                    GateKind::Hadamard => Gate::Hadamard,
                    GateKind::PauliX => Gate::PauliX,
                    GateKind::PauliY => Gate::PauliY,
                    _ => Gate::PauliZ,
                })
            }
            GateKind::Rotation => {
                let (theta_deg, phi_deg) = match *params {
                    [theta] => (theta, 0.0),
                    [theta, phi] => (theta, phi),
                    _ => return Err(count_error("1 or 2")),
                };
                Ok(Gate::Rotation {
                    theta: AngleParameter::RotationTheta.to_radians(theta_deg)?,
                    phi: AngleParameter::RotationPhi.to_radians(phi_deg)?,
                })
            }
            GateKind::Phase => match *params {
                [theta] => Ok(Gate::Phase { theta: AngleParameter::PhaseTheta.to_radians(theta)? }),
                _ => Err(count_error("1")),
            },
        }
    }

    /// The parameter-free kind of this gate.
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::Hadamard => GateKind::Hadamard,
            Gate::PauliX => GateKind::PauliX,
            Gate::PauliY => GateKind::PauliY,
            Gate::PauliZ => GateKind::PauliZ,
            Gate::Rotation { .. } => GateKind::Rotation,
            Gate::Phase { .. } => GateKind::Phase,
        }
    }

    /// The gate's 2x2 unitary.
    pub fn matrix(&self) -> Matrix2 {
        match *self {
            Gate::Hadamard => matrices::hadamard(),
            Gate::PauliX => matrices::pauli_x(),
            Gate::PauliY => matrices::pauli_y(),
            Gate::PauliZ => matrices::pauli_z(),
            Gate::Rotation { theta, phi } => matrices::rotation(theta, phi),
            Gate::Phase { theta } => matrices::phase(theta),
        }
    }

    /// Diagram symbol (`H`, `X`, `Y`, `Z`, `R`, `P`).
    pub fn symbol(&self) -> &'static str {
        self.kind().symbol()
    }

    /// Plain-text matrix formula of this gate's kind.
    pub fn matrix_text(&self) -> &'static str {
        self.kind().matrix_text()
    }

    /// Symbol plus parameters in degrees, e.g. `R(90°,45°)` or `P(180°)`.
    pub fn label(&self) -> String {
        match *self {
            Gate::Rotation { theta, phi } => format!(
                "R({}°,{}°)",
                AngleParameter::RotationTheta.degrees_of(theta, 3),
                AngleParameter::RotationPhi.degrees_of(phi, 3)
            ),
            Gate::Phase { theta } => format!("P({}°)", AngleParameter::PhaseTheta.degrees_of(theta, 3)),
            _ => self.symbol().to_string(),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_unitary;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn every_gate_is_unitary() -> Result<(), BlochError> {
        let mut gates = vec![Gate::Hadamard, Gate::PauliX, Gate::PauliY, Gate::PauliZ];
        for theta in [-179.0, -90.0, 0.0, 33.3, 180.0] {
            for phi in [-359.0, -45.0, 0.0, 90.0, 360.0] {
                gates.push(Gate::from_degrees(GateKind::Rotation, &[theta, phi])?);
            }
        }
        for theta in [-359.0, -1.0, 0.0, 45.0, 360.0] {
            gates.push(Gate::from_degrees(GateKind::Phase, &[theta])?);
        }
        for gate in gates {
            assert!(is_unitary(&gate.matrix(), 1e-12), "{} is not unitary", gate);
        }
        Ok(())
    }

    #[test]
    fn from_degrees_converts_to_radians() -> Result<(), BlochError> {
        assert_eq!(
            Gate::from_degrees(GateKind::Rotation, &[180.0, 45.0])?,
            Gate::Rotation { theta: PI, phi: FRAC_PI_4 }
        );
        assert_eq!(
            Gate::from_degrees(GateKind::Rotation, &[90.0])?,
            Gate::Rotation { theta: FRAC_PI_2, phi: 0.0 }
        );
        assert_eq!(Gate::from_degrees(GateKind::Hadamard, &[])?, Gate::Hadamard);
        Ok(())
    }

    #[test]
    fn from_degrees_enforces_half_open_ranges() {
        let rejected = [
            (GateKind::Rotation, vec![-180.0], AngleParameter::RotationTheta),
            (GateKind::Rotation, vec![180.5], AngleParameter::RotationTheta),
            (GateKind::Rotation, vec![10.0, -360.0], AngleParameter::RotationPhi),
            (GateKind::Phase, vec![-360.0], AngleParameter::PhaseTheta),
            (GateKind::Phase, vec![f64::NAN], AngleParameter::PhaseTheta),
            (GateKind::Phase, vec![f64::INFINITY], AngleParameter::PhaseTheta),
        ];
        for (kind, params, parameter) in rejected {
            match Gate::from_degrees(kind, &params) {
                Err(BlochError::AngleOutOfRange { parameter: p, .. }) => assert_eq!(p, parameter),
                other => panic!("expected range error for {:?}, got {:?}", params, other),
            }
        }
        assert!(Gate::from_degrees(GateKind::Phase, &[360.0]).is_ok());
        assert!(Gate::from_degrees(GateKind::Rotation, &[180.0, 360.0]).is_ok());
    }

    #[test]
    fn from_degrees_checks_parameter_count() {
        assert!(matches!(
            Gate::from_degrees(GateKind::PauliX, &[1.0]),
            Err(BlochError::ParameterCount { found: 1, .. })
        ));
        assert!(matches!(
            Gate::from_degrees(GateKind::Rotation, &[]),
            Err(BlochError::ParameterCount { found: 0, .. })
        ));
        assert!(matches!(
            Gate::from_degrees(GateKind::Phase, &[1.0, 2.0]),
            Err(BlochError::ParameterCount { found: 2, .. })
        ));
    }

    #[test]
    fn kind_parses_names_and_symbols() -> Result<(), BlochError> {
        assert_eq!("H".parse::<GateKind>()?, GateKind::Hadamard);
        assert_eq!("pauli-x".parse::<GateKind>()?, GateKind::PauliX);
        assert_eq!("Pauli Y".parse::<GateKind>()?, GateKind::PauliY);
        assert_eq!("PAULI_Z".parse::<GateKind>()?, GateKind::PauliZ);
        assert_eq!("rot".parse::<GateKind>()?, GateKind::Rotation);
        assert_eq!("phase".parse::<GateKind>()?, GateKind::Phase);
        assert!(matches!("cnot".parse::<GateKind>(), Err(BlochError::UnknownGate { .. })));
        Ok(())
    }

    #[test]
    fn labels_show_degrees() -> Result<(), BlochError> {
        assert_eq!(Gate::from_degrees(GateKind::Rotation, &[90.0, 45.0])?.label(), "R(90°,45°)");
        assert_eq!(Gate::from_degrees(GateKind::Phase, &[-30.0])?.to_string(), "P(-30°)");
        assert_eq!(Gate::Hadamard.label(), "H");
        Ok(())
    }

    #[test]
    fn labels_near_the_open_bound_stay_in_range() -> Result<(), BlochError> {
        let label = Gate::from_degrees(GateKind::Rotation, &[-179.9999999, 0.0])?.label();
        assert!(label.starts_with("R(-179.99999"), "{}", label);
        assert!(label.ends_with(",0°)"), "{}", label);
        let label = Gate::from_degrees(GateKind::Phase, &[-359.99999])?.label();
        assert!(label.starts_with("P(-359.9999"), "{}", label);
        Ok(())
    }

    #[test]
    fn degrees_of_recovers_accepted_angles() {
        for (parameter, degrees) in [
            (AngleParameter::RotationTheta, -179.9999999),
            (AngleParameter::RotationTheta, 180.0),
            (AngleParameter::RotationPhi, -359.9999999),
            (AngleParameter::PhaseTheta, 360.0),
            (AngleParameter::PhaseTheta, 30.0),
        ] {
            let radians = degrees * DEG_TO_RAD;
            for digits in [0, 3, 9] {
                let back = parameter.degrees_of(radians, digits);
                assert!(parameter.accepts(back), "{} printed as {}", degrees, back);
            }
            assert!((parameter.degrees_of(radians, 9) - degrees).abs() < 1e-9);
        }
        // Just past the open bound after conversion: nudged back inside.
        let outside = f64::from_bits((-180.0f64).to_bits() + 1);
        let back = AngleParameter::RotationTheta.degrees_of(outside.to_radians(), 3);
        assert!(AngleParameter::RotationTheta.accepts(back), "{}", back);
    }

    #[test]
    fn error_message_names_range() {
        let err = AngleParameter::RotationTheta.to_radians(200.0).unwrap_err();
        assert_eq!(err.to_string(), "rotation θ = 200° is outside the accepted range (-180°, 180°]");
        assert_eq!(
            err,
            BlochError::AngleOutOfRange {
                parameter: AngleParameter::RotationTheta,
                degrees: 200.0,
                range: (-180.0, 180.0),
            }
        );
        match AngleParameter::PhaseTheta.to_radians(-360.0) {
            Err(BlochError::AngleOutOfRange { range, .. }) => assert_eq!(range, (-360.0, 360.0)),
            other => panic!("expected range error, got {:?}", other),
        }
    }
}
