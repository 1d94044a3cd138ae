// src/session/command.rs

//! Commands a host sends to a [`Session`](super::Session), and a small
//! line-oriented text form for scripting them.
//!
//! ```text
//! # walk to the equator and back
//! h
//! rot 90 45      # θ = 90°, φ = 45°
//! phase -90
//! reset
//! ```

use std::fmt;
use std::str::FromStr;

use crate::core::BlochError;
use crate::operations::{AngleParameter, Gate, GateKind};

/// One interaction with a session.
///
/// Gate parameters are validated when the command is built, so executing a
/// command cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Append a gate to the circuit log and run the pipeline.
    Apply(Gate),
    /// Return the session to its initial state.
    Reset,
}

impl Command {
    /// Builds an `Apply` command from a kind and degree parameters.
    pub fn apply(kind: GateKind, params: &[f64]) -> Result<Self, BlochError> {
        Gate::from_degrees(kind, params).map(Command::Apply)
    }

    /// Parses one line of script text. `line` is used in error messages.
    ///
    /// Returns `Ok(None)` for blank and comment-only lines.
    pub fn parse_line(text: &str, line: usize) -> Result<Option<Self>, BlochError> {
        let invalid = |message: String| BlochError::InvalidCommand { line, message };

        let code = text.split('#').next().unwrap_or("");
        let mut tokens = code
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());

        let Some(head) = tokens.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = tokens.collect();

        if head.eq_ignore_ascii_case("reset") {
            if !rest.is_empty() {
                return Err(invalid("reset takes no parameters".to_string()));
            }
            return Ok(Some(Command::Reset));
        }

        let kind: GateKind = head.parse().map_err(|e: BlochError| invalid(e.to_string()))?;
        let params = rest
            .iter()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| invalid(format!("'{}' is not a number", token)))
            })
            .collect::<Result<Vec<f64>, BlochError>>()?;

        Command::apply(kind, &params)
            .map(Some)
            .map_err(|e| invalid(e.to_string()))
    }
}

impl FromStr for Command {
    type Err = BlochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse_line(s, 1)?.ok_or_else(|| BlochError::InvalidCommand {
            line: 1,
            message: "empty command".to_string(),
        })
    }
}

impl fmt::Display for Command {
    /// Writes the command in script form. Angles are rounded to nine decimals
    /// where that keeps them in range, so parsing the output yields the same
    /// gate up to that rounding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::Reset => f.write_str("reset"),
            Command::Apply(Gate::Rotation { theta, phi }) => write!(
                f,
                "rot {} {}",
                AngleParameter::RotationTheta.degrees_of(theta, 9),
                AngleParameter::RotationPhi.degrees_of(phi, 9)
            ),
            Command::Apply(Gate::Phase { theta }) => {
                write!(f, "phase {}", AngleParameter::PhaseTheta.degrees_of(theta, 9))
            }
            Command::Apply(gate) => f.write_str(&gate.symbol().to_lowercase()),
        }
    }
}

/// An ordered list of commands, typically parsed from text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandScript {
    commands: Vec<Command>,
}

impl CommandScript {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole script, one command per line.
    ///
    /// # Errors
    /// [`BlochError::InvalidCommand`] naming the first offending line.
    pub fn parse(text: &str) -> Result<Self, BlochError> {
        let mut commands = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if let Some(command) = Command::parse_line(line, index + 1)? {
                commands.push(command);
            }
        }
        Ok(Self { commands })
    }

    /// Appends a command. Returns `self` for chaining.
    pub fn push(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// The commands in order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the script has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<Command> for CommandScript {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self { commands: iter.into_iter().collect() }
    }
}

impl fmt::Display for CommandScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}
