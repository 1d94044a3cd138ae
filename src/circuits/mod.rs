// src/circuits/mod.rs

//! The circuit log: an ordered, append-only record of the gates applied to
//! the qubit.
//!
//! The log is the single source of truth for the state. Gates compose left
//! to right, each applied in turn to |0⟩, and the state is always rebuilt
//! by replaying the whole log (see [`crate::simulation`]).

use serde::Serialize;
use std::fmt;

use crate::operations::Gate;

/// An ordered sequence of [`Gate`]s applied to one qubit.
///
/// Append-only: the only way to remove gates is [`CircuitLog::clear`], which
/// a session calls on reset.
///
/// Analogy: a one-wire `qiskit.QuantumCircuit` holding single-qubit gates.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct CircuitLog {
    /// Insertion order is application order.
    gates: Vec<Gate>,
}

impl CircuitLog {
    /// Creates a new, empty log.
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// Appends a gate to the end of the log.
    pub fn append(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Appends multiple gates, preserving their order.
    pub fn extend<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        self.gates.extend(gates);
    }

    /// Removes every gate.
    pub fn clear(&mut self) {
        self.gates.clear();
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Iterates the gates in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }

    /// Labels of every gate, e.g. `["H", "R(90°,0°)"]`.
    pub fn labels(&self) -> Vec<String> {
        self.gates.iter().map(Gate::label).collect()
    }

    /// Returns the total number of gates in the log.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the log contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl FromIterator<Gate> for CircuitLog {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self { gates: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a CircuitLog {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Builds a [`CircuitLog`] by method chaining.
///
/// ```
/// # use blochwalk::{CircuitBuilder, Gate};
/// let log = CircuitBuilder::new()
///     .add_gate(Gate::Hadamard)
///     .add_gate(Gate::PauliZ)
///     .build();
/// assert_eq!(log.labels(), vec!["H", "Z"]);
/// ```
#[derive(Default)]
pub struct CircuitBuilder {
    log: CircuitLog,
}

impl CircuitBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single gate.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.log.append(gate);
        self
    }

    /// Appends multiple gates.
    pub fn add_gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        self.log.extend(gates);
        self
    }

    /// Finalizes the construction process and returns the built log.
    pub fn build(self) -> CircuitLog {
        self.log
    }
}

/// Minimum cell width, e.g. `───H───`.
const GATE_WIDTH: usize = 7;
const H_WIRE: char = '─';

/// Centers `symbol` in a cell of wire, at least [`GATE_WIDTH`] wide with one
/// wire segment on each side.
fn format_gate(symbol: &str) -> String {
    let slen = symbol.chars().count();
    let width = GATE_WIDTH.max(slen + 2);
    let total_dashes = width - slen;
    let pre_dashes = total_dashes / 2;
    let post_dashes = total_dashes - pre_dashes;
    format!(
        "{}{}{}",
        H_WIRE.to_string().repeat(pre_dashes),
        symbol,
        H_WIRE.to_string().repeat(post_dashes)
    )
}

impl fmt::Display for CircuitLog {
    /// Single-wire diagram, read left to right:
    ///
    /// ```text
    /// blochwalk::CircuitLog[2 gates]
    /// q: ───H──────X───
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.gates.len() == 1 { "gate" } else { "gates" };
        writeln!(f, "blochwalk::CircuitLog[{} {}]", self.gates.len(), noun)?;
        let wire: String = if self.gates.is_empty() {
            H_WIRE.to_string().repeat(GATE_WIDTH)
        } else {
            self.gates.iter().map(|g| format_gate(&g.label())).collect()
        };
        writeln!(f, "q: {}", wire)
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for CircuitLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
