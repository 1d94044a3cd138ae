//! Walks a qubit around the Bloch sphere with a fixed sequence of gates,
//! printing the readout a renderer would receive after each step.

use blochwalk::{BlochError, Gate, GateKind, Session};

fn main() -> Result<(), BlochError> {
    println!("--- blochwalk Example: A Walk Around the Bloch Sphere ---");

    for kind in GateKind::ALL {
        println!("  {:<9} {}", kind.to_string(), kind.matrix_text());
    }

    let mut session = Session::new();
    println!("\nInitial state:\n{}", session.snapshot());

    // --- The walk ---
    // 1. Hadamard: |0> -> |+>, a quarter turn down to the equator.
    // 2. Phase 90°: |+> -> |+i>, a quarter turn along the equator.
    // 3. Rotation 90° about x: |+i> -> |0>, back up to the north pole.
    // 4. Pauli X: straight across to |1>.
    let steps = [
        Gate::Hadamard,
        Gate::from_degrees(GateKind::Phase, &[90.0])?,
        Gate::from_degrees(GateKind::Rotation, &[90.0, 0.0])?,
        Gate::PauliX,
    ];

    for gate in steps {
        let snapshot = session.apply_gate(gate);
        println!("\nAfter {}:\n{}", gate, snapshot);
    }

    let counts = session.measure(1024);
    println!("\n{}", counts);

    let snapshot = session.reset();
    println!("After reset:\n{}", snapshot);
    Ok(())
}
