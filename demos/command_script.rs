//! Reads a command script (from a file given as the first argument, or a
//! built-in default) and runs it against a fresh session.
//!
//! ```text
//! cargo run --example command_script -- walk.txt
//! ```

use blochwalk::{CommandScript, Session, SessionConfig};
use std::env;
use std::fs;

const DEFAULT_SCRIPT: &str = "\
# equator tour
h
phase 90
phase 90
phase 90
phase 90
# and home again
rot -90 90
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_SCRIPT.to_string(),
    };
    let script = CommandScript::parse(&text)?;

    let config = SessionConfig::from_toml_str("display_precision = 4")?;
    let mut session = Session::with_config(config)?;

    println!("Running {} commands", script.len());
    for (command, snapshot) in script.commands().iter().zip(session.run_script(&script)) {
        println!("\n> {}\n{}", command, snapshot);
    }
    Ok(())
}
