//! Generate EQUATIONS.md from the equation registry.
//!
//! This binary generates the equations reference documentation from the
//! centralized equation registry in frac_core.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations
//! ```
//!
//! The generated file is written to `frac_core/EQUATIONS.md`.

use std::fs;
use std::path::Path;

use frac_core::equations::generate_equations_markdown;

fn main() {
    println!("Generating EQUATIONS.md...");

    let markdown = generate_equations_markdown();

    // Relative to the workspace root
    let output_path = Path::new("frac_core/EQUATIONS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
