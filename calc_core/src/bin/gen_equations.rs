//! Write the equations reference from the registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations                 # calc_core/src/equations/EQUATIONS.md
//! cargo run --bin gen-equations -- docs/eq.md   # custom path
//! ```

use std::path::PathBuf;

use calc_core::equations::{generate_equations_markdown, Equation, ALL_EQUATIONS};
use calc_core::file_io::save_report;

const DEFAULT_OUTPUT: &str = "calc_core/src/equations/EQUATIONS.md";

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let markdown = generate_equations_markdown();

    if let Err(e) = save_report(&markdown, &output_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!(
        "Wrote {} equations in {} categories to {}",
        ALL_EQUATIONS.len(),
        Equation::all_categories().len(),
        output_path.display()
    );
}
