//! Generate FORMULAS.md from the built-in catalog.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-catalog
//! ```
//!
//! The generated file is written to `formulas_core/FORMULAS.md`.

use std::fs;
use std::path::Path;

use formulas_core::catalog::{generate_catalog_markdown, Catalog};

fn main() {
    println!("Generating FORMULAS.md...");

    let catalog = Catalog::builtin();
    let markdown = generate_catalog_markdown(catalog);

    // Relative to workspace root
    let output_path = Path::new("formulas_core/FORMULAS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!(
                "Successfully wrote {} formulas ({} bytes) to {}",
                catalog.len(),
                markdown.len(),
                output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
