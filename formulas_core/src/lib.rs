//! # formulas_core - Trading Formulas Engine
//!
//! `formulas_core` holds the educational trading-formulas reference: a static
//! catalog of formula cards, a case-insensitive substring search over it, and
//! a set of calculators that turn raw user-typed text into formatted results.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Text at the edge**: Calculators accept raw field text and never panic on bad input
//! - **Rich Errors**: Structured error types naming the offending fields
//! - **Read-only catalog**: Built once, never mutated
//!
//! ## Quick Start
//!
//! ```rust
//! use formulas_core::calculators::{compute, CalculatorKind};
//! use formulas_core::catalog::SearchIndex;
//! use formulas_core::settings::EngineSettings;
//!
//! let hits = SearchIndex::builtin().filter("margin level");
//! assert_eq!(hits.ids, vec!["margin_level"]);
//!
//! let kind = CalculatorKind::RewardRisk;
//! let output = compute(kind, &kind.example_input(), &EngineSettings::default()).unwrap();
//! assert_eq!(output.display("rr"), Some("2.00"));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Formula records, groups, search
//! - [`calculators`] - All calculators and the text-level [`calculators::compute`] entry point
//! - [`numeric`] - Parsing, rounding and display formatting
//! - [`settings`] - Engine settings loaded from JSON
//! - [`errors`] - Structured error types

pub mod calculators;
pub mod catalog;
pub mod errors;
pub mod numeric;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculators::{compute, CalculatorInput, CalculatorKind, CalculatorOutput};
pub use catalog::{Catalog, FormulaGroup, FormulaRecord, SearchIndex};
pub use errors::{CalcError, CalcResult, ErrorKind};
pub use settings::EngineSettings;
