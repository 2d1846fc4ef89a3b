//! # Formula Catalog
//!
//! Read-only catalog of trading formulas plus the substring filter used to
//! search it.
//!
//! ## Modules
//!
//! - [`registry`] - Record types, groups and the built-in [`Catalog`]
//! - [`records`] - The built-in record definitions
//! - [`search`] - Searchable text and live filtering

pub mod records;
pub mod registry;
pub mod search;

pub use registry::{generate_catalog_markdown, Catalog, FormulaGroup, FormulaRecord, Variable, CATALOG};
pub use search::{build_searchable, count_label, filter, FilterResult, SearchIndex, SearchIndexEntry};
