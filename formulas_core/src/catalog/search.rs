//! # Catalog Search
//!
//! Live filtering over the catalog. Each record gets one lower-cased
//! searchable string built from every textual field; a query matches when it
//! appears in that string as a contiguous substring. No tokenizing, no fuzzy
//! matching, no relevance ranking: matches come back in catalog order.
//!
//! ## Example
//!
//! ```rust
//! use formulas_core::catalog::{count_label, Catalog, SearchIndex};
//!
//! let index = SearchIndex::new(Catalog::builtin());
//! let result = index.filter("PROFIT FACTOR");
//! assert!(result.ids.contains(&"profitfactor"));
//! println!("{}", count_label(result.total, result.shown));
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;

use super::registry::{Catalog, FormulaRecord, CATALOG};

/// Separator between fields in the searchable text.
const FIELD_SEPARATOR: &str = " | ";

/// Derived searchable text for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchIndexEntry {
    pub record_id: &'static str,
    pub searchable_text: String,
}

/// Outcome of a filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterResult {
    /// Matching record ids in catalog order
    pub ids: Vec<&'static str>,
    pub shown: usize,
    pub total: usize,
}

impl FilterResult {
    pub fn label(&self) -> String {
        count_label(self.total, self.shown)
    }
}

/// Concatenate every textual field of `record` and lower-case the result.
///
/// Field order: localized title, canonical title, group, formula, each
/// `"symbol description"` pair in both languages, example, rationale. The
/// example and rationale carry the English text followed by the Arabic.
pub fn build_searchable(record: &FormulaRecord) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(8 + 2 * record.variables.len());
    parts.push(record.title_localized.to_string());
    parts.push(record.title_canonical.to_string());
    parts.push(record.group.display_name().to_string());
    parts.push(record.formula_text.to_string());
    for var in record.variables {
        parts.push(format!("{} {}", var.symbol, var.description));
        parts.push(format!("{} {}", var.symbol, var.description_localized));
    }
    parts.push(record.example_text.to_string());
    parts.push(record.example_localized.to_string());
    parts.push(record.rationale_text.to_string());
    parts.push(record.rationale_localized.to_string());

    parts.join(FIELD_SEPARATOR).to_lowercase()
}

/// Normalize a raw query the same way the searchable text is normalized.
fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Searchable text for every record of a catalog, computed once.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<SearchIndexEntry>,
}

/// Index over the built-in catalog.
pub static BUILTIN_INDEX: Lazy<SearchIndex> = Lazy::new(|| SearchIndex::new(&CATALOG));

impl SearchIndex {
    pub fn new(catalog: &Catalog) -> Self {
        let entries = catalog
            .iter()
            .map(|record| SearchIndexEntry {
                record_id: record.id,
                searchable_text: build_searchable(record),
            })
            .collect();
        Self { entries }
    }

    pub fn builtin() -> &'static SearchIndex {
        &BUILTIN_INDEX
    }

    pub fn entries(&self) -> &[SearchIndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records whose searchable text contains the trimmed, case-folded query.
    /// An empty query matches everything.
    pub fn filter(&self, query: &str) -> FilterResult {
        let needle = normalize_query(query);
        let ids: Vec<&'static str> = self
            .entries
            .iter()
            .filter(|entry| needle.is_empty() || entry.searchable_text.contains(&needle))
            .map(|entry| entry.record_id)
            .collect();

        FilterResult {
            shown: ids.len(),
            total: self.entries.len(),
            ids,
        }
    }
}

/// One-shot filter without keeping an index around.
pub fn filter(catalog: &Catalog, query: &str) -> FilterResult {
    SearchIndex::new(catalog).filter(query)
}

/// `"shown / total"`
pub fn count_label(total: usize, shown: usize) -> String {
    format!("{} / {}", shown, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searchable_contains_all_fields() {
        let record = Catalog::builtin().get("drawdown").unwrap();
        let text = build_searchable(record);

        assert!(text.starts_with("نسبة السحب (drawdown) | drawdown % | statistics & edge | "));
        assert!(text.contains("peakequity highest equity reached"));
        assert!(text.contains("peak=1200, trough=1020"));
        assert!(text.contains("worst historical decline"));
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn test_searchable_is_deterministic() {
        let record = Catalog::builtin().get("margin").unwrap();
        assert_eq!(build_searchable(record), build_searchable(record));
    }

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let catalog = Catalog::builtin();
        for query in ["", "   ", "\t"] {
            let result = filter(catalog, query);
            assert_eq!(result.ids, catalog.ids());
            assert_eq!(result.shown, catalog.len());
            assert_eq!(result.total, catalog.len());
        }
    }

    #[test]
    fn test_case_insensitive() {
        let index = SearchIndex::builtin();
        let lower = index.filter("profit factor");
        let upper = index.filter("PROFIT FACTOR");
        assert_eq!(lower, upper);
        assert!(lower.ids.contains(&"profitfactor"));
    }

    #[test]
    fn test_query_is_trimmed() {
        let index = SearchIndex::builtin();
        assert_eq!(index.filter("  margin level  "), index.filter("margin level"));
    }

    #[test]
    fn test_substring_not_tokenized() {
        let index = SearchIndex::builtin();
        // Words out of order are not a contiguous substring
        assert_eq!(index.filter("factor profit").shown, 0);
        assert_eq!(index.filter("zzzz-no-such-formula").ids, Vec::<&str>::new());
    }

    #[test]
    fn test_results_in_catalog_order() {
        let result = SearchIndex::builtin().filter("lots");
        let catalog_ids = Catalog::builtin().ids();
        let positions: Vec<usize> = result
            .ids
            .iter()
            .map(|id| catalog_ids.iter().position(|c| c == id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert!(result.shown > 3);
    }

    #[test]
    fn test_localized_title_search() {
        let result = SearchIndex::builtin().filter("مستوى المارجن");
        assert_eq!(result.ids, vec!["margin_level"]);
    }

    #[test]
    fn test_localized_body_search() {
        let index = SearchIndex::builtin();
        assert_eq!(index.filter("عدد الصفقات").ids, vec!["winrate", "avgwin", "avgloss"]);

        // Localized rationale of the margin card
        let record = Catalog::builtin().get("margin").unwrap();
        let hits = index.filter(record.rationale_localized);
        assert!(hits.ids.contains(&"margin"));
    }

    #[test]
    fn test_group_name_search() {
        let result = SearchIndex::builtin().filter("margin & leverage");
        assert_eq!(result.ids, vec!["margin", "margin_level"]);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(24, 3), "3 / 24");
        assert_eq!(count_label(0, 0), "0 / 0");

        let result = SearchIndex::builtin().filter("");
        assert_eq!(result.label(), "24 / 24");
    }
}
