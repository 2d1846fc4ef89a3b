//! # Formula Registry
//!
//! The immutable, ordered list of formula cards. Each record carries its
//! display text, a variable glossary, a worked example and a short rationale.
//!
//! ## Usage
//!
//! ```rust
//! use formulas_core::catalog::{Catalog, FormulaGroup};
//!
//! let catalog = Catalog::builtin();
//! let record = catalog.get("profitfactor").unwrap();
//! assert_eq!(record.group, FormulaGroup::StatisticsAndEdge);
//! println!("{}", record.formula_text);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::records::BUILTIN_RECORDS;
use crate::calculators::CalculatorKind;

// ============================================================================
// Groups
// ============================================================================

/// Sections the catalog is organized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaGroup {
    PnlAndCosts,
    RiskAndSizing,
    StatisticsAndEdge,
    MarginAndLeverage,
    Extras,
}

impl FormulaGroup {
    pub const ALL: [FormulaGroup; 5] = [
        FormulaGroup::PnlAndCosts,
        FormulaGroup::RiskAndSizing,
        FormulaGroup::StatisticsAndEdge,
        FormulaGroup::MarginAndLeverage,
        FormulaGroup::Extras,
    ];

    /// Display name for the group
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaGroup::PnlAndCosts => "PnL & Costs",
            FormulaGroup::RiskAndSizing => "Risk & Position Sizing",
            FormulaGroup::StatisticsAndEdge => "Statistics & Edge",
            FormulaGroup::MarginAndLeverage => "Margin & Leverage",
            FormulaGroup::Extras => "Extras",
        }
    }

    /// Sort order for listings (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            FormulaGroup::PnlAndCosts => 1,
            FormulaGroup::RiskAndSizing => 2,
            FormulaGroup::StatisticsAndEdge => 3,
            FormulaGroup::MarginAndLeverage => 4,
            FormulaGroup::Extras => 5,
        }
    }

    /// Stable identifier, identical to the serde name
    pub fn id(&self) -> &'static str {
        match self {
            FormulaGroup::PnlAndCosts => "pnl_and_costs",
            FormulaGroup::RiskAndSizing => "risk_and_sizing",
            FormulaGroup::StatisticsAndEdge => "statistics_and_edge",
            FormulaGroup::MarginAndLeverage => "margin_and_leverage",
            FormulaGroup::Extras => "extras",
        }
    }

    /// Parse either the id or the display name, ignoring case.
    pub fn parse(text: &str) -> Option<Self> {
        let wanted = text.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.id().eq_ignore_ascii_case(wanted) || g.display_name().eq_ignore_ascii_case(wanted))
    }
}

// ============================================================================
// Records
// ============================================================================

/// One entry in a record's variable glossary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variable {
    /// Symbol as it appears in the formula text (e.g. "Lots", "R:R")
    pub symbol: &'static str,
    pub description: &'static str,
    /// Arabic description
    pub description_localized: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, description_localized: &'static str) -> Self {
        Self {
            symbol,
            description,
            description_localized,
        }
    }
}

/// A formula card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormulaRecord {
    /// Unique, stable key
    pub id: &'static str,
    pub group: FormulaGroup,
    /// Arabic display title
    pub title_localized: &'static str,
    /// English title
    pub title_canonical: &'static str,
    /// Display text only; never evaluated
    pub formula_text: &'static str,
    pub variables: &'static [Variable],
    pub example_text: &'static str,
    pub example_localized: &'static str,
    pub rationale_text: &'static str,
    pub rationale_localized: &'static str,
    /// Refers to a model this crate deliberately does not compute
    pub advanced: bool,
    /// Calculator that evaluates this formula, if any
    pub calculator: Option<CalculatorKind>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered, read-only collection of formula records.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<FormulaRecord>,
}

/// The built-in catalog, constructed on first use.
pub static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(BUILTIN_RECORDS.to_vec()));

impl Catalog {
    pub fn new(records: Vec<FormulaRecord>) -> Self {
        Self { records }
    }

    pub fn builtin() -> &'static Catalog {
        &CATALOG
    }

    pub fn records(&self) -> &[FormulaRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormulaRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.records.iter().map(|r| r.id).collect()
    }

    pub fn get(&self, id: &str) -> Option<&FormulaRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records of one group, in catalog order
    pub fn in_group(&self, group: FormulaGroup) -> Vec<&FormulaRecord> {
        self.records.iter().filter(|r| r.group == group).collect()
    }

    /// Groups that contain at least one record, sorted
    pub fn groups(&self) -> Vec<FormulaGroup> {
        let mut groups: Vec<FormulaGroup> = FormulaGroup::ALL
            .into_iter()
            .filter(|g| self.records.iter().any(|r| r.group == *g))
            .collect();
        groups.sort_by_key(|g| g.sort_order());
        groups
    }

    /// Records evaluated by a given calculator
    pub fn for_calculator(&self, kind: CalculatorKind) -> Vec<&FormulaRecord> {
        self.records.iter().filter(|r| r.calculator == Some(kind)).collect()
    }
}

// ============================================================================
// Markdown Generation for FORMULAS.md
// ============================================================================

/// Generate a FORMULAS.md reference listing every record by group.
pub fn generate_catalog_markdown(catalog: &Catalog) -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Trading Formulas Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-catalog`

Educational reference only. Nothing here is trading advice.

---

"#,
    );

    for group in catalog.groups() {
        output.push_str(&format!("## {}\n\n", group.display_name()));

        for record in catalog.in_group(group) {
            output.push_str(&format!("### {} ({})\n\n", record.title_canonical, record.title_localized));
            output.push_str(&format!("**Formula:** `{}`\n\n", record.formula_text));

            if !record.variables.is_empty() {
                output.push_str("| Symbol | Description | الوصف |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in record.variables {
                    output.push_str(&format!(
                        "| `{}` | {} | {} |\n",
                        var.symbol, var.description, var.description_localized
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Example:** {}\n\n", record.example_text));
            output.push_str(&format!("> {}\n\n", record.example_localized));
            output.push_str(&format!("**Why it matters:** {}\n\n", record.rationale_text));
            output.push_str(&format!("> {}\n\n", record.rationale_localized));

            if record.advanced {
                output.push_str("> Advanced model not implemented; descriptive card only.\n\n");
            }
            if let Some(kind) = record.calculator {
                output.push_str(&format!("**Calculator:** `{}`\n\n", kind.id()));
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Groups:** {}\n",
        catalog.len(),
        catalog.groups().len()
    ));

    output
}
