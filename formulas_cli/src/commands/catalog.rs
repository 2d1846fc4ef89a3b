//! Catalog commands: list, show and search formula cards.

use anyhow::{bail, Result};
use clap::Parser;
use tracing::debug;

use formulas_core::catalog::{Catalog, FormulaGroup, FormulaRecord, SearchIndex};

/// Arguments for the list command
#[derive(Parser)]
pub struct ListArgs {
    /// Only this group (id or display name, e.g. "risk_and_sizing")
    #[arg(short, long)]
    pub group: Option<String>,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show command
#[derive(Parser)]
pub struct ShowArgs {
    /// Record id (e.g. "profitfactor")
    pub id: String,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the search command
#[derive(Parser)]
pub struct SearchArgs {
    /// Substring to look for; empty matches everything
    #[arg(default_value = "")]
    pub query: String,

    /// Print matching records as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn list(args: &ListArgs) -> Result<()> {
    let catalog = Catalog::builtin();

    let groups = match &args.group {
        Some(name) => match FormulaGroup::parse(name) {
            Some(group) => vec![group],
            None => {
                let known: Vec<&str> = FormulaGroup::ALL.iter().map(|g| g.id()).collect();
                bail!("unknown group '{}' (expected one of: {})", name, known.join(", "));
            }
        },
        None => catalog.groups(),
    };

    if args.json {
        let records: Vec<&FormulaRecord> = groups.iter().flat_map(|g| catalog.in_group(*g)).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for group in groups {
        println!("{}", group.display_name());
        println!("{}", "-".repeat(group.display_name().chars().count()));
        for record in catalog.in_group(group) {
            print_summary_line(record);
        }
        println!();
    }

    Ok(())
}

pub fn show(args: &ShowArgs) -> Result<()> {
    let Some(record) = Catalog::builtin().get(args.id.trim()) else {
        let hits = SearchIndex::builtin().filter(&args.id);
        if hits.ids.is_empty() {
            bail!("no formula with id '{}'", args.id);
        }
        bail!("no formula with id '{}'; did you mean: {}", args.id, hits.ids.join(", "));
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print_card(record);
    }
    Ok(())
}

pub fn search(args: &SearchArgs) -> Result<()> {
    let index = SearchIndex::builtin();
    let result = index.filter(&args.query);
    debug!(query = %args.query, shown = result.shown, total = result.total, "catalog filtered");

    let catalog = Catalog::builtin();
    let records: Vec<&FormulaRecord> = result.ids.iter().filter_map(|id| catalog.get(id)).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No matching formulas.");
    }
    for record in records {
        print_summary_line(record);
    }
    println!();
    println!("Showing {}", result.label());
    Ok(())
}

fn print_summary_line(record: &FormulaRecord) {
    let marker = if record.advanced { " [advanced]" } else { "" };
    println!("  {:<18} {}{}", record.id, record.title_canonical, marker);
}

fn print_card(record: &FormulaRecord) {
    println!("═══════════════════════════════════════");
    println!("  {}", record.title_canonical);
    println!("  {}", record.title_localized);
    println!("═══════════════════════════════════════");
    println!();
    println!("Group:   {}", record.group.display_name());
    println!("Formula: {}", record.formula_text);
    println!();
    println!("Variables:");
    for var in record.variables {
        println!("  {:<16} {}", var.symbol, var.description);
        println!("  {:<16} {}", "", var.description_localized);
    }
    println!();
    println!("Example: {}", record.example_text);
    println!("         {}", record.example_localized);
    println!("Why:     {}", record.rationale_text);
    println!("         {}", record.rationale_localized);
    if record.advanced {
        println!();
        println!("Advanced model; no calculator is provided.");
    }
    if let Some(kind) = record.calculator {
        println!();
        println!("Try it:  formulas calc {} --example", kind.id());
    }
}
