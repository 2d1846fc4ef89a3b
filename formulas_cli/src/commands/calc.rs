//! Calculator commands.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use formulas_core::calculators::{compute, CalculatorInput, CalculatorKind, CalculatorOutput};
use formulas_core::settings::EngineSettings;

/// Arguments for the calc command
#[derive(Parser)]
pub struct CalcArgs {
    /// Calculator id (see `formulas calculators`)
    pub calculator: String,

    /// Field value as `name=value`; repeatable
    #[arg(short, long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Start from the calculator's worked example
    #[arg(long)]
    pub example: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim().to_string(), value.to_string())),
        _ => Err(format!("expected FIELD=VALUE, got '{}'", raw)),
    }
}

pub fn list_calculators() {
    for kind in CalculatorKind::ALL {
        println!("{:<18} {}", kind.id(), kind.display_name());
        for field in kind.fields() {
            let optional = if field.required { "" } else { " (optional)" };
            println!("    {:<24} {}{}", field.name, field.label, optional);
        }
    }
}

pub fn run(args: &CalcArgs, settings: &EngineSettings) -> Result<()> {
    let kind = CalculatorKind::from_id(&args.calculator)?;

    let mut input = if args.example { kind.example_input() } else { CalculatorInput::new() };
    for (field, value) in &args.set {
        if !kind.fields().iter().any(|f| f.name == field.as_str()) {
            warn!(calculator = %kind, field = %field, "field is not used by this calculator");
        }
        input.set(field.clone(), value.clone());
    }
    debug!(calculator = %kind, ?input, "running calculator");

    match compute(kind, &input, settings) {
        Ok(output) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_output(kind, &output);
            }
            Ok(())
        }
        Err(e) => {
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            Err(e).with_context(|| format!("{} could not be computed", kind.display_name()))
        }
    }
}

fn print_output(kind: CalculatorKind, output: &CalculatorOutput) {
    println!("═══════════════════════════════════════");
    println!("  {}", kind.display_name().to_uppercase());
    println!("═══════════════════════════════════════");
    for value in &output.values {
        println!("  {:<20} {}", value.field, value.display);
    }
    println!("═══════════════════════════════════════");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("lots=0.25"), Ok(("lots".to_string(), "0.25".to_string())));
        assert_eq!(parse_assignment(" lots =0.25"), Ok(("lots".to_string(), "0.25".to_string())));
        assert_eq!(parse_assignment("lots="), Ok(("lots".to_string(), String::new())));
        assert!(parse_assignment("lots").is_err());
        assert!(parse_assignment("=5").is_err());
    }
}
