//! # Trading Formulas CLI
//!
//! Terminal front end for `formulas_core`:
//! - Browse and search the formula catalog
//! - Run calculators over `field=value` pairs
//!
//! Everything printed here is educational reference, not trading advice.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, Level};

use formulas_core::settings::EngineSettings;

use commands::{calc, catalog};

/// Trading formulas reference and calculators
#[derive(Parser)]
#[command(name = "formulas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Engine settings file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List formula cards, optionally for one group
    List(catalog::ListArgs),

    /// Show one formula card
    Show(catalog::ShowArgs),

    /// Filter the catalog by a case-insensitive substring
    Search(catalog::SearchArgs),

    /// List available calculators and their fields
    Calculators,

    /// Run a calculator
    Calc(calc::CalcArgs),
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<EngineSettings> {
    let Some(path) = path else {
        return Ok(EngineSettings::default());
    };

    debug!(path = %path.display(), "loading engine settings");
    EngineSettings::load(path).with_context(|| format!("failed to load settings from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let settings = load_settings(cli.config.as_ref())?;

    match cli.command {
        Commands::List(args) => catalog::list(&args)?,
        Commands::Show(args) => catalog::show(&args)?,
        Commands::Search(args) => catalog::search(&args)?,
        Commands::Calculators => calc::list_calculators(),
        Commands::Calc(args) => calc::run(&args, &settings)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_subcommand_parses() {
        let cases: [&[&str]; 7] = [
            &["formulas", "list"],
            &["formulas", "list", "--group", "extras", "--json"],
            &["formulas", "show", "profitfactor"],
            &["formulas", "search", "profit factor"],
            &["formulas", "calculators"],
            &["formulas", "calc", "drawdown", "--set", "peak_equity=1200", "-s", "trough_equity=1020"],
            &["formulas", "-v", "--config", "settings.json", "calc", "margin", "--example", "--json"],
        ];
        for args in cases {
            assert!(Cli::try_parse_from(args).is_ok(), "failed to parse {:?}", args);
        }
        assert!(Cli::try_parse_from(["formulas", "calc", "drawdown", "--set", "peak_equity"]).is_err());
    }

    #[test]
    fn test_commands_run() {
        let settings = EngineSettings::default();

        catalog::search(&catalog::SearchArgs { query: "margin".to_string(), json: true }).unwrap();
        catalog::list(&catalog::ListArgs { group: Some("extras".to_string()), json: false }).unwrap();
        catalog::show(&catalog::ShowArgs { id: "drawdown".to_string(), json: false }).unwrap();
        assert!(catalog::show(&catalog::ShowArgs { id: "no_such_card".to_string(), json: false }).is_err());

        let args = calc::CalcArgs {
            calculator: "reward_risk".to_string(),
            set: vec![("sl_distance".to_string(), "20".to_string())],
            example: true,
            json: false,
        };
        calc::run(&args, &settings).unwrap();

        let args = calc::CalcArgs {
            calculator: "margin".to_string(),
            set: vec![("used_margin".to_string(), "0".to_string())],
            example: true,
            json: true,
        };
        assert!(calc::run(&args, &settings).is_err());
    }
}
