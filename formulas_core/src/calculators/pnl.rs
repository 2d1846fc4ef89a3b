//! # PnL & Costs
//!
//! Per-trade profit and loss in account currency, and the move a trade needs
//! before it covers its own costs.
//!
//! ## Formulas
//!
//! ```text
//! GrossPnL       = TicksMoved × TickValue@1.00 × Lots
//! SpreadCost     = SpreadTicks × TickValue@1.00 × Lots
//! CommissionCost = CommissionPerLotRT × Lots
//! NetPnL         = GrossPnL − SpreadCost − CommissionCost
//! BreakevenTicks = SpreadTicks + CommissionCost / (TickValue@1.00 × Lots)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use formulas_core::calculators::pnl::{calculate_gross_net, GrossNetPnlInput};
//!
//! let input = GrossNetPnlInput {
//!     ticks_moved: 50.0,
//!     tick_value: 0.10,
//!     lots: 0.20,
//!     spread_ticks: 18.0,
//!     commission_per_lot_rt: 7.0,
//! };
//! let result = calculate_gross_net(&input).unwrap();
//! assert!((result.gross_pnl - 1.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::{checked_div, require_finite, require_finite_result, require_non_negative, require_non_zero, require_positive};
use super::{CalculatorInput, CalculatorKind, CalculatorOutput, FieldSpec};
use crate::errors::CalcResult;
use crate::numeric::{format_money, format_number};
use crate::settings::EngineSettings;

pub const GROSS_NET_PNL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("ticks_moved", "Ticks moved"),
    FieldSpec::required("tick_value", "Tick value @ 1.00 lot ($)"),
    FieldSpec::required("lots", "Lots"),
    FieldSpec::required("spread_ticks", "Spread (ticks)"),
    FieldSpec::required("commission_per_lot_rt", "Commission per lot, round turn ($)"),
];

pub const BREAKEVEN_MOVE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("spread_ticks", "Spread (ticks)"),
    FieldSpec::required("commission_cost", "Commission for the trade ($)"),
    FieldSpec::required("tick_value", "Tick value @ 1.00 lot ($)"),
    FieldSpec::required("lots", "Lots"),
];

// ============================================================================
// Gross / Net PnL
// ============================================================================

/// Inputs for the gross/net PnL calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrossNetPnlInput {
    /// Ticks the price moved; negative for a move against the trade
    pub ticks_moved: f64,
    pub tick_value: f64,
    pub lots: f64,
    pub spread_ticks: f64,
    pub commission_per_lot_rt: f64,
}

impl GrossNetPnlInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            ticks_moved: input.require("ticks_moved")?,
            tick_value: input.require("tick_value")?,
            lots: input.require("lots")?,
            spread_ticks: input.require("spread_ticks")?,
            commission_per_lot_rt: input.require("commission_per_lot_rt")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_finite(&[
            ("ticks_moved", self.ticks_moved),
            ("tick_value", self.tick_value),
            ("lots", self.lots),
            ("spread_ticks", self.spread_ticks),
            ("commission_per_lot_rt", self.commission_per_lot_rt),
        ])?;
        require_positive("lots", self.lots)?;
        require_non_negative("tick_value", self.tick_value)
    }
}

/// Gross result, cost breakdown and net result, all in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrossNetPnlResult {
    pub gross_pnl: f64,
    pub spread_cost: f64,
    pub commission_cost: f64,
    pub net_pnl: f64,
}

impl GrossNetPnlResult {
    pub fn to_output(&self) -> CalculatorOutput {
        CalculatorOutput::new(CalculatorKind::GrossNetPnl)
            .push("gross_pnl", self.gross_pnl, format_money(self.gross_pnl))
            .push("spread_cost", self.spread_cost, format_money(self.spread_cost))
            .push("commission_cost", self.commission_cost, format_money(self.commission_cost))
            .push("net_pnl", self.net_pnl, format_money(self.net_pnl))
    }
}

pub fn calculate_gross_net(input: &GrossNetPnlInput) -> CalcResult<GrossNetPnlResult> {
    input.validate()?;

    let gross_pnl = require_finite_result("ticks_moved", input.ticks_moved * input.tick_value * input.lots)?;
    let spread_cost = require_finite_result("spread_ticks", input.spread_ticks * input.tick_value * input.lots)?;
    let commission_cost = require_finite_result("commission_per_lot_rt", input.commission_per_lot_rt * input.lots)?;
    let net_pnl = require_finite_result("ticks_moved", gross_pnl - spread_cost - commission_cost)?;

    Ok(GrossNetPnlResult {
        gross_pnl,
        spread_cost,
        commission_cost,
        net_pnl,
    })
}

// ============================================================================
// Breakeven move
// ============================================================================

/// Inputs for the breakeven-move calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakevenMoveInput {
    pub spread_ticks: f64,
    /// Total commission for this trade in dollars (not per lot)
    pub commission_cost: f64,
    pub tick_value: f64,
    pub lots: f64,
}

impl BreakevenMoveInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            spread_ticks: input.require("spread_ticks")?,
            commission_cost: input.require("commission_cost")?,
            tick_value: input.require("tick_value")?,
            lots: input.require("lots")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_finite(&[
            ("spread_ticks", self.spread_ticks),
            ("commission_cost", self.commission_cost),
            ("tick_value", self.tick_value),
            ("lots", self.lots),
        ])?;
        require_non_zero(&["tick_value", "lots"], self.tick_value * self.lots)
    }
}

/// Ticks the price must travel before the trade is net positive.
pub fn calculate_breakeven_move(input: &BreakevenMoveInput) -> CalcResult<f64> {
    input.validate()?;
    let commission_ticks = checked_div(
        input.commission_cost,
        input.tick_value * input.lots,
        "commission_cost",
        &["tick_value", "lots"],
    )?;
    require_finite_result("spread_ticks", input.spread_ticks + commission_ticks)
}

pub(crate) fn breakeven_move_output(ticks: f64, settings: &EngineSettings) -> CalculatorOutput {
    CalculatorOutput::new(CalculatorKind::BreakevenMove).push(
        "breakeven_ticks",
        ticks,
        format_number(ticks, settings.number_digits),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::compute;
    use crate::errors::{CalcError, ErrorKind};

    fn example() -> GrossNetPnlInput {
        GrossNetPnlInput {
            ticks_moved: 50.0,
            tick_value: 0.10,
            lots: 0.20,
            spread_ticks: 18.0,
            commission_per_lot_rt: 7.0,
        }
    }

    #[test]
    fn test_gross_pnl_scenario() {
        let result = calculate_gross_net(&example()).unwrap();
        // 50 × 0.10 × 0.20 = 1.00
        assert!((result.gross_pnl - 1.0).abs() < 1e-9);
        assert_eq!(result.to_output().display("gross_pnl"), Some("$1.00"));
    }

    #[test]
    fn test_spread_cost_scenario() {
        let input = GrossNetPnlInput { lots: 0.30, ..example() };
        let result = calculate_gross_net(&input).unwrap();
        // 18 × 0.10 × 0.30 = 0.54
        assert!((result.spread_cost - 0.54).abs() < 1e-9);
        assert_eq!(result.to_output().display("spread_cost"), Some("$0.54"));
    }

    #[test]
    fn test_net_pnl_is_gross_minus_costs() {
        let result = calculate_gross_net(&example()).unwrap();
        assert_eq!(result.net_pnl, result.gross_pnl - result.spread_cost - result.commission_cost);
        // 1.00 − 0.36 − 1.40
        assert_eq!(result.to_output().display("net_pnl"), Some("-$0.76"));
    }

    #[test]
    fn test_losing_trade() {
        let input = GrossNetPnlInput { ticks_moved: -30.0, ..example() };
        let result = calculate_gross_net(&input).unwrap();
        assert!((result.gross_pnl + 0.6).abs() < 1e-9);
        assert_eq!(result.to_output().display("gross_pnl"), Some("-$0.60"));
    }

    #[test]
    fn test_lots_must_be_positive() {
        let err = calculate_gross_net(&GrossNetPnlInput { lots: 0.0, ..example() }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.fields(), vec!["lots"]);
    }

    #[test]
    fn test_tick_value_cannot_be_negative() {
        let err = calculate_gross_net(&GrossNetPnlInput { tick_value: -0.1, ..example() }).unwrap_err();
        assert_eq!(err.fields(), vec!["tick_value"]);
        assert!(calculate_gross_net(&GrossNetPnlInput { tick_value: 0.0, ..example() }).is_ok());
    }

    #[test]
    fn test_raw_fields_missing() {
        let input = CalculatorKind::GrossNetPnl.example_input().with("spread_ticks", "  ");
        let err = compute(CalculatorKind::GrossNetPnl, &input, &EngineSettings::default()).unwrap_err();
        assert_eq!(err, CalcError::missing_field("spread_ticks"));
    }

    #[test]
    fn test_breakeven_move() {
        let input = BreakevenMoveInput {
            spread_ticks: 16.0,
            commission_cost: 1.75,
            tick_value: 0.10,
            lots: 0.25,
        };
        // 16 + 1.75 / 0.025 = 86
        let ticks = calculate_breakeven_move(&input).unwrap();
        assert!((ticks - 86.0).abs() < 1e-9);
        let output = breakeven_move_output(ticks, &EngineSettings::default());
        assert_eq!(output.display("breakeven_ticks"), Some("86.00"));
    }

    #[test]
    fn test_breakeven_zero_denominator() {
        let input = BreakevenMoveInput {
            spread_ticks: 16.0,
            commission_cost: 1.75,
            tick_value: 0.0,
            lots: 0.25,
        };
        let err = calculate_breakeven_move(&input).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero(["tick_value", "lots"]));
    }

    #[test]
    fn test_overflowing_pnl_rejected() {
        let input = CalculatorKind::GrossNetPnl
            .example_input()
            .with("ticks_moved", "1e300")
            .with("tick_value", "1e10");
        let err = compute(CalculatorKind::GrossNetPnl, &input, &EngineSettings::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.fields(), vec!["ticks_moved"]);
    }

    #[test]
    fn test_breakeven_subnormal_denominator() {
        let input = BreakevenMoveInput {
            spread_ticks: 16.0,
            commission_cost: 1.75,
            tick_value: 1e-160,
            lots: 1e-160,
        };
        let err = calculate_breakeven_move(&input).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero(["tick_value", "lots"]));
    }
}
