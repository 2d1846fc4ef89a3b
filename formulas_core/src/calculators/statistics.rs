//! # Statistics & Edge
//!
//! Aggregate performance figures over a closed-trade history, and peak-to-
//! trough drawdown.
//!
//! ```text
//! WinRate        = Wins / TotalTrades
//! LossRate       = 1 − WinRate
//! AvgWin         = TotalProfit / Wins
//! AvgLoss        = |TotalLoss| / Losses
//! ProfitFactor   = TotalProfit / |TotalLoss|
//! Expectancy($)  = WinRate × AvgWin − LossRate × AvgLoss
//! Expectancy(R)  = Expectancy($) / AvgLoss          (1R = average loss)
//! Drawdown%      = (Peak − Trough) / Peak × 100
//! ```
//!
//! Trade counts must be whole numbers. A zero count or a zero total loss makes
//! one of the averages undefined and is reported as division by zero rather
//! than shown as infinity.

use serde::{Deserialize, Serialize};

use super::{checked_div, require_count, require_finite, require_finite_result, require_non_negative, require_non_zero, require_positive};
use super::{CalculatorInput, CalculatorKind, CalculatorOutput, FieldSpec};
use crate::errors::{CalcError, CalcResult};
use crate::numeric::{format_money, format_number, format_percent};
use crate::settings::EngineSettings;

pub const WIN_RATE_STATS_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("wins", "Winning trades"),
    FieldSpec::required("total_trades", "Total trades"),
    FieldSpec::required("total_profit", "Total profit ($)"),
    FieldSpec::required("total_loss", "Total loss ($, absolute)"),
    FieldSpec::required("losses", "Losing trades"),
];

pub const DRAWDOWN_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("peak_equity", "Peak equity ($)"),
    FieldSpec::required("trough_equity", "Trough equity ($)"),
];

// ============================================================================
// Win-rate suite
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinRateStatsInput {
    pub wins: f64,
    pub total_trades: f64,
    pub total_profit: f64,
    /// Sum of losing trades; sign is ignored
    pub total_loss: f64,
    pub losses: f64,
}

impl WinRateStatsInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            wins: input.require("wins")?,
            total_trades: input.require("total_trades")?,
            total_profit: input.require("total_profit")?,
            total_loss: input.require("total_loss")?,
            losses: input.require("losses")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_finite(&[
            ("wins", self.wins),
            ("total_trades", self.total_trades),
            ("total_profit", self.total_profit),
            ("total_loss", self.total_loss),
            ("losses", self.losses),
        ])?;
        require_count("wins", self.wins)?;
        require_count("total_trades", self.total_trades)?;
        require_count("losses", self.losses)?;
        if self.wins > self.total_trades {
            return Err(CalcError::out_of_range(
                "wins",
                self.wins.to_string(),
                "Wins cannot exceed total trades",
            ));
        }
        if self.wins + self.losses > self.total_trades {
            return Err(CalcError::out_of_range(
                "losses",
                self.losses.to_string(),
                "Wins plus losses cannot exceed total trades",
            ));
        }
        require_non_negative("total_profit", self.total_profit)?;

        require_non_zero(&["total_trades"], self.total_trades)?;
        require_non_zero(&["wins"], self.wins)?;
        require_non_zero(&["losses"], self.losses)?;
        require_non_zero(&["total_loss"], self.total_loss)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinRateStatsResult {
    /// Fraction in 0..1
    pub win_rate: f64,
    /// Fraction in 0..1, always `1 − win_rate`
    pub loss_rate: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub profit_factor: f64,
    pub expectancy_usd: f64,
    pub expectancy_r: f64,
}

impl WinRateStatsResult {
    pub fn to_output(&self, settings: &EngineSettings) -> CalculatorOutput {
        let digits = settings.number_digits;
        CalculatorOutput::new(CalculatorKind::WinRateStats)
            .push("win_rate", self.win_rate, format_percent(self.win_rate, digits))
            .push("loss_rate", self.loss_rate, format_percent(self.loss_rate, digits))
            .push("avg_win", self.avg_win, format_money(self.avg_win))
            .push("avg_loss", self.avg_loss, format_money(self.avg_loss))
            .push("profit_factor", self.profit_factor, format_number(self.profit_factor, digits))
            .push("expectancy_usd", self.expectancy_usd, format_money(self.expectancy_usd))
            .push("expectancy_r", self.expectancy_r, format_number(self.expectancy_r, digits))
    }
}

/// `WinRate × AvgWin − LossRate × AvgLoss`, in whatever unit the averages use.
pub fn expectancy(win_rate: f64, avg_win: f64, loss_rate: f64, avg_loss: f64) -> f64 {
    win_rate * avg_win - loss_rate * avg_loss
}

pub fn calculate_win_rate_stats(input: &WinRateStatsInput) -> CalcResult<WinRateStatsResult> {
    input.validate()?;

    let total_loss = input.total_loss.abs();
    let win_rate = input.wins / input.total_trades;
    let loss_rate = 1.0 - win_rate;
    let avg_win = input.total_profit / input.wins;
    let avg_loss = total_loss / input.losses;
    let expectancy_usd = expectancy(win_rate, avg_win, loss_rate, avg_loss);

    Ok(WinRateStatsResult {
        win_rate,
        loss_rate,
        avg_win,
        avg_loss,
        profit_factor: checked_div(input.total_profit, total_loss, "total_profit", &["total_loss"])?,
        expectancy_usd,
        expectancy_r: checked_div(expectancy_usd, avg_loss, "total_profit", &["total_loss", "losses"])?,
    })
}

// ============================================================================
// Drawdown
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownInput {
    pub peak_equity: f64,
    pub trough_equity: f64,
}

impl DrawdownInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            peak_equity: input.require("peak_equity")?,
            trough_equity: input.require("trough_equity")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_finite(&[("peak_equity", self.peak_equity), ("trough_equity", self.trough_equity)])?;
        require_positive("peak_equity", self.peak_equity)?;
        if self.trough_equity > self.peak_equity {
            return Err(CalcError::out_of_range(
                "trough_equity",
                self.trough_equity.to_string(),
                "Trough exceeds peak",
            ));
        }
        Ok(())
    }
}

/// Decline from peak as a percentage (15.0 means 15%).
pub fn calculate_drawdown(input: &DrawdownInput) -> CalcResult<f64> {
    input.validate()?;
    let decline = require_finite_result("trough_equity", input.peak_equity - input.trough_equity)?;
    let fraction = checked_div(decline, input.peak_equity, "trough_equity", &["peak_equity"])?;
    require_finite_result("trough_equity", fraction * 100.0)
}

pub(crate) fn drawdown_output(pct: f64, settings: &EngineSettings) -> CalculatorOutput {
    CalculatorOutput::new(CalculatorKind::Drawdown).push(
        "drawdown_pct",
        pct,
        format_number(pct, settings.number_digits),
    )
}
