//! # Risk & Position Sizing
//!
//! ```text
//! Risk($)           = Balance × Risk% / 100
//! Lots              = Risk($) / (StopTicks × TickValue@1.00)
//! R:R               = TPDistance / SLDistance
//! Breakeven WinRate = 1 / (1 + R:R)
//! MaxLoss($)        = Balance × Loss% / 100
//! ```
//!
//! Percentage inputs are capped by [`EngineSettings`]; the default caps are
//! 100%.

use serde::{Deserialize, Serialize};

use super::{checked_div, require_finite, require_finite_result, require_non_negative, require_non_zero, require_percent, require_positive};
use super::{CalculatorInput, CalculatorKind, CalculatorOutput, FieldSpec};
use crate::errors::CalcResult;
use crate::numeric::{format_money, format_number, format_percent, round_to_step};
use crate::settings::EngineSettings;

pub const RISK_SIZING_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("balance", "Account balance ($)"),
    FieldSpec::required("risk_pct", "Risk per trade (%)"),
    FieldSpec::required("stop_ticks", "Stop loss (ticks)"),
    FieldSpec::required("tick_value", "Tick value @ 1.00 lot ($)"),
    FieldSpec::optional("lot_step", "Broker lot step (e.g. 0.01)"),
];

pub const REWARD_RISK_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("tp_distance", "Take-profit distance"),
    FieldSpec::required("sl_distance", "Stop-loss distance"),
];

pub const MAX_LOSS_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("balance", "Account balance ($)"),
    FieldSpec::required("loss_pct", "Loss limit (%)"),
];

// ============================================================================
// Risk $ / Lots from risk
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSizingInput {
    pub balance: f64,
    /// Percent of balance, e.g. `1.0` for 1%
    pub risk_pct: f64,
    pub stop_ticks: f64,
    pub tick_value: f64,
    /// Lot increment to round to; `NaN` or non-positive means no rounding
    pub lot_step: f64,
}

impl RiskSizingInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            balance: input.require("balance")?,
            risk_pct: input.require("risk_pct")?,
            stop_ticks: input.require("stop_ticks")?,
            tick_value: input.require("tick_value")?,
            lot_step: input.optional("lot_step"),
        })
    }

    pub fn validate(&self, settings: &EngineSettings) -> CalcResult<()> {
        require_finite(&[
            ("balance", self.balance),
            ("risk_pct", self.risk_pct),
            ("stop_ticks", self.stop_ticks),
            ("tick_value", self.tick_value),
        ])?;
        require_non_negative("balance", self.balance)?;
        require_percent("risk_pct", self.risk_pct, settings.max_risk_pct)?;
        require_non_zero(&["stop_ticks", "tick_value"], self.stop_ticks * self.tick_value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSizingResult {
    pub risk_usd: f64,
    /// Position size, rounded to the lot step when one was given
    pub lots: f64,
}

impl RiskSizingResult {
    pub fn to_output(&self, settings: &EngineSettings) -> CalculatorOutput {
        CalculatorOutput::new(CalculatorKind::RiskSizing)
            .push("risk_usd", self.risk_usd, format_money(self.risk_usd))
            .push("lots", self.lots, format_number(self.lots, settings.lot_digits))
    }
}

pub fn calculate_risk_sizing(input: &RiskSizingInput, settings: &EngineSettings) -> CalcResult<RiskSizingResult> {
    input.validate(settings)?;

    let risk_usd = require_finite_result("balance", input.balance * input.risk_pct / 100.0)?;
    let lots = checked_div(risk_usd, input.stop_ticks * input.tick_value, "balance", &["stop_ticks", "tick_value"])?;

    Ok(RiskSizingResult {
        risk_usd,
        lots: require_finite_result("lot_step", round_to_step(lots, input.lot_step))?,
    })
}

// ============================================================================
// R:R / Breakeven win rate
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardRiskInput {
    pub tp_distance: f64,
    pub sl_distance: f64,
}

impl RewardRiskInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            tp_distance: input.require("tp_distance")?,
            sl_distance: input.require("sl_distance")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_finite(&[("tp_distance", self.tp_distance), ("sl_distance", self.sl_distance)])?;
        require_positive("sl_distance", self.sl_distance)?;
        require_non_negative("tp_distance", self.tp_distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardRiskResult {
    pub rr: f64,
    /// Win rate (0..1) at which the trade series breaks even, costs ignored
    pub breakeven_win_rate: f64,
}

impl RewardRiskResult {
    pub fn to_output(&self, settings: &EngineSettings) -> CalculatorOutput {
        CalculatorOutput::new(CalculatorKind::RewardRisk)
            .push("rr", self.rr, format_number(self.rr, settings.number_digits))
            .push(
                "breakeven_win_rate",
                self.breakeven_win_rate,
                format_percent(self.breakeven_win_rate, settings.number_digits),
            )
    }
}

/// `1 / (1 + rr)`; 0.5 at 1:1.
pub fn breakeven_win_rate(rr: f64) -> f64 {
    1.0 / (1.0 + rr)
}

pub fn calculate_reward_risk(input: &RewardRiskInput) -> CalcResult<RewardRiskResult> {
    input.validate()?;

    let rr = checked_div(input.tp_distance, input.sl_distance, "tp_distance", &["sl_distance"])?;
    Ok(RewardRiskResult {
        rr,
        breakeven_win_rate: breakeven_win_rate(rr),
    })
}

// ============================================================================
// Max daily / weekly loss
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxLossInput {
    pub balance: f64,
    pub loss_pct: f64,
}

impl MaxLossInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            balance: input.require("balance")?,
            loss_pct: input.require("loss_pct")?,
        })
    }

    pub fn validate(&self, settings: &EngineSettings) -> CalcResult<()> {
        require_finite(&[("balance", self.balance), ("loss_pct", self.loss_pct)])?;
        require_non_negative("balance", self.balance)?;
        require_percent("loss_pct", self.loss_pct, settings.max_loss_pct)
    }
}

/// Dollar loss limit for the period.
pub fn calculate_max_loss(input: &MaxLossInput, settings: &EngineSettings) -> CalcResult<f64> {
    input.validate(settings)?;
    require_finite_result("balance", input.balance * input.loss_pct / 100.0)
}

pub(crate) fn max_loss_output(limit_usd: f64) -> CalculatorOutput {
    CalculatorOutput::new(CalculatorKind::MaxLoss).push("limit_usd", limit_usd, format_money(limit_usd))
}
