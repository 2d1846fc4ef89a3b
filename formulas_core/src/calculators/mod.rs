//! # Calculators
//!
//! Every calculator follows the same pattern:
//!
//! - `*Input` - typed inputs, built from raw form text with `from_fields`
//! - `*Result` - raw numeric results, rendered with `to_output`
//! - `calculate(&input, &settings) -> CalcResult<*Result>` - pure function
//!
//! [`compute`] ties the three together at the raw-text boundary: field name →
//! user-typed text in, formatted [`CalculatorOutput`] or a [`CalcError`] out.
//! Validation short-circuits on the first problem: missing/non-numeric fields
//! in declared order, then domain constraints, then zero denominators.
//!
//! ## Example
//!
//! ```rust
//! use formulas_core::calculators::{compute, CalculatorInput, CalculatorKind};
//! use formulas_core::settings::EngineSettings;
//!
//! let input = CalculatorInput::new()
//!     .with("peak_equity", "1200")
//!     .with("trough_equity", "1020");
//!
//! let output = compute(CalculatorKind::Drawdown, &input, &EngineSettings::default()).unwrap();
//! assert_eq!(output.display("drawdown_pct"), Some("15.00"));
//! ```
//!
//! ## Available Calculators
//!
//! - [`pnl`] - Gross/net PnL and breakeven move
//! - [`risk`] - Risk sizing, reward:risk, loss limits
//! - [`statistics`] - Win-rate suite and drawdown
//! - [`margin`] - Margin and margin level
//! - [`extras`] - Price-to-ticks and net reward

pub mod extras;
pub mod margin;
pub mod pnl;
pub mod risk;
pub mod statistics;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::numeric::{is_finite_number, to_number_opt};
use crate::settings::EngineSettings;

pub use extras::{NetRewardInput, TicksFromPriceInput};
pub use margin::{MarginInput, MarginResult};
pub use pnl::{BreakevenMoveInput, GrossNetPnlInput, GrossNetPnlResult};
pub use risk::{MaxLossInput, RewardRiskInput, RewardRiskResult, RiskSizingInput, RiskSizingResult};
pub use statistics::{DrawdownInput, WinRateStatsInput, WinRateStatsResult};

// ============================================================================
// Registry
// ============================================================================

/// All supported calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    GrossNetPnl,
    BreakevenMove,
    RiskSizing,
    RewardRisk,
    MaxLoss,
    WinRateStats,
    Drawdown,
    Margin,
    TicksFromPrice,
    NetReward,
}

/// Description of one input field of a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key in [`CalculatorInput`]
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Optional fields never block a calculation
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        Self { name, label, required: true }
    }

    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        Self { name, label, required: false }
    }
}

impl CalculatorKind {
    /// Every calculator, in display order
    pub const ALL: [CalculatorKind; 10] = [
        CalculatorKind::GrossNetPnl,
        CalculatorKind::BreakevenMove,
        CalculatorKind::RiskSizing,
        CalculatorKind::RewardRisk,
        CalculatorKind::MaxLoss,
        CalculatorKind::WinRateStats,
        CalculatorKind::Drawdown,
        CalculatorKind::Margin,
        CalculatorKind::TicksFromPrice,
        CalculatorKind::NetReward,
    ];

    /// Stable identifier, identical to the serde name
    pub fn id(&self) -> &'static str {
        match self {
            CalculatorKind::GrossNetPnl => "gross_net_pnl",
            CalculatorKind::BreakevenMove => "breakeven_move",
            CalculatorKind::RiskSizing => "risk_sizing",
            CalculatorKind::RewardRisk => "reward_risk",
            CalculatorKind::MaxLoss => "max_loss",
            CalculatorKind::WinRateStats => "win_rate_stats",
            CalculatorKind::Drawdown => "drawdown",
            CalculatorKind::Margin => "margin",
            CalculatorKind::TicksFromPrice => "ticks_from_price",
            CalculatorKind::NetReward => "net_reward",
        }
    }

    /// Look a calculator up by [`id`](Self::id).
    pub fn from_id(id: &str) -> CalcResult<Self> {
        let wanted = id.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::unknown_calculator(id))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorKind::GrossNetPnl => "Gross / Net PnL",
            CalculatorKind::BreakevenMove => "Breakeven Move",
            CalculatorKind::RiskSizing => "Risk $ / Lots from Risk",
            CalculatorKind::RewardRisk => "R:R / Breakeven WinRate",
            CalculatorKind::MaxLoss => "Max Daily / Weekly Loss",
            CalculatorKind::WinRateStats => "Win-Rate Statistics",
            CalculatorKind::Drawdown => "Drawdown %",
            CalculatorKind::Margin => "Margin / Margin Level",
            CalculatorKind::TicksFromPrice => "Ticks from Price Move",
            CalculatorKind::NetReward => "Net Reward (Approx.)",
        }
    }

    /// Input fields in validation order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            CalculatorKind::GrossNetPnl => pnl::GROSS_NET_PNL_FIELDS,
            CalculatorKind::BreakevenMove => pnl::BREAKEVEN_MOVE_FIELDS,
            CalculatorKind::RiskSizing => risk::RISK_SIZING_FIELDS,
            CalculatorKind::RewardRisk => risk::REWARD_RISK_FIELDS,
            CalculatorKind::MaxLoss => risk::MAX_LOSS_FIELDS,
            CalculatorKind::WinRateStats => statistics::WIN_RATE_STATS_FIELDS,
            CalculatorKind::Drawdown => statistics::DRAWDOWN_FIELDS,
            CalculatorKind::Margin => margin::MARGIN_FIELDS,
            CalculatorKind::TicksFromPrice => extras::TICKS_FROM_PRICE_FIELDS,
            CalculatorKind::NetReward => extras::NET_REWARD_FIELDS,
        }
    }

    /// Names of the fields that must be present
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields().iter().filter(|f| f.required).map(|f| f.name).collect()
    }

    /// Canonical example values, matching the catalog's worked examples.
    pub fn example(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            CalculatorKind::GrossNetPnl => &[
                ("ticks_moved", "50"),
                ("tick_value", "0.10"),
                ("lots", "0.20"),
                ("spread_ticks", "18"),
                ("commission_per_lot_rt", "7"),
            ],
            CalculatorKind::BreakevenMove => &[
                ("spread_ticks", "16"),
                ("commission_cost", "1.75"),
                ("tick_value", "0.10"),
                ("lots", "0.25"),
            ],
            CalculatorKind::RiskSizing => &[
                ("balance", "500"),
                ("risk_pct", "1"),
                ("stop_ticks", "100"),
                ("tick_value", "0.10"),
                ("lot_step", "0.01"),
            ],
            CalculatorKind::RewardRisk => &[("tp_distance", "60"), ("sl_distance", "30")],
            CalculatorKind::MaxLoss => &[("balance", "1000"), ("loss_pct", "3")],
            CalculatorKind::WinRateStats => &[
                ("wins", "45"),
                ("total_trades", "100"),
                ("total_profit", "292.5"),
                ("total_loss", "220"),
                ("losses", "55"),
            ],
            CalculatorKind::Drawdown => &[("peak_equity", "1200"), ("trough_equity", "1020")],
            CalculatorKind::Margin => &[
                ("contract_value", "100000"),
                ("lots", "0.1"),
                ("leverage", "500"),
                ("equity", "900"),
                ("used_margin", "300"),
            ],
            CalculatorKind::TicksFromPrice => &[("price_move", "0.50"), ("tick_size", "0.01")],
            CalculatorKind::NetReward => &[("tp_ticks", "40"), ("breakeven_ticks", "18")],
        }
    }

    /// The canonical example as a ready-to-compute input.
    pub fn example_input(&self) -> CalculatorInput {
        self.example().iter().copied().collect()
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Raw input / formatted output
// ============================================================================

/// Raw form values: field name → text exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculatorInput(BTreeMap<String, String>);

impl CalculatorInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coerced value of a required field, or `MissingField`.
    pub fn require(&self, field: &str) -> CalcResult<f64> {
        let value = to_number_opt(self.get(field));
        if is_finite_number(value) {
            Ok(value)
        } else {
            Err(CalcError::missing_field(field))
        }
    }

    /// Coerced value of an optional field; `NaN` when absent or unreadable.
    pub fn optional(&self, field: &str) -> f64 {
        to_number_opt(self.get(field))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CalculatorInput {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        CalculatorInput(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One computed output: raw value for composition, display text for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputValue {
    pub field: String,
    pub value: f64,
    pub display: String,
}

/// Successful calculator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorOutput {
    pub calculator: CalculatorKind,
    pub values: Vec<OutputValue>,
}

impl CalculatorOutput {
    pub(crate) fn new(calculator: CalculatorKind) -> Self {
        Self { calculator, values: Vec::new() }
    }

    pub(crate) fn push(mut self, field: &str, value: f64, display: String) -> Self {
        self.values.push(OutputValue {
            field: field.to_string(),
            value,
            display,
        });
        self
    }

    pub fn get(&self, field: &str) -> Option<&OutputValue> {
        self.values.iter().find(|v| v.field == field)
    }

    /// Raw numeric value of an output field
    pub fn value(&self, field: &str) -> Option<f64> {
        self.get(field).map(|v| v.value)
    }

    /// Formatted text of an output field
    pub fn display(&self, field: &str) -> Option<&str> {
        self.get(field).map(|v| v.display.as_str())
    }
}

/// Evaluate calculator `kind` over raw form text.
pub fn compute(kind: CalculatorKind, input: &CalculatorInput, settings: &EngineSettings) -> CalcResult<CalculatorOutput> {
    let output = dispatch(kind, input, settings)?;

    // No successful output carries a non-finite value
    if let Some(bad) = output.values.iter().find(|v| !is_finite_number(v.value)) {
        let field = kind.required_fields().first().copied().unwrap_or(bad.field.as_str());
        return Err(CalcError::out_of_range(field, bad.value.to_string(), "Result is too large to represent"));
    }
    Ok(output)
}

fn dispatch(kind: CalculatorKind, input: &CalculatorInput, settings: &EngineSettings) -> CalcResult<CalculatorOutput> {
    match kind {
        CalculatorKind::GrossNetPnl => {
            let typed = GrossNetPnlInput::from_fields(input)?;
            Ok(pnl::calculate_gross_net(&typed)?.to_output())
        }
        CalculatorKind::BreakevenMove => {
            let typed = BreakevenMoveInput::from_fields(input)?;
            let ticks = pnl::calculate_breakeven_move(&typed)?;
            Ok(pnl::breakeven_move_output(ticks, settings))
        }
        CalculatorKind::RiskSizing => {
            let typed = RiskSizingInput::from_fields(input)?;
            Ok(risk::calculate_risk_sizing(&typed, settings)?.to_output(settings))
        }
        CalculatorKind::RewardRisk => {
            let typed = RewardRiskInput::from_fields(input)?;
            Ok(risk::calculate_reward_risk(&typed)?.to_output(settings))
        }
        CalculatorKind::MaxLoss => {
            let typed = MaxLossInput::from_fields(input)?;
            let limit = risk::calculate_max_loss(&typed, settings)?;
            Ok(risk::max_loss_output(limit))
        }
        CalculatorKind::WinRateStats => {
            let typed = WinRateStatsInput::from_fields(input)?;
            Ok(statistics::calculate_win_rate_stats(&typed)?.to_output(settings))
        }
        CalculatorKind::Drawdown => {
            let typed = DrawdownInput::from_fields(input)?;
            let pct = statistics::calculate_drawdown(&typed)?;
            Ok(statistics::drawdown_output(pct, settings))
        }
        CalculatorKind::Margin => {
            let typed = MarginInput::from_fields(input)?;
            Ok(margin::calculate(&typed)?.to_output(settings))
        }
        CalculatorKind::TicksFromPrice => {
            let typed = TicksFromPriceInput::from_fields(input)?;
            let ticks = extras::calculate_ticks_from_price(&typed)?;
            Ok(extras::ticks_output(CalculatorKind::TicksFromPrice, "ticks_moved", ticks, settings))
        }
        CalculatorKind::NetReward => {
            let typed = NetRewardInput::from_fields(input)?;
            let ticks = extras::calculate_net_reward(&typed)?;
            Ok(extras::ticks_output(CalculatorKind::NetReward, "net_reward_ticks", ticks, settings))
        }
    }
}

// ============================================================================
// Shared validation helpers
// ============================================================================

/// Every listed value must be finite; the first that isn't is reported missing.
pub(crate) fn require_finite(values: &[(&str, f64)]) -> CalcResult<()> {
    match values.iter().find(|(_, v)| !is_finite_number(*v)) {
        Some((field, _)) => Err(CalcError::missing_field(*field)),
        None => Ok(()),
    }
}

pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value <= 0.0 {
        return Err(CalcError::out_of_range(field, value.to_string(), "Must be greater than 0"));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if value < 0.0 {
        return Err(CalcError::out_of_range(field, value.to_string(), "Cannot be negative"));
    }
    Ok(())
}

/// Percentage in (0, cap].
pub(crate) fn require_percent(field: &str, value: f64, cap: f64) -> CalcResult<()> {
    if value <= 0.0 || value > cap {
        return Err(CalcError::out_of_range(
            field,
            value.to_string(),
            format!("Must be greater than 0 and at most {}", cap),
        ));
    }
    Ok(())
}

/// Whole, non-negative trade count.
pub(crate) fn require_count(field: &str, value: f64) -> CalcResult<()> {
    require_non_negative(field, value)?;
    if value.fract() != 0.0 {
        return Err(CalcError::out_of_range(field, value.to_string(), "Must be a whole number"));
    }
    Ok(())
}

pub(crate) fn require_non_zero(fields: &[&str], denominator: f64) -> CalcResult<()> {
    if denominator == 0.0 {
        return Err(CalcError::division_by_zero(fields.iter().copied()));
    }
    Ok(())
}

// ============================================================================
// Result guards
// ============================================================================

/// A finite intermediate or output value; anything else overflowed.
pub(crate) fn require_finite_result(field: &str, value: f64) -> CalcResult<f64> {
    if is_finite_number(value) {
        return Ok(value);
    }
    Err(CalcError::out_of_range(field, value.to_string(), "Result is too large to represent"))
}

/// `numerator / denominator` with a finite quotient.
///
/// A subnormal denominator is treated like zero and reported against
/// `denominator_fields`; any other non-finite quotient is an overflow on
/// `numerator_field`.
pub(crate) fn checked_div(numerator: f64, denominator: f64, numerator_field: &str, denominator_fields: &[&str]) -> CalcResult<f64> {
    let quotient = numerator / denominator;
    if is_finite_number(quotient) {
        return Ok(quotient);
    }
    if denominator.abs() < f64::MIN_POSITIVE {
        return Err(CalcError::division_by_zero(denominator_fields.iter().copied()));
    }
    require_finite_result(numerator_field, quotient)
}
