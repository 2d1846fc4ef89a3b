//! # Extras
//!
//! Tick conversions that feed the other calculators.
//!
//! ```text
//! TicksMoved      = PriceMove / TickSize
//! NetRewardTicks ≈ TP_Ticks − BreakevenMoveTicks
//! ```

use serde::{Deserialize, Serialize};

use super::{checked_div, require_finite, require_finite_result, require_non_negative, require_non_zero};
use super::{CalculatorInput, CalculatorKind, CalculatorOutput, FieldSpec};
use crate::errors::CalcResult;
use crate::numeric::format_number;
use crate::settings::EngineSettings;

pub const TICKS_FROM_PRICE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("price_move", "Price move (e.g. 0.50)"),
    FieldSpec::required("tick_size", "Tick size (e.g. 0.01)"),
];

pub const NET_REWARD_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("tp_ticks", "Take profit (ticks)"),
    FieldSpec::required("breakeven_ticks", "Breakeven move (ticks)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TicksFromPriceInput {
    pub price_move: f64,
    pub tick_size: f64,
}

impl TicksFromPriceInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            price_move: input.require("price_move")?,
            tick_size: input.require("tick_size")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_finite(&[("price_move", self.price_move), ("tick_size", self.tick_size)])?;
        require_non_negative("tick_size", self.tick_size)?;
        require_non_zero(&["tick_size"], self.tick_size)
    }
}

pub fn calculate_ticks_from_price(input: &TicksFromPriceInput) -> CalcResult<f64> {
    input.validate()?;
    checked_div(input.price_move, input.tick_size, "price_move", &["tick_size"])
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetRewardInput {
    pub tp_ticks: f64,
    pub breakeven_ticks: f64,
}

impl NetRewardInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            tp_ticks: input.require("tp_ticks")?,
            breakeven_ticks: input.require("breakeven_ticks")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_finite(&[("tp_ticks", self.tp_ticks), ("breakeven_ticks", self.breakeven_ticks)])
    }
}

/// Ticks of reward left once costs are paid; negative when costs eat the target.
pub fn calculate_net_reward(input: &NetRewardInput) -> CalcResult<f64> {
    input.validate()?;
    require_finite_result("tp_ticks", input.tp_ticks - input.breakeven_ticks)
}

pub(crate) fn ticks_output(kind: CalculatorKind, field: &str, ticks: f64, settings: &EngineSettings) -> CalculatorOutput {
    CalculatorOutput::new(kind).push(field, ticks, format_number(ticks, settings.number_digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::compute;
    use crate::errors::{CalcError, ErrorKind};

    #[test]
    fn test_ticks_from_price() {
        let ticks = calculate_ticks_from_price(&TicksFromPriceInput { price_move: 0.50, tick_size: 0.01 }).unwrap();
        assert!((ticks - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_tick_size_zero_and_negative() {
        let err = calculate_ticks_from_price(&TicksFromPriceInput { price_move: 0.5, tick_size: 0.0 }).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero(["tick_size"]));

        let err = calculate_ticks_from_price(&TicksFromPriceInput { price_move: 0.5, tick_size: -0.01 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_net_reward() {
        let output = compute(
            CalculatorKind::NetReward,
            &CalculatorKind::NetReward.example_input(),
            &EngineSettings::default(),
        )
        .unwrap();
        assert_eq!(output.value("net_reward_ticks"), Some(22.0));
        assert_eq!(output.display("net_reward_ticks"), Some("22.00"));

        let ticks = calculate_net_reward(&NetRewardInput { tp_ticks: 10.0, breakeven_ticks: 18.0 }).unwrap();
        assert_eq!(ticks, -8.0);
    }

    #[test]
    fn test_extreme_magnitudes_rejected() {
        let err = calculate_ticks_from_price(&TicksFromPriceInput { price_move: 0.5, tick_size: 1e-310 }).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero(["tick_size"]));

        let err = calculate_net_reward(&NetRewardInput { tp_ticks: 1e308, breakeven_ticks: -1e308 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.fields(), vec!["tp_ticks"]);
    }
}
