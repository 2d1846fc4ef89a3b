//! # Margin & Leverage
//!
//! ```text
//! Margin       ≈ ContractValue × Lots / Leverage
//! MarginLevel% = Equity / UsedMargin × 100
//! ```
//!
//! Leverage is the right-hand side of the broker ratio: 1:500 is `500`.
//! With no margin in use the margin level is undefined, so `used_margin = 0`
//! is rejected instead of rendering infinity.

use serde::{Deserialize, Serialize};

use super::{checked_div, require_finite, require_finite_result, require_non_negative, require_non_zero, require_positive};
use super::{CalculatorInput, CalculatorKind, CalculatorOutput, FieldSpec};
use crate::errors::CalcResult;
use crate::numeric::{format_money, format_number};
use crate::settings::EngineSettings;

pub const MARGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("contract_value", "Contract value ($)"),
    FieldSpec::required("lots", "Lots"),
    FieldSpec::required("leverage", "Leverage (500 for 1:500)"),
    FieldSpec::required("equity", "Equity ($)"),
    FieldSpec::required("used_margin", "Used margin ($)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginInput {
    pub contract_value: f64,
    pub lots: f64,
    pub leverage: f64,
    pub equity: f64,
    pub used_margin: f64,
}

impl MarginInput {
    pub fn from_fields(input: &CalculatorInput) -> CalcResult<Self> {
        Ok(Self {
            contract_value: input.require("contract_value")?,
            lots: input.require("lots")?,
            leverage: input.require("leverage")?,
            equity: input.require("equity")?,
            used_margin: input.require("used_margin")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_finite(&[
            ("contract_value", self.contract_value),
            ("lots", self.lots),
            ("leverage", self.leverage),
            ("equity", self.equity),
            ("used_margin", self.used_margin),
        ])?;
        require_positive("leverage", self.leverage)?;
        require_non_negative("used_margin", self.used_margin)?;
        require_non_zero(&["used_margin"], self.used_margin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginResult {
    /// Margin required to open the position ($)
    pub margin_approx: f64,
    /// Equity as a percentage of used margin (300.0 means 300%)
    pub margin_level_pct: f64,
}

impl MarginResult {
    pub fn to_output(&self, settings: &EngineSettings) -> CalculatorOutput {
        CalculatorOutput::new(CalculatorKind::Margin)
            .push("margin_approx", self.margin_approx, format_money(self.margin_approx))
            .push(
                "margin_level_pct",
                self.margin_level_pct,
                format_number(self.margin_level_pct, settings.number_digits),
            )
    }
}

pub fn calculate(input: &MarginInput) -> CalcResult<MarginResult> {
    input.validate()?;

    let notional = require_finite_result("contract_value", input.contract_value * input.lots)?;
    let margin_approx = checked_div(notional, input.leverage, "contract_value", &["leverage"])?;
    let level = checked_div(input.equity, input.used_margin, "equity", &["used_margin"])?;

    Ok(MarginResult {
        margin_approx,
        margin_level_pct: require_finite_result("equity", level * 100.0)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CalcError, ErrorKind};

    fn account() -> MarginInput {
        MarginInput {
            contract_value: 100_000.0,
            lots: 0.1,
            leverage: 500.0,
            equity: 900.0,
            used_margin: 300.0,
        }
    }

    #[test]
    fn test_margin_and_level() {
        let result = calculate(&account()).unwrap();
        // 100000 × 0.1 / 500 = 20
        assert!((result.margin_approx - 20.0).abs() < 1e-9);
        assert!((result.margin_level_pct - 300.0).abs() < 1e-9);

        let output = result.to_output(&EngineSettings::default());
        assert_eq!(output.display("margin_approx"), Some("$20.00"));
        assert_eq!(output.display("margin_level_pct"), Some("300.00"));
    }

    #[test]
    fn test_zero_used_margin_is_invalid_not_infinite() {
        let err = calculate(&MarginInput { used_margin: 0.0, ..account() }).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero(["used_margin"]));
    }

    #[test]
    fn test_negative_used_margin() {
        let err = calculate(&MarginInput { used_margin: -10.0, ..account() }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.fields(), vec!["used_margin"]);
    }

    #[test]
    fn test_leverage_must_be_positive() {
        for leverage in [0.0, -500.0] {
            let err = calculate(&MarginInput { leverage, ..account() }).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
            assert_eq!(err.fields(), vec!["leverage"]);
        }
    }

    #[test]
    fn test_nan_reported_as_missing() {
        let err = calculate(&MarginInput { equity: f64::NAN, ..account() }).unwrap_err();
        assert_eq!(err, CalcError::missing_field("equity"));
    }

    #[test]
    fn test_subnormal_used_margin_is_division_by_zero() {
        let input = CalculatorKind::Margin.example_input().with("used_margin", "1e-310");
        let err = crate::calculators::compute(CalculatorKind::Margin, &input, &EngineSettings::default()).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero(["used_margin"]));
    }

    #[test]
    fn test_overflowing_margin_rejected() {
        let err = calculate(&MarginInput { contract_value: 1e300, lots: 1e10, ..account() }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.fields(), vec!["contract_value"]);

        let err = calculate(&MarginInput { equity: 1e307, used_margin: 1.0, ..account() }).unwrap_err();
        assert_eq!(err.fields(), vec!["equity"]);
    }
}
