//! Property tests for calculator invariants and numeric helpers.

use formulas_core::calculators::pnl::{calculate_gross_net, GrossNetPnlInput};
use formulas_core::calculators::risk::{breakeven_win_rate, calculate_reward_risk, RewardRiskInput};
use formulas_core::calculators::statistics::{
    calculate_drawdown, calculate_win_rate_stats, DrawdownInput, WinRateStatsInput,
};
use formulas_core::calculators::{compute, CalculatorInput, CalculatorKind};
use formulas_core::catalog::{Catalog, SearchIndex};
use formulas_core::errors::{CalcError, ErrorKind};
use formulas_core::numeric::round_to_step;
use formulas_core::settings::EngineSettings;
use proptest::prelude::*;
use proptest::sample::{select, Index};

fn any_kind() -> impl Strategy<Value = CalculatorKind> {
    select(CalculatorKind::ALL.to_vec())
}

/// Ordinary values mixed with magnitudes near the limits of `f64`.
fn field_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => -1e6f64..1e6,
        1 => select(vec![1e300, -1e300, 1.7e308, -1.7e308, 1e-310, -1e-310, 5e-324, 1e-160, 0.0, 1.0, 100.0]),
        1 => (-308i32..308).prop_map(|exp| 10f64.powi(exp)),
    ]
}

fn unreadable_text() -> impl Strategy<Value = &'static str> {
    select(vec!["", "   ", "abc", "NaN", "inf", "-inf", "1e400", "12,5"])
}

proptest! {
    #[test]
    fn net_pnl_is_gross_minus_costs(
        ticks_moved in -10_000.0f64..10_000.0,
        tick_value in 0.0f64..100.0,
        lots in 0.01f64..100.0,
        spread_ticks in 0.0f64..500.0,
        commission_per_lot_rt in 0.0f64..50.0,
    ) {
        let input = GrossNetPnlInput { ticks_moved, tick_value, lots, spread_ticks, commission_per_lot_rt };
        let result = calculate_gross_net(&input).unwrap();
        prop_assert_eq!(result.net_pnl, result.gross_pnl - result.spread_cost - result.commission_cost);
    }

    #[test]
    fn win_and_loss_rates_sum_to_one(
        total_trades in 2u32..10_000,
        wins_fraction in 0.0f64..1.0,
        total_profit in 0.0f64..1e6,
        total_loss in 1.0f64..1e6,
    ) {
        // At least one win and one loss so no denominator is zero
        let wins = ((total_trades as f64 * wins_fraction).floor() as u32).clamp(1, total_trades - 1);
        let input = WinRateStatsInput {
            wins: wins as f64,
            total_trades: total_trades as f64,
            total_profit,
            total_loss,
            losses: (total_trades - wins) as f64,
        };
        let result = calculate_win_rate_stats(&input).unwrap();
        prop_assert!((result.win_rate + result.loss_rate - 1.0).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&result.win_rate));
    }

    #[test]
    fn breakeven_win_rate_matches_formula(tp in 0.0f64..10_000.0, sl in 0.01f64..10_000.0) {
        let result = calculate_reward_risk(&RewardRiskInput { tp_distance: tp, sl_distance: sl }).unwrap();
        prop_assert!((result.breakeven_win_rate - 1.0 / (1.0 + result.rr)).abs() < 1e-12);
        prop_assert!(result.breakeven_win_rate > 0.0 && result.breakeven_win_rate <= 1.0);
    }

    #[test]
    fn breakeven_win_rate_decreases_with_rr(a in 0.0f64..1_000.0, b in 0.0f64..1_000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(breakeven_win_rate(low) >= breakeven_win_rate(high));
    }

    #[test]
    fn drawdown_within_bounds(peak in 0.01f64..1e7, trough_fraction in 0.0f64..=1.0) {
        let trough = peak * trough_fraction;
        let pct = calculate_drawdown(&DrawdownInput { peak_equity: peak, trough_equity: trough }).unwrap();
        prop_assert!((0.0..=100.0).contains(&pct), "drawdown {} out of range", pct);
    }

    #[test]
    fn drawdown_rejects_trough_above_peak(peak in 0.01f64..1e6, excess in 0.01f64..1e6) {
        let err = calculate_drawdown(&DrawdownInput { peak_equity: peak, trough_equity: peak + excess }).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
        prop_assert_eq!(err.fields(), vec!["trough_equity"]);
    }

    #[test]
    fn round_to_step_is_idempotent(
        value in -1e6f64..1e6,
        step in select(vec![0.001, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 10.0]),
    ) {
        let once = round_to_step(value, step);
        prop_assert_eq!(round_to_step(once, step), once);
        prop_assert!((once - value).abs() <= step / 2.0 + 1e-9);
    }

    #[test]
    fn unreadable_required_field_is_reported_missing(
        kind in any_kind(),
        pick in any::<Index>(),
        text in unreadable_text(),
    ) {
        let required = kind.required_fields();
        let field = required[pick.index(required.len())];

        let mut input = kind.example_input();
        input.set(field, text);

        let err = compute(kind, &input, &EngineSettings::default()).unwrap_err();
        prop_assert_eq!(err, CalcError::missing_field(field));
    }

    #[test]
    fn successful_outputs_are_finite(
        kind in any_kind(),
        values in prop::collection::vec(field_value(), 8),
    ) {
        let input: CalculatorInput = kind
            .fields()
            .iter()
            .zip(values.iter())
            .map(|(spec, value)| (spec.name, format!("{:e}", value)))
            .collect();

        match compute(kind, &input, &EngineSettings::default()) {
            Ok(output) => {
                for value in &output.values {
                    prop_assert!(value.value.is_finite(), "{} produced {} = {}", kind, value.field, value.value);
                    prop_assert!(!value.display.contains('—'), "{} rendered a placeholder for {}", kind, value.field);
                }
            }
            Err(err) => prop_assert!(!err.fields().is_empty(), "{} failed without naming a field: {}", kind, err),
        }
    }

    #[test]
    fn search_ignores_case(query in "[a-zA-Z ]{0,12}") {
        let index = SearchIndex::builtin();
        prop_assert_eq!(index.filter(&query), index.filter(&query.to_uppercase()));
        prop_assert_eq!(index.filter(&query).total, Catalog::builtin().len());
    }
}

#[test]
fn extreme_magnitudes_are_rejected_not_propagated() {
    let settings = EngineSettings::default();

    let input = CalculatorKind::Margin.example_input().with("used_margin", "1e-310");
    let err = compute(CalculatorKind::Margin, &input, &settings).unwrap_err();
    assert_eq!(err, CalcError::division_by_zero(["used_margin"]));

    let input = CalculatorKind::GrossNetPnl
        .example_input()
        .with("ticks_moved", "1e300")
        .with("tick_value", "1e10");
    let err = compute(CalculatorKind::GrossNetPnl, &input, &settings).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(err.fields(), vec!["ticks_moved"]);
}

#[test]
fn margin_level_with_zero_used_margin_is_rejected() {
    let input = CalculatorKind::Margin.example_input().with("used_margin", "0");
    let err = compute(CalculatorKind::Margin, &input, &EngineSettings::default()).unwrap_err();
    assert_eq!(err, CalcError::division_by_zero(["used_margin"]));
}

#[test]
fn documented_scenarios() {
    let settings = EngineSettings::default();

    let pnl = compute(
        CalculatorKind::GrossNetPnl,
        &CalculatorInput::new()
            .with("ticks_moved", "50")
            .with("tick_value", "0.10")
            .with("lots", "0.20")
            .with("spread_ticks", "0")
            .with("commission_per_lot_rt", "0"),
        &settings,
    )
    .unwrap();
    assert_eq!(pnl.display("gross_pnl"), Some("$1.00"));

    let spread = compute(
        CalculatorKind::GrossNetPnl,
        &CalculatorInput::new()
            .with("ticks_moved", "0")
            .with("tick_value", "0.10")
            .with("lots", "0.30")
            .with("spread_ticks", "18")
            .with("commission_per_lot_rt", "0"),
        &settings,
    )
    .unwrap();
    assert_eq!(spread.display("spread_cost"), Some("$0.54"));

    let risk = compute(
        CalculatorKind::RiskSizing,
        &CalculatorInput::new()
            .with("balance", "500")
            .with("risk_pct", "1")
            .with("stop_ticks", "100")
            .with("tick_value", "0.10"),
        &settings,
    )
    .unwrap();
    assert_eq!(risk.display("risk_usd"), Some("$5.00"));

    let drawdown = compute(
        CalculatorKind::Drawdown,
        &CalculatorInput::new().with("peak_equity", "1200").with("trough_equity", "1020"),
        &settings,
    )
    .unwrap();
    assert_eq!(drawdown.display("drawdown_pct"), Some("15.00"));
}
