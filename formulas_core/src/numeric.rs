//! # Numeric Coercion & Formatting
//!
//! Small total functions shared by every calculator. None of them error or
//! panic: bad input resolves to the `NaN` sentinel or to the [`PLACEHOLDER`]
//! string, so calculators can compose them without checks at each step.
//!
//! ## Example
//!
//! ```rust
//! use formulas_core::numeric::{format_money, round_to_step, to_number};
//!
//! assert_eq!(to_number(" 0.25 "), 0.25);
//! assert!(to_number("abc").is_nan());
//! assert_eq!(format_money(-1.5), "-$1.50");
//! assert_eq!(round_to_step(7.0, 2.0), 8.0);
//! assert_eq!(round_to_step(0.537, 0.0), 0.537);
//! ```

/// Rendered in place of any non-finite number.
pub const PLACEHOLDER: &str = "—";

/// Parse raw user text into a number.
///
/// Empty, whitespace-only, unparseable and non-finite text (`"inf"`, `"NaN"`)
/// all yield `f64::NAN`.
pub fn to_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => f64::NAN,
    }
}

/// [`to_number`] for a possibly absent field.
pub fn to_number_opt(raw: Option<&str>) -> f64 {
    raw.map_or(f64::NAN, to_number)
}

/// True iff `x` is a real, finite number.
#[inline]
pub fn is_finite_number(x: f64) -> bool {
    x.is_finite()
}

/// Round `value` to the nearest multiple of `step`, halves rounding up.
///
/// A step that is not a finite positive number leaves `value` untouched, as
/// does a non-finite `value`. Optional step fields therefore never block a
/// calculation.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    if !is_finite_number(value) || !is_finite_number(step) || step <= 0.0 {
        return value;
    }
    (value / step + 0.5).floor() * step
}

/// Signed currency with two decimals: `$1.00`, `-$0.54`.
pub fn format_money(n: f64) -> String {
    if !is_finite_number(n) {
        return PLACEHOLDER.to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    format!("{}${:.2}", sign, n.abs())
}

/// Fixed-point rendering with `digits` decimals.
pub fn format_number(n: f64, digits: usize) -> String {
    if !is_finite_number(n) {
        return PLACEHOLDER.to_string();
    }
    format!("{:.*}", digits, n)
}

/// Render a 0..1 fraction as a percentage: `0.45` → `45.00%`.
pub fn format_percent(fraction: f64, digits: usize) -> String {
    if !is_finite_number(fraction) {
        return PLACEHOLDER.to_string();
    }
    format!("{:.*}%", digits, fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number() {
        assert_eq!(to_number("50"), 50.0);
        assert_eq!(to_number("  -0.10\t"), -0.1);
        assert_eq!(to_number(".5"), 0.5);
        assert_eq!(to_number("1e3"), 1000.0);
        assert!(to_number("").is_nan());
        assert!(to_number("   ").is_nan());
        assert!(to_number("12abc").is_nan());
        assert!(to_number("inf").is_nan());
        assert!(to_number("NaN").is_nan());
        assert!(to_number_opt(None).is_nan());
        assert_eq!(to_number_opt(Some("7")), 7.0);
    }

    #[test]
    fn test_is_finite_number() {
        assert!(is_finite_number(0.0));
        assert!(is_finite_number(-3.5));
        assert!(!is_finite_number(f64::NAN));
        assert!(!is_finite_number(f64::INFINITY));
        assert!(!is_finite_number(f64::NEG_INFINITY));
    }

    #[test]
    fn test_round_to_step() {
        assert!((round_to_step(0.537, 0.01) - 0.54).abs() < 1e-12);
        assert!((round_to_step(0.26, 0.05) - 0.25).abs() < 1e-12);
        assert_eq!(round_to_step(7.0, 2.0), 8.0);
        assert_eq!(round_to_step(-2.5, 1.0), -2.0);
    }

    #[test]
    fn test_round_to_step_fallbacks() {
        assert_eq!(round_to_step(0.537, 0.0), 0.537);
        assert_eq!(round_to_step(0.537, -0.01), 0.537);
        assert_eq!(round_to_step(0.537, f64::NAN), 0.537);
        assert_eq!(round_to_step(0.537, f64::INFINITY), 0.537);
        assert!(round_to_step(f64::NAN, 0.01).is_nan());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1.0), "$1.00");
        assert_eq!(format_money(0.54), "$0.54");
        assert_eq!(format_money(-2.5), "-$2.50");
        assert_eq!(format_money(1234.567), "$1234.57");
        assert_eq!(format_money(f64::NAN), PLACEHOLDER);
        assert_eq!(format_money(f64::INFINITY), PLACEHOLDER);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15.0, 2), "15.00");
        assert_eq!(format_number(2.0, 1), "2.0");
        assert_eq!(format_number(-0.5, 3), "-0.500");
        assert_eq!(format_number(f64::NEG_INFINITY, 2), PLACEHOLDER);
        assert_eq!(format_percent(0.45, 2), "45.00%");
        assert_eq!(format_percent(f64::NAN, 2), PLACEHOLDER);
    }
}
