//! Percentage markup over an already-formatted currency string.

use std::str::FromStr;

use shared::LocaleFormat;

use crate::format;

/// Cent amounts at or above this no longer fit an `i64`; `reformat` would
/// saturate and invent digits.
const MAX_CENTS: f64 = i64::MAX as f64;

/// Applies a percentage markup to a displayed currency string.
///
/// Fallback rules, in order:
/// - base unparseable or ≤ 0: canonical zero;
/// - percent unparseable (empty, comma decimals, other junk — a trailing
///   '.' still reads as a whole number) or negative: base re-formatted to
///   two decimals, value unchanged;
/// - amount too large to round-trip through cents: displayed base kept
///   verbatim, markup skipped;
/// - otherwise `base × (1 + percent / 100)`, rounded to cents.
///
/// Never fails; every input degrades to a defined currency string.
pub fn apply_markup(displayed: &str, markup_percent: &str, locale: &LocaleFormat) -> String {
    let base = match format::parse(displayed, locale) {
        Ok(value) if value > 0.0 => value,
        _ => return format::zero(locale),
    };

    let value = match f64::from_str(markup_percent.trim()) {
        // NaN fails the guard and falls through to the passthrough arm.
        Ok(percent) if percent >= 0.0 => base * (1.0 + percent / 100.0),
        _ => base,
    };

    if (value * 100.0).round() >= MAX_CENTS {
        return displayed.to_string();
    }

    reformat(value, locale)
}

/// Rounds a positive amount to cents (half away from zero) and renders it
/// through the formatter.
pub fn reformat(value: f64, locale: &LocaleFormat) -> String {
    let cents = (value * 100.0).round() as i64;
    let numeral = format!(
        "{}{}{:02}",
        cents / 100,
        locale.decimal_separator,
        cents % 100
    );
    format::format(&numeral, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale() -> LocaleFormat {
        LocaleFormat::brazilian()
    }

    #[test]
    fn applies_a_whole_percent_markup() {
        assert_eq!(apply_markup("R$ 100,00", "20", &locale()), "R$ 120,00");
    }

    #[test]
    fn applies_a_fractional_markup_with_cent_rounding() {
        // 10,05 × 1,175 = 11,80875 -> 11,81
        assert_eq!(apply_markup("R$ 10,05", "17.5", &locale()), "R$ 11,81");
    }

    #[test]
    fn marked_up_result_keeps_thousands_grouping() {
        assert_eq!(
            apply_markup("R$ 1.000.000,00", "10", &locale()),
            "R$ 1.100.000,00"
        );
    }

    #[test]
    fn zero_or_negative_base_yields_canonical_zero() {
        assert_eq!(apply_markup("R$ 0,00", "20", &locale()), "R$ 0,00");
        assert_eq!(apply_markup("R$ -5,00", "20", &locale()), "R$ 0,00");
    }

    #[test]
    fn unparseable_base_yields_canonical_zero() {
        assert_eq!(apply_markup("", "20", &locale()), "R$ 0,00");
        assert_eq!(apply_markup("garbage", "20", &locale()), "R$ 0,00");
    }

    #[test]
    fn empty_percent_passes_the_base_through() {
        assert_eq!(apply_markup("R$ 100,00", "", &locale()), "R$ 100,00");
    }

    #[test]
    fn zero_percent_passes_the_base_through() {
        assert_eq!(apply_markup("R$ 100,00", "0", &locale()), "R$ 100,00");
    }

    #[test]
    fn negative_percent_passes_the_base_through() {
        assert_eq!(apply_markup("R$ 100,00", "-15", &locale()), "R$ 100,00");
    }

    #[test]
    fn comma_decimal_percent_is_a_passthrough() {
        // Comma decimals never parse; the field stays a passthrough until
        // the user finishes typing a dot decimal.
        assert_eq!(apply_markup("R$ 100,00", "12,5", &locale()), "R$ 100,00");
        assert_eq!(apply_markup("R$ 100,00", ",", &locale()), "R$ 100,00");
    }

    #[test]
    fn trailing_dot_percent_applies_as_a_whole_number() {
        assert_eq!(apply_markup("R$ 100,00", "12.", &locale()), "R$ 112,00");
    }

    #[test]
    fn nan_percent_is_a_passthrough() {
        assert_eq!(apply_markup("R$ 100,00", "NaN", &locale()), "R$ 100,00");
    }

    #[test]
    fn amounts_beyond_cent_range_keep_the_displayed_base() {
        // 19 nines in cents overflows i64; the markup is skipped rather
        // than saturating the final price.
        let displayed = format::format(&"9".repeat(19), &locale());
        assert_eq!(apply_markup(&displayed, "20", &locale()), displayed);
        assert_eq!(apply_markup(&displayed, "", &locale()), displayed);
    }

    #[test]
    fn reformat_renders_cents() {
        assert_eq!(reformat(120.0, &locale()), "R$ 120,00");
        assert_eq!(reformat(0.1 + 0.2, &locale()), "R$ 0,30");
        assert_eq!(reformat(1234.565, &locale()), "R$ 1.234,57");
    }
}
