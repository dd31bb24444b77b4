//! Numeral string -> currency string, and the partial inverse used by the
//! markup calculator.

use std::str::FromStr;

use shared::LocaleFormat;

use crate::error::ConversionError;

/// Renders a numeral string as a currency string: prefix, thousands
/// grouping, decimal separator and exactly two fraction digits.
///
/// The fraction is truncated to two digits and right-padded with '0'; a
/// missing fraction becomes "00". An empty numeral or a lone separator
/// formats to the canonical zero ("R$ 0,00" for the default locale).
pub fn format(numeral: &str, locale: &LocaleFormat) -> String {
    if numeral.is_empty() || numeral.chars().all(|c| c == locale.decimal_separator) {
        return zero(locale);
    }

    let (integer, fraction) = match numeral.split_once(locale.decimal_separator) {
        Some((i, f)) => (i, f),
        None => (numeral, ""),
    };
    let integer = if integer.is_empty() { "0" } else { integer };

    let mut fraction: String = fraction.chars().take(2).collect();
    while fraction.len() < 2 {
        fraction.push('0');
    }

    format!(
        "{} {}{}{fraction}",
        locale.currency_prefix,
        group_thousands(integer, locale.thousand_separator),
        locale.decimal_separator,
    )
}

/// The canonical zero currency string for a locale.
pub fn zero(locale: &LocaleFormat) -> String {
    format!(
        "{} 0{}00",
        locale.currency_prefix, locale.decimal_separator
    )
}

/// Parses a currency string back into its numeric value: strips the prefix,
/// drops thousand separators, swaps the decimal separator for '.' and reads
/// an `f64`. Anything that does not survive that normalization is the
/// not-a-number sentinel.
pub fn parse(currency: &str, locale: &LocaleFormat) -> Result<f64, ConversionError> {
    let body = currency
        .trim()
        .strip_prefix(&locale.currency_prefix)
        .unwrap_or(currency)
        .trim();

    let normalized: String = body
        .chars()
        .filter(|c| *c != locale.thousand_separator)
        .map(|c| {
            if c == locale.decimal_separator {
                '.'
            } else {
                c
            }
        })
        .collect();

    f64::from_str(&normalized).map_err(|_| ConversionError::NotANumber(currency.to_string()))
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
