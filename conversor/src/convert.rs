//! Letter string -> numeral string.

use shared::LocaleFormat;

use crate::cipher::digit_for;

/// Decodes a mnemonic letter string into a numeral string: ASCII digits
/// with at most one decimal separator.
///
/// The input is uppercased and scanned left to right. The locale's decimal
/// separator switches accumulation to the fractional part the first time it
/// appears; later occurrences are dropped. Characters outside the cipher
/// (spaces, punctuation, unmapped letters) are skipped. This never fails:
/// input with no usable characters decodes to `"0"`.
pub fn convert(raw: &str, locale: &LocaleFormat) -> String {
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut in_fraction = false;

    for ch in raw.to_uppercase().chars() {
        if ch == locale.decimal_separator {
            in_fraction = true;
        } else if let Some(digit) = digit_for(ch) {
            if in_fraction {
                fraction.push(digit);
            } else {
                integer.push(digit);
            }
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return "0".to_string();
    }
    if integer.is_empty() {
        integer.push('0');
    }

    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}{}{fraction}", locale.decimal_separator)
    }
}
