//! Facade tying the three stages together for the GUI adapter.

use shared::{LocaleFormat, Quote};
use tracing::trace;

use crate::{convert, format, markup};

/// Stateless conversion pipeline. Owns only the locale configuration;
/// every call is a pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct Conversor {
    locale: LocaleFormat,
}

impl Conversor {
    pub fn new(locale: LocaleFormat) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &LocaleFormat {
        &self.locale
    }

    /// The canonical zero currency string ("R$ 0,00" by default).
    pub fn zero(&self) -> String {
        format::zero(&self.locale)
    }

    /// Decodes a letter string and formats it as currency.
    pub fn price_for(&self, raw_text: &str) -> String {
        format::format(&convert::convert(raw_text, &self.locale), &self.locale)
    }

    /// Runs the whole pipeline for one input change: decoded price plus the
    /// marked-up final price.
    pub fn quote(&self, raw_text: &str, markup_percent: &str) -> Quote {
        let price = self.price_for(raw_text);
        let final_price = markup::apply_markup(&price, markup_percent, &self.locale);
        trace!(%price, %final_price, "quote computed");
        Quote { price, final_price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cipher_word_quotes_end_to_end() {
        let conversor = Conversor::default();
        let quote = conversor.quote("PERNAMBUCO", "");
        assert_eq!(quote.price, "R$ 1.234.567.890,00");
        assert_eq!(quote.final_price, "R$ 1.234.567.890,00");
    }

    #[test]
    fn fractional_input_quotes_end_to_end() {
        let conversor = Conversor::default();
        assert_eq!(conversor.price_for("PE,RN"), "R$ 12,34");
    }

    #[test]
    fn markup_chains_off_the_converted_price() {
        let conversor = Conversor::default();
        let quote = conversor.quote("POO", "20"); // P=1, O=0, O=0 -> 100
        assert_eq!(quote.price, "R$ 100,00");
        assert_eq!(quote.final_price, "R$ 120,00");
    }

    #[test]
    fn empty_input_quotes_to_zero_everywhere() {
        let conversor = Conversor::default();
        let quote = conversor.quote("", "35");
        assert_eq!(quote.price, conversor.zero());
        assert_eq!(quote.final_price, conversor.zero());
    }
}
