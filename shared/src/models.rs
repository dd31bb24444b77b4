use serde::{Deserialize, Serialize};

/// Currency formatting rules shared by the conversion pipeline and the GUI.
///
/// Kept as an explicit value rather than ambient constants so the GUI can
/// build it from its configuration file and hand it to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleFormat {
    /// Prefix placed before the grouped digits, e.g. "R$".
    pub currency_prefix: String,
    /// Separator inserted between 3-digit groups of the integer part.
    pub thousand_separator: char,
    /// Separator between the integer part and the 2-digit fraction.
    pub decimal_separator: char,
}

impl LocaleFormat {
    /// Brazilian Real: "R$ 1.234.567,89".
    pub fn brazilian() -> Self {
        Self {
            currency_prefix: "R$".to_string(),
            thousand_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self::brazilian()
    }
}

/// The pair of currency strings produced for one input change:
/// the decoded price and the price with markup applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: String,
    pub final_price: String,
}
