// Shared data models used by both the conversion pipeline and the GUI.

pub mod models;

pub use models::{LocaleFormat, Quote};

#[cfg(test)]
mod tests {
    use super::models::LocaleFormat;

    #[test]
    fn default_locale_is_brazilian() {
        let locale = LocaleFormat::default();
        assert_eq!(locale.currency_prefix, "R$");
        assert_eq!(locale.thousand_separator, '.');
        assert_eq!(locale.decimal_separator, ',');
    }
}
