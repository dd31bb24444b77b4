// Global application state for the GUI: the selected theme, the two input
// strings and the currency strings computed from them. All mutation goes
// through methods here; components only wire events to these calls.

use conversor::Conversor;
use serde::{Deserialize, Serialize};
use shared::LocaleFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Slate,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Slate];

    /// Stable name used by the preference store.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Slate => "slate",
        }
    }

    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "slate" => Some(Theme::Slate),
            _ => None,
        }
    }

    /// Button label, pt-BR.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Claro",
            Theme::Dark => "Escuro",
            Theme::Slate => "Slate",
        }
    }
}

/// Which input currently has keyboard focus; Escape clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Letters,
    Markup,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub current_theme: Theme,
    pub language: String,

    // Pipeline inputs and outputs
    pub input_text: String,
    pub markup_text: String,
    pub price: String,
    pub final_price: String,

    // UI specific state
    pub focused: Option<Field>,
    pub notification: Option<String>,
    notification_seq: u64,

    conversor: Conversor,
}

impl AppState {
    pub fn new(locale: LocaleFormat, theme: Theme, language: String) -> Self {
        let conversor = Conversor::new(locale);
        let zero = conversor.zero();
        Self {
            current_theme: theme,
            language,
            input_text: String::new(),
            markup_text: String::new(),
            price: zero.clone(),
            final_price: zero,
            focused: None,
            notification: None,
            notification_seq: 0,
            conversor,
        }
    }

    /// The canonical zero currency string; copying it is pointless, so the
    /// panel skips the clipboard for it.
    pub fn zero(&self) -> String {
        self.conversor.zero()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current_theme = theme;
    }

    pub fn set_focus(&mut self, field: Option<Field>) {
        self.focused = field;
    }

    pub fn set_input_text(&mut self, text: String) {
        self.input_text = text;
        self.recompute();
    }

    /// Stores the markup field through the live input mask and recomputes.
    pub fn set_markup_text(&mut self, raw: String) {
        self.markup_text = sanitize_markup(&raw);
        self.recompute();
    }

    /// Escape handler: clears whichever field has focus. Returns whether
    /// anything changed.
    pub fn clear_focused_field(&mut self) -> bool {
        match self.focused {
            Some(Field::Letters) => {
                self.input_text.clear();
                self.recompute();
                true
            }
            Some(Field::Markup) => {
                self.markup_text.clear();
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Re-runs the pipeline against the current inputs.
    pub fn recompute(&mut self) {
        let quote = self.conversor.quote(&self.input_text, &self.markup_text);
        self.price = quote.price;
        self.final_price = quote.final_price;
    }

    /// Shows a toast and returns its generation number; the auto-dismiss
    /// timer passes it back so a stale timer cannot clear a newer toast.
    pub fn show_notification(&mut self, message: String) -> u64 {
        self.notification_seq += 1;
        self.notification = Some(message);
        self.notification_seq
    }

    pub fn dismiss_notification(&mut self, seq: u64) {
        if self.notification_seq == seq {
            self.notification = None;
        }
    }
}

/// Input mask for the markup field: keeps digits and the two separator
/// characters, and caps the part after the comma at two digits. The mask
/// never rewrites input into validity; partially typed values stay
/// unparseable until finished.
pub fn sanitize_markup(raw: &str) -> String {
    let mut kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if let Some((integer, fraction)) = kept.split_once(',') {
        if fraction.len() > 2 {
            kept = format!("{integer},{}", &fraction[..2]);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(LocaleFormat::brazilian(), Theme::Dark, "pt-BR".to_string())
    }

    #[test]
    fn starts_at_canonical_zero() {
        let s = state();
        assert_eq!(s.price, "R$ 0,00");
        assert_eq!(s.final_price, "R$ 0,00");
    }

    #[test]
    fn input_change_recomputes_both_outputs() {
        let mut s = state();
        s.set_input_text("POO".to_string());
        s.set_markup_text("20".to_string());
        assert_eq!(s.price, "R$ 100,00");
        assert_eq!(s.final_price, "R$ 120,00");
    }

    #[test]
    fn escape_clears_only_the_focused_field() {
        let mut s = state();
        s.set_input_text("PE".to_string());
        s.set_markup_text("10".to_string());

        s.set_focus(Some(Field::Markup));
        assert!(s.clear_focused_field());
        assert_eq!(s.markup_text, "");
        assert_eq!(s.price, "R$ 12,00");
        assert_eq!(s.final_price, "R$ 12,00");

        s.set_focus(None);
        assert!(!s.clear_focused_field());
        assert_eq!(s.input_text, "PE");
    }

    #[test]
    fn stale_timer_does_not_dismiss_a_newer_toast() {
        let mut s = state();
        let first = s.show_notification("Valor copiado!".to_string());
        let second = s.show_notification("Valor copiado!".to_string());
        s.dismiss_notification(first);
        assert!(s.notification.is_some());
        s.dismiss_notification(second);
        assert!(s.notification.is_none());
    }

    #[test]
    fn markup_mask_strips_non_numeric_characters() {
        assert_eq!(sanitize_markup("2a0%"), "20");
        assert_eq!(sanitize_markup("abc"), "");
    }

    #[test]
    fn markup_mask_caps_comma_fraction_at_two_digits() {
        assert_eq!(sanitize_markup("12,345"), "12,34");
        assert_eq!(sanitize_markup("12,3"), "12,3");
        assert_eq!(sanitize_markup("12.345"), "12.345");
    }

    #[test]
    fn theme_names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.name()), Some(theme));
        }
        assert_eq!(Theme::from_name("neon"), None);
    }
}
