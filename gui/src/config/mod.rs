// GUI configuration module
pub mod theme;

use anyhow::Result;
use serde::Deserialize;
use shared::LocaleFormat;

use crate::state::app_state::Theme;

/// Application configuration, deserialized from the embedded
/// `assets/config/default.json`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub locale: LocaleSettings,
    pub shortcuts: Shortcuts,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    /// Default theme name, used when the preference store has no entry.
    pub theme: String,
    pub language: String,
}

/// Currency formatting settings. Separators are JSON strings for
/// readability; only their first character is used.
#[derive(Debug, Deserialize, Clone)]
pub struct LocaleSettings {
    pub currency_prefix: String,
    pub thousand_separator: String,
    pub decimal_separator: String,
}

impl LocaleSettings {
    pub fn locale_format(&self) -> LocaleFormat {
        LocaleFormat {
            currency_prefix: self.currency_prefix.clone(),
            thousand_separator: self.thousand_separator.chars().next().unwrap_or('.'),
            decimal_separator: self.decimal_separator.chars().next().unwrap_or(','),
        }
    }
}

/// Human-readable shortcut names shown in the theme button tooltips.
#[derive(Debug, Deserialize, Clone)]
pub struct Shortcuts {
    pub theme_light: String,
    pub theme_dark: String,
    pub theme_slate: String,
}

impl Shortcuts {
    pub fn for_theme(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.theme_light,
            Theme::Dark => &self.theme_dark,
            Theme::Slate => &self.theme_slate,
        }
    }
}

impl AppConfig {
    /// Loads the embedded default configuration. The file ships inside the
    /// binary, so a failure here means a broken build.
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }
}
