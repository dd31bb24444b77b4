// Theme specific configurations (colors per theme)
use serde::{Deserialize, Serialize};

use crate::state::app_state::Theme;

/// Color palette for one theme. Components read the active palette and
/// style themselves inline; the stylesheet only carries layout and
/// animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    pub primary: String,
    pub success: String,
    pub border: String,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::default_light(),
            Theme::Dark => Self::default_dark(),
            Theme::Slate => Self::default_slate(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            surface: "#2a2a2a".to_string(),
            muted: "#8a8d93".to_string(),
            primary: "#007acc".to_string(),
            success: "#26a69a".to_string(),
            border: "#3c3c3c".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#1f1f1f".to_string(),
            surface: "#f4f4f5".to_string(),
            muted: "#6b7280".to_string(),
            primary: "#007acc".to_string(),
            success: "#009688".to_string(),
            border: "#d4d4d8".to_string(),
        }
    }

    pub fn default_slate() -> Self {
        Self {
            background: "#0f172a".to_string(),
            foreground: "#e2e8f0".to_string(),
            surface: "#1e293b".to_string(),
            muted: "#94a3b8".to_string(),
            primary: "#38bdf8".to_string(),
            success: "#34d399".to_string(),
            border: "#334155".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_its_own_palette() {
        let backgrounds: Vec<String> = Theme::ALL
            .iter()
            .map(|t| ThemePalette::for_theme(*t).background)
            .collect();
        assert_eq!(backgrounds.len(), 3);
        assert!(backgrounds.windows(2).all(|w| w[0] != w[1]));
    }
}
