// Theme switcher: one button per theme. The active theme is highlighted
// and every change is persisted through the preference store.
#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::app::select_theme;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::preferences::PreferenceStore;
use crate::state::app_state::{AppState, Theme};

#[component]
pub fn ThemeSwitcher() -> Element {
    let state = use_context::<Signal<AppState>>();
    let store = use_context::<PreferenceStore>();
    let config = use_context::<AppConfig>();

    let current = state.read().current_theme;
    let palette = ThemePalette::for_theme(current);

    rsx! {
        div { class: "theme-switcher",
            for theme in Theme::ALL {
                button {
                    key: "{theme:?}",
                    class: if theme == current { "theme-btn active" } else { "theme-btn" },
                    style: if theme == current {
                        format!(
                            "background-color: {}; color: {}; border-color: {};",
                            palette.primary, palette.background, palette.primary
                        )
                    } else {
                        format!(
                            "background-color: {}; color: {}; border-color: {};",
                            palette.surface, palette.muted, palette.border
                        )
                    },
                    title: format!(
                        "Tema {} ({})",
                        theme.label(),
                        config.shortcuts.for_theme(theme)
                    ),
                    onclick: {
                        let store = store.clone();
                        move |_| select_theme(state, &store, theme)
                    },
                    "{theme.label()}"
                }
            }
        }
    }
}
