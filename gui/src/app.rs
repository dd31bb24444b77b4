#![allow(non_snake_case)]

use std::time::Duration;

use dioxus::html::input_data::keyboard_types::{Key, Modifiers};
use dioxus::prelude::*;
use tracing::warn;

use crate::components::converter_panel::ConverterPanel;
use crate::components::notification::NotificationToast;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::preferences::PreferenceStore;
use crate::state::app_state::{AppState, Theme};

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let store = use_context::<PreferenceStore>();

    // Stored preference wins, then the configured default, then dark.
    let state = use_context_provider({
        let config = config.clone();
        let store = store.clone();
        move || {
            let theme = store
                .load_theme()
                .or_else(|| Theme::from_name(&config.app.theme))
                .unwrap_or(Theme::Dark);
            Signal::new(AppState::new(
                config.locale.locale_format(),
                theme,
                config.app.language.clone(),
            ))
        }
    });

    let palette = ThemePalette::for_theme(state.read().current_theme);

    rsx! {
        div {
            class: "app-root",
            style: "background-color: {palette.background}; color: {palette.foreground};",
            tabindex: 0,
            onkeydown: {
                let store = store.clone();
                move |evt| handle_shortcut(evt, state, &store)
            },

            h1 { "Conversor de Preços" }
            p { class: "subtitle", style: "color: {palette.muted};",
                "Cifra PERNAMBUCO com markup"
            }

            ThemeSwitcher {}
            ConverterPanel {}
            NotificationToast {}
        }
    }
}

/// Ctrl/Cmd+1..3 switch themes, Escape clears the focused field.
fn handle_shortcut(evt: KeyboardEvent, mut state: Signal<AppState>, store: &PreferenceStore) {
    let mods = evt.modifiers();
    if mods.contains(Modifiers::CONTROL) || mods.contains(Modifiers::META) {
        let theme = match evt.key() {
            Key::Character(c) if c == "1" => Some(Theme::Light),
            Key::Character(c) if c == "2" => Some(Theme::Dark),
            Key::Character(c) if c == "3" => Some(Theme::Slate),
            _ => None,
        };
        if let Some(theme) = theme {
            select_theme(state, store, theme);
        }
    } else if evt.key() == Key::Escape {
        state.write().clear_focused_field();
    }
}

/// Applies a theme and persists it. Persistence is best-effort: a failed
/// write keeps the in-memory theme and logs a warning.
pub fn select_theme(mut state: Signal<AppState>, store: &PreferenceStore, theme: Theme) {
    state.write().set_theme(theme);
    if let Err(e) = store.save_theme(theme) {
        warn!("failed to persist theme preference: {e:#}");
    }
}

/// Shows a toast and schedules its dismissal. The generation number keeps
/// a stale timer from clearing a toast that replaced this one.
pub fn notify(mut state: Signal<AppState>, message: impl Into<String>) {
    let seq = state.write().show_notification(message.into());
    spawn(async move {
        tokio::time::sleep(Duration::from_secs(2)).await;
        state.write().dismiss_notification(seq);
    });
}
