// Transient confirmation toast. Rendering is driven purely by the state;
// the auto-dismiss timer lives in `app::notify`.
#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn NotificationToast() -> Element {
    let state = use_context::<Signal<AppState>>();

    let message = state.read().notification.clone()?;
    let palette = ThemePalette::for_theme(state.read().current_theme);

    rsx! {
        div {
            class: "notification",
            style: "background-color: {palette.success};",
            "{message}"
        }
    }
}
