// The conversion panel: the letter and markup inputs plus the two
// read-only currency outputs. Every edit re-runs the pipeline through
// AppState; double-clicking an output copies it.
#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::app::notify;
use crate::config::theme::ThemePalette;
use crate::services::clipboard;
use crate::state::app_state::{AppState, Field};

const CIPHER_HINT: &str = "Use as letras: P=1, E=2, R=3, N=4, A=5, M=6, B=7, U=8, C=9, O=0";
const MARKUP_HINT: &str = "Digite o percentual de markup (ex: 20 para 20%)";
const COPY_HINT: &str = "Duplo clique para copiar";

#[component]
pub fn ConverterPanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let palette = ThemePalette::for_theme(state.read().current_theme);
    let input_style = format!(
        "background-color: {}; color: {}; border-color: {};",
        palette.background, palette.foreground, palette.border
    );
    let output_style = format!(
        "background-color: {}; color: {}; border-color: {};",
        palette.background, palette.success, palette.border
    );

    let input_text = state.read().input_text.clone();
    let markup_text = state.read().markup_text.clone();
    let price = state.read().price.clone();
    let final_price = state.read().final_price.clone();

    rsx! {
        div {
            class: "panel",
            style: "background-color: {palette.surface}; border: 1px solid {palette.border};",

            div { class: "field",
                label { style: "color: {palette.muted};", "Texto cifrado" }
                input {
                    value: "{input_text}",
                    title: "{CIPHER_HINT}",
                    placeholder: "Ex.: PE,RN",
                    style: "{input_style}",
                    autofocus: true,
                    oninput: move |evt| state.write().set_input_text(evt.value()),
                    onfocusin: move |_| state.write().set_focus(Some(Field::Letters)),
                    onfocusout: move |_| state.write().set_focus(None),
                }
            }

            div { class: "field",
                label { style: "color: {palette.muted};", "Markup (%)" }
                input {
                    value: "{markup_text}",
                    title: "{MARKUP_HINT}",
                    placeholder: "Ex.: 20",
                    inputmode: "decimal",
                    style: "{input_style}",
                    oninput: move |evt| state.write().set_markup_text(evt.value()),
                    onfocusin: move |_| state.write().set_focus(Some(Field::Markup)),
                    onfocusout: move |_| state.write().set_focus(None),
                }
            }

            div { class: "field",
                label { style: "color: {palette.muted};", "Valor convertido" }
                input {
                    value: "{price}",
                    title: "{COPY_HINT}",
                    readonly: true,
                    style: "{output_style}",
                    ondoubleclick: move |_| copy_output(state, |s| s.price.clone()),
                }
            }

            div { class: "field",
                label { style: "color: {palette.muted};", "Preço final" }
                input {
                    value: "{final_price}",
                    title: "{COPY_HINT}",
                    readonly: true,
                    style: "{output_style}",
                    ondoubleclick: move |_| copy_output(state, |s| s.final_price.clone()),
                }
            }
        }
    }
}

/// Copies one of the output fields, skipping the zero placeholder, and
/// confirms with a toast when the clipboard accepted the value.
fn copy_output(state: Signal<AppState>, value: impl Fn(&AppState) -> String) {
    let (text, zero) = {
        let s = state.read();
        (value(&s), s.zero())
    };
    if text != zero && clipboard::copy(&text) {
        notify(state, "Valor copiado!");
    }
}
