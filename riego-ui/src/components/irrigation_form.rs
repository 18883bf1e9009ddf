//! The irrigation form and its submission.

use super::FieldControl;
use crate::state::{AppState, Dialog};
use dioxus::prelude::*;
use riego_core::field::Section;
use riego_core::form::FormState;
use riego_core::submit::submit;

/// Ten required fields grouped by section.
///
/// Submission validates in field order, posts once and opens either the
/// report or a notice. While the request is pending the button is disabled
/// and reads "Calculando...".
#[component]
pub fn IrrigationForm() -> Element {
    let mut state = use_context::<AppState>();
    let mut form = use_signal(FormState::new);
    let mut loading = use_signal(|| false);
    let variant = (state.variant)();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let snapshot = form.read().clone();
        let client = state.client.read().clone();
        spawn(async move {
            let outcome = submit(&snapshot, &client, move |on| loading.set(on)).await;
            if let Some(report) = outcome.report() {
                state.show(Dialog::Report(report));
            } else if let Some(notice) = outcome.notice() {
                state.show(Dialog::Notice(notice));
            }
        });
    };

    let columns = if state.is_mobile() { "1fr" } else { "1fr 1fr" };
    let button_label = if loading() { "Calculando..." } else { "CONSULTAR" };

    rsx! {
        div {
            style: "max-width: 900px; margin: 24px auto; padding: 0 16px;",
            h3 { style: "text-align: center;", "CONOZCAMOS MÁS TU CULTIVO" }
            p {
                style: "text-align: center; margin-bottom: 24px;",
                "DILIGENCIA EL SIGUIENTE FORMULARIO PARA CALCULAR LAS NECESIDADES DE AGUA EN TU CULTIVO. ("
                span { style: "color: red;", "*" }
                " Campos obligatorios)"
            }
            form {
                onsubmit: on_submit,
                for section in Section::ALL {
                    h5 { {section.title()} }
                    div {
                        style: "display: grid; grid-template-columns: {columns}; gap: 12px; margin-bottom: 24px;",
                        for field in section.fields().iter().copied() {
                            FieldControl {
                                key: "{field}",
                                field,
                                variant,
                                value: form.read().get(field).to_string(),
                                on_change: move |value: String| form.write().set(field, value),
                            }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    style: "width: 100%; padding: 10px; border: none; border-radius: 4px; background: #2e7d32; color: #fff; cursor: pointer;",
                    "{button_label}"
                }
            }
        }
    }
}
