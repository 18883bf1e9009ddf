//! One labelled input of the irrigation form.

use dioxus::prelude::*;
use riego_core::field::{Field, FieldInput, FormVariant};

#[derive(Props, Clone, PartialEq)]
pub struct FieldControlProps {
    pub field: Field,
    pub variant: FormVariant,
    pub value: String,
    pub on_change: EventHandler<String>,
}

/// Select or numeric input depending on the field and form variant.
/// Every field is required; the value is reported exactly as entered.
#[component]
pub fn FieldControl(props: FieldControlProps) -> Element {
    let id = props.field.key();
    let label = props.field.label();
    let value = props.value.clone();
    let on_change = props.on_change;

    let control = match props.field.input(props.variant) {
        FieldInput::Select(choices) => rsx! {
            select {
                id: "{id}",
                style: "padding: 6px; border: 1px solid #ccc; border-radius: 4px;",
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                option { value: "", selected: value.is_empty(), "Selecciona una opción" }
                for choice in choices.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: value == choice.value,
                        "{choice.label}"
                    }
                }
            }
        },
        FieldInput::Number => rsx! {
            input {
                id: "{id}",
                r#type: "number",
                step: "any",
                style: "padding: 6px; border: 1px solid #ccc; border-radius: 4px;",
                value: "{value}",
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
        },
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "{id}",
                "{label} "
                span { style: "color: red;", "*" }
            }
            {control}
        }
    }
}
