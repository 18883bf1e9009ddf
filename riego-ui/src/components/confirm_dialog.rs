//! Two-button confirmation prompt.

use super::Modal;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    let on_confirm = props.on_confirm;
    let on_cancel = props.on_cancel;
    rsx! {
        Modal {
            div { style: "font-size: 40px; color: #f8bb86;", "⚠" }
            h2 { style: "margin: 8px 0;", "{props.title}" }
            p { style: "color: #545454;", "{props.text}" }
            div {
                style: "display: flex; gap: 12px; justify-content: center; margin-top: 16px;",
                button {
                    style: "padding: 8px 18px; border: none; border-radius: 4px; background: #3085d6; color: #fff; cursor: pointer;",
                    onclick: move |_| on_confirm.call(()),
                    "{props.confirm_label}"
                }
                button {
                    style: "padding: 8px 18px; border: none; border-radius: 4px; background: #d33; color: #fff; cursor: pointer;",
                    onclick: move |_| on_cancel.call(()),
                    "{props.cancel_label}"
                }
            }
        }
    }
}
