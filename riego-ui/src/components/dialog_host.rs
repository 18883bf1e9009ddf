//! Renders the dialog held in AppState.

use super::{Modal, ResultDialog};
use crate::state::{AppState, Dialog};
use dioxus::prelude::*;
use riego_core::notice::{Notice, NoticeKind};

fn icon_color(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Warning => "#f8bb86",
        NoticeKind::Error => "#f27474",
        NoticeKind::Success => "#a5dc86",
    }
}

#[component]
fn NoticeBody(notice: Notice) -> Element {
    let color = icon_color(notice.kind);
    let icon = notice.kind.icon();
    rsx! {
        div { style: "font-size: 40px; color: {color};", "{icon}" }
        h2 { style: "margin: 8px 0;", "{notice.title}" }
        p { style: "color: #545454;", "{notice.text}" }
    }
}

/// Mount once at the app root. Alerts and the report close on their button;
/// toasts are closed by whoever opened them.
#[component]
pub fn DialogHost() -> Element {
    let mut state = use_context::<AppState>();
    let dialog = state.dialog.read().clone();

    match dialog {
        None => rsx! {},
        Some(Dialog::Report(report)) => rsx! {
            ResultDialog { report, on_close: move |_| state.dismiss() }
        },
        Some(Dialog::Toast(notice)) => rsx! {
            Modal { NoticeBody { notice } }
        },
        Some(Dialog::Notice(notice)) => rsx! {
            Modal {
                NoticeBody { notice }
                button {
                    style: "margin-top: 12px; padding: 8px 22px; border: none; border-radius: 4px; background: #7066e0; color: #fff; cursor: pointer;",
                    onclick: move |_| state.dismiss(),
                    "OK"
                }
            }
        },
    }
}
