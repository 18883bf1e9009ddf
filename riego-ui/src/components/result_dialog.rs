//! Calculation report dialog.

use super::Modal;
use crate::state::AppState;
use dioxus::prelude::*;
use riego_core::report::{self, Report, ReportEntry};

#[derive(Props, Clone, PartialEq)]
pub struct ResultDialogProps {
    pub report: Report,
    pub on_close: EventHandler<()>,
}

#[component]
fn EntryRow(entry: ReportEntry) -> Element {
    let value = entry.value_with_unit();
    rsx! {
        li {
            style: "margin: 6px 0;",
            "{entry.icon} "
            strong { "{entry.label}: " }
            "{value}"
            if let Some(caption) = entry.caption {
                br {}
                small { style: "color: #666;", "{caption}" }
            }
        }
    }
}

/// The six report values with their captions and a closing tip.
/// Full width on mobile viewports.
#[component]
pub fn ResultDialog(props: ResultDialogProps) -> Element {
    let state = use_context::<AppState>();
    let on_close = props.on_close;
    rsx! {
        Modal {
            width: 600,
            full_width: state.is_mobile(),
            h2 { style: "margin: 0 0 12px 0;", {report::TITLE} }
            div {
                style: "text-align: left; font-size: 15px;",
                p { {report::INTRO} }
                ul {
                    style: "list-style: none; padding: 0;",
                    for entry in props.report.entries() {
                        EntryRow { key: "{entry.key}", entry: entry.clone() }
                    }
                }
                hr {}
                p { style: "color: #2e7d32;", {report::TIP} }
            }
            button {
                style: "margin-top: 12px; padding: 8px 18px; border: none; border-radius: 4px; background: #28a745; color: #fff; cursor: pointer;",
                onclick: move |_| on_close.call(()),
                {report::ACKNOWLEDGE}
            }
        }
    }
}
