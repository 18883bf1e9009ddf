use super::{IrrigationForm, NavBar};
use dioxus::prelude::*;

/// Main view: header plus the irrigation form.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        NavBar {}
        IrrigationForm {}
    }
}
