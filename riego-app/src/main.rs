//! Irrigation simulator web app.
//!
//! Two views addressed by URL fragment:
//! - `#/`: login page
//! - `#/home`: navigation header and the irrigation form
//!
//! The calculation service URL and form layout are fixed at build time
//! through `RIEGO_API_URL` and `RIEGO_FORM_VARIANT`.

use dioxus::prelude::*;
use riego_core::route::AppRoute;
use riego_ui::components::{DialogHost, HomePage, LoginPage};
use riego_ui::state::use_app_state_provider;
use riego_ui::web::use_router_provider;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("riego-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_app_state_provider();
    let router = use_router_provider();

    rsx! {
        div {
            style: "font-family: system-ui, sans-serif; min-height: 100vh;",
            match router.current() {
                AppRoute::Login => rsx! { LoginPage {} },
                AppRoute::Home => rsx! { HomePage {} },
            }
            DialogHost {}
        }
    }
}
