//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals shared by both pages into a single
//! struct provided via `use_app_state_provider`. Child components retrieve it
//! with `use_context::<AppState>()`.

use crate::web::{use_viewport, LocalStorage};
use dioxus::prelude::*;
use riego_core::client::RiegoClient;
use riego_core::config::ClientConfig;
use riego_core::credentials::Credentials;
use riego_core::field::FormVariant;
use riego_core::notice::Notice;
use riego_core::report::Report;
use riego_core::session::Session;
use riego_core::viewport::Viewport;

/// The modal currently shown over the page, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Blocking alert with an OK button.
    Notice(Notice),
    /// Transient message without buttons; dismissed by whoever opened it.
    Toast(Notice),
    /// Calculation report with its acknowledge button.
    Report(Report),
}

impl Dialog {
    /// Whether the dialog blocks until the user acknowledges it.
    pub fn needs_acknowledge(&self) -> bool {
        !matches!(self, Dialog::Toast(_))
    }
}

/// Shared application state for the simulator.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session flag backed by local storage
    pub session: Signal<Session<LocalStorage>>,
    /// Accepted login pair
    pub credentials: Signal<Credentials>,
    /// HTTP client for the calculation service
    pub client: Signal<RiegoClient>,
    /// Which form layout to render
    pub variant: Signal<FormVariant>,
    /// Open dialog
    pub dialog: Signal<Option<Dialog>>,
    /// Window size, kept current on resize
    pub viewport: Signal<Viewport>,
}

impl AppState {
    pub fn new(viewport: Signal<Viewport>) -> Self {
        let config = ClientConfig::from_build_env();
        Self {
            session: Signal::new(Session::load(LocalStorage)),
            credentials: Signal::new(Credentials::default()),
            client: Signal::new(RiegoClient::with_defaults(&config)),
            variant: Signal::new(FormVariant::from_build_env()),
            dialog: Signal::new(None),
            viewport,
        }
    }

    pub fn show(&mut self, dialog: Dialog) {
        self.dialog.set(Some(dialog));
    }

    pub fn dismiss(&mut self) {
        self.dialog.set(None);
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.read().is_mobile()
    }
}

/// Create the AppState at the app root and provide it to descendants.
pub fn use_app_state_provider() -> AppState {
    let viewport = use_viewport();
    use_context_provider(|| AppState::new(viewport))
}
