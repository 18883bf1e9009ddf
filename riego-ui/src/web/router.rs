//! Fragment router.
//!
//! The current route is a signal driven by `location.hash`. Navigation
//! writes the hash and the signal together; `hashchange` (back/forward,
//! typed URLs) re-reads the hash. No route is guarded.

use super::WindowListener;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use riego_core::route::AppRoute;
use std::rc::Rc;

fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn set_location_hash(route: AppRoute) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(route.path()) {
            warn!("[Router] Failed to set hash {}: {:?}", route, e);
        }
    }
}

/// Routing handle shared through context.
#[derive(Clone, Copy)]
pub struct RouterService {
    current: Signal<AppRoute>,
}

impl RouterService {
    /// Current route. Reading it subscribes the caller.
    pub fn current(&self) -> AppRoute {
        (self.current)()
    }

    pub fn navigate(&mut self, route: AppRoute) {
        info!("[Router] {} -> {}", self.current.peek(), route);
        set_location_hash(route);
        self.current.set(route);
    }
}

/// Create the router at the app root and provide it to descendants.
pub fn use_router_provider() -> RouterService {
    let mut current = use_signal(|| AppRoute::from_fragment(&location_hash()));
    use_hook(move || {
        Rc::new(WindowListener::new("hashchange", move || {
            let route = AppRoute::from_fragment(&location_hash());
            if *current.peek() != route {
                current.set(route);
            }
        }))
    });
    use_context_provider(|| RouterService { current })
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
}
