//! Window event listener tied to a Rust value's lifetime.

use dioxus_logger::tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Listens for `event` on `window` until dropped.
///
/// Hooks keep one inside `use_hook`, so the listener goes away with the
/// component that registered it.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::<dyn FnMut()>::new(callback);
        if let Some(window) = web_sys::window() {
            if let Err(e) =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                warn!("Failed to listen for {}: {:?}", event, e);
            }
        }
        Self { event, closure }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}
