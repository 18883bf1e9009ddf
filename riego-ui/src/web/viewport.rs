//! Reactive viewport size.

use super::WindowListener;
use dioxus::prelude::*;
use riego_core::viewport::Viewport;
use std::rc::Rc;

fn read_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

/// Signal tracking `window.innerWidth`/`innerHeight`.
///
/// Updated on every `resize`; the listener is removed when the calling
/// component unmounts.
pub fn use_viewport() -> Signal<Viewport> {
    let mut viewport = use_signal(read_viewport);
    use_hook(move || {
        Rc::new(WindowListener::new("resize", move || {
            viewport.set(read_viewport());
        }))
    });
    viewport
}
