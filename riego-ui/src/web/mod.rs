//! Browser API wrappers.
//!
//! All direct `web_sys` access lives here; components only see hooks and
//! plain Rust types.

mod listener;
pub mod router;
mod storage;
mod timer;
mod viewport;

pub use listener::WindowListener;
pub use router::{use_router, use_router_provider, RouterService};
pub use storage::LocalStorage;
pub use timer::sleep;
pub use viewport::use_viewport;
