//! Core types for the irrigation simulator.
//!
//! Everything here is free of DOM and runtime assumptions so the web UI and
//! the CLI share one implementation of the submission flow:
//! - `field` / `form`: the ten form fields, their catalogue and form state
//! - `credentials` / `session`: the login gate and the session-flag context
//! - `route` / `viewport`: view routing and layout breakpoints
//! - `result` / `report`: the opaque server reply and its display report
//! - `submit`: validation → request → outcome, with loading-flag cleanup
//! - `client` (feature `api`): reqwest implementation of the calculation service

pub mod config;
pub mod credentials;
pub mod error;
pub mod field;
pub mod form;
pub mod notice;
pub mod report;
pub mod result;
pub mod route;
pub mod session;
pub mod submit;
pub mod viewport;

#[cfg(feature = "api")]
pub mod client;

pub use error::{Result, RiegoError};
