//! Shared Dioxus components and browser bindings for the irrigation simulator.
//!
//! This crate provides:
//! - `web`: thin wrappers over browser APIs (local storage, fragment routing,
//!   viewport size, timers)
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: the login page, navigation shell, irrigation form and dialogs

pub mod components;
pub mod state;
pub mod web;
