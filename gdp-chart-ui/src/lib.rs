//! Shared Dioxus state and components for the GDP dashboard.
//!
//! This crate provides:
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: reusable RSX components (selector, charts, table, etc.)

pub mod components;
pub mod state;
