//! Shared Dioxus components and browser bridge for the weather report pages.
//!
//! This crate provides:
//! - `browser`: query string access, URL replacement, navigation and local time formatting
//! - `state`: `AppState` with the toast list, which doubles as the pages' `Notifier`
//! - `components`: reusable RSX components (tables, filter panel, pagination, cards)

pub mod browser;
pub mod components;
pub mod state;
