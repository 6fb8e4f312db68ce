//! Core types and view controllers for the weather report front end.
//!
//! This crate is UI-agnostic and compiles both to WASM (for the Dioxus pages)
//! and natively (for the CLI and tests). It provides:
//! - `report` / `query`: the wire shapes exchanged with the reports API
//! - `envelope`: decoding of the uniform `{status, message, errorCode, data}` wrapper
//! - `notify`: the injected notification capability used by every controller
//! - `generate`: the report generation form
//! - `history`: URL-driven pagination, sort and filter state for the history view
//! - `selection`: the two-report selection used to start a comparison
//! - `comparison`: the comparison view state and trend derivation

pub mod comparison;
pub mod datetime;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod history;
pub mod notify;
pub mod query;
pub mod report;
pub mod selection;
