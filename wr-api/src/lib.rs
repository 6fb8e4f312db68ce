//! HTTP gateway for the weather reports API.
//!
//! `ReportsApi` is the seam the pages and CLI commands depend on;
//! `HttpGateway` implements it with `reqwest`, which uses `fetch` when
//! compiled to WASM and hyper natively.

pub mod config;
pub mod gateway;

pub use config::ApiConfig;
pub use gateway::{HttpGateway, ReportsApi};
