//! Browser (`wasm32`) implementation of the [`portfolio_host`] API contract.
//!
//! Requests are issued through the `fetch` API and decoded into the shared wire models. Transport
//! glue is split under `bridge/`:
//! - `bridge::http` (status and payload decoding)
//! - `bridge::interop` (wasm/non-wasm transport)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time backend selection and the adapter factory used by the site.
pub mod adapters;
pub mod api;
mod bridge;

pub use adapters::{
    portfolio_api, portfolio_api_with, selected_api_strategy, ApiStrategy, PortfolioApiAdapter,
};
pub use api::WebPortfolioApi;
