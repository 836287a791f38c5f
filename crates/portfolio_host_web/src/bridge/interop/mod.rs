//! Target-routed request transport.
//!
//! The browser build issues `fetch` requests bounded by a timer; every other target reports the
//! transport as unsupported so host-side tests can exercise adapter parity.

use portfolio_host::ApiError;

use super::http::RawResponse;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_text(url: &str, timeout_ms: u32) -> Result<RawResponse, ApiError> {
    imp::fetch_text(url, timeout_ms).await
}
