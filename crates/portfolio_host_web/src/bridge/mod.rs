//! Backend transport for `portfolio_host_web` service adapters.
//!
//! `interop` performs the raw request on the active target; `http` turns the raw response into
//! typed payloads or [`ApiError`] values.

mod http;
mod interop;

use portfolio_host::ApiError;
use serde::de::DeserializeOwned;

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str, timeout_ms: u32) -> Result<T, ApiError> {
    let response = interop::fetch_text(url, timeout_ms).await?;
    http::decode_json(url, response)
}
