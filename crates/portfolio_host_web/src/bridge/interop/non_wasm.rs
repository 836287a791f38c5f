use super::*;

fn unsupported() -> ApiError {
    ApiError::Unsupported("fetch is only available when compiled for wasm32".to_string())
}

pub async fn fetch_text(_url: &str, _timeout_ms: u32) -> Result<RawResponse, ApiError> {
    Err(unsupported())
}
