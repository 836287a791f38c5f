use portfolio_host::ApiError;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) fn decode_json<T: DeserializeOwned>(url: &str, response: RawResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            url: url.to_string(),
            detail: ApiError::backend_detail(&response.body),
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}
