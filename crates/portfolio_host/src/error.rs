//! Error types for backend requests and source-browser loads.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Transport-level failure of a backend request.
pub enum ApiError {
    /// Configured base URL could not be turned into an endpoint URL.
    #[error("invalid API url `{url}`: {reason}")]
    InvalidUrl {
        /// Offending URL.
        url: String,
        /// Parser message.
        reason: String,
    },
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("`{url}` returned HTTP {status}{}", detail_suffix(.detail))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
        /// Backend `error` message, when the body carried one.
        detail: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("malformed response payload: {0}")]
    Decode(String),
    /// No response arrived within the configured bound.
    #[error("`{url}` timed out after {timeout_ms} ms")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Elapsed bound in milliseconds.
        timeout_ms: u32,
    },
    /// Transport is not available on this target.
    #[error("portfolio API unavailable: {0}")]
    Unsupported(String),
}

impl ApiError {
    /// Extracts the `{"error": "..."}` message the backend attaches to failures.
    pub fn backend_detail(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("error")?
            .as_str()
            .map(str::to_string)
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// User-facing message shown when the source tree cannot be loaded.
pub const TREE_LOAD_MESSAGE: &str = "Unable to load the project's source tree.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Source-browser load failure, recovered at the component boundary.
///
/// Network failures, HTTP error statuses, and malformed payloads all collapse into the same
/// variant; the underlying [`ApiError`] is kept for logging only.
pub enum SourceLoadError {
    /// The tree listing request failed.
    #[error("Unable to load the project's source tree.")]
    TreeLoad {
        /// Transport failure.
        source: ApiError,
    },
    /// The file-content request failed.
    #[error("Unable to load file content: {path}")]
    FileLoad {
        /// Path whose content was requested.
        path: String,
        /// Transport failure.
        source: ApiError,
    },
}

impl SourceLoadError {
    /// Wraps a transport failure of the tree request.
    pub fn tree(source: ApiError) -> Self {
        Self::TreeLoad { source }
    }

    /// Wraps a transport failure of a file request for `path`.
    pub fn file(path: impl Into<String>, source: ApiError) -> Self {
        Self::FileLoad {
            path: path.into(),
            source,
        }
    }

    /// Static message suitable for display.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Underlying transport failure.
    pub fn cause(&self) -> &ApiError {
        match self {
            Self::TreeLoad { source } | Self::FileLoad { source, .. } => source,
        }
    }
}
