//! Backend endpoint configuration and URL construction.

use url::Url;

use crate::{error::ApiError, source::types::ProjectId};

/// Base URL used when `PORTFOLIO_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
/// Upper bound for a single backend request.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Backend location and request policy.
pub struct ApiConfig {
    /// API root, for example `https://example.com/api`.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("PORTFOLIO_API_URL")
                .filter(|raw| !raw.trim().is_empty())
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Creates a config for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    /// Returns a copy with a different request timeout.
    pub fn with_timeout_ms(mut self, request_timeout_ms: u32) -> Self {
        self.request_timeout_ms = request_timeout_ms;
        self
    }

    /// `GET {base}/{collection}/`, for example `/projects/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the base URL cannot be parsed.
    pub fn collection_url(&self, collection: &str) -> Result<Url, ApiError> {
        self.endpoint(&[collection, ""])
    }

    /// `GET {base}/projects/{id}/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the base URL cannot be parsed.
    pub fn project_url(&self, project_id: &ProjectId) -> Result<Url, ApiError> {
        self.endpoint(&["projects", project_id.as_str(), ""])
    }

    /// `GET {base}/projects/{id}/source-code-tree/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the base URL cannot be parsed.
    pub fn source_tree_url(&self, project_id: &ProjectId) -> Result<Url, ApiError> {
        self.endpoint(&["projects", project_id.as_str(), "source-code-tree", ""])
    }

    /// `GET {base}/projects/{id}/source-code-file/?path={path}` with `path` percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the base URL cannot be parsed.
    pub fn source_file_url(&self, project_id: &ProjectId, path: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["projects", project_id.as_str(), "source-code-file", ""])?;
        url.query_pairs_mut().append_pair("path", path);
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(self.base_url.trim()).map_err(|err| ApiError::InvalidUrl {
            url: self.base_url.clone(),
            reason: err.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl {
                url: self.base_url.clone(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://127.0.0.1:8000/api")
    }

    #[test]
    fn source_tree_url_keeps_trailing_slash() {
        let id = ProjectId::from(4);
        assert_eq!(
            config().source_tree_url(&id).expect("url").as_str(),
            "http://127.0.0.1:8000/api/projects/4/source-code-tree/"
        );
    }

    #[test]
    fn source_file_url_encodes_path_query() {
        let id = ProjectId::from(4);
        assert_eq!(
            config()
                .source_file_url(&id, "src/a b&c.rs")
                .expect("url")
                .as_str(),
            "http://127.0.0.1:8000/api/projects/4/source-code-file/?path=src%2Fa+b%26c.rs"
        );
    }

    #[test]
    fn base_url_with_trailing_slash_does_not_double_separators() {
        let cfg = ApiConfig::new("https://example.com/api/");
        assert_eq!(
            cfg.collection_url("projects").expect("url").as_str(),
            "https://example.com/api/projects/"
        );
        assert_eq!(
            cfg.project_url(&ProjectId::from(1)).expect("url").as_str(),
            "https://example.com/api/projects/1/"
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let err = ApiConfig::new("not a url")
            .collection_url("projects")
            .expect_err("should fail");
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn timeout_override_is_applied() {
        assert_eq!(config().with_timeout_ms(500).request_timeout_ms, 500);
        assert_eq!(config().request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }
}
