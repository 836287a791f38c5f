//! `fetch`-backed [`PortfolioApi`] implementation.

use portfolio_host::{
    ApiConfig, ApiError, Competence, Diplome, Parcours, PortfolioApi, PortfolioApiFuture,
    PosteCible, Presentation, Project, ProjectId, SourceFileContent, TreeNode,
};
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug, Clone, Default)]
/// Browser portfolio API issuing GET requests against [`ApiConfig::base_url`].
pub struct WebPortfolioApi {
    config: ApiConfig,
}

impl WebPortfolioApi {
    /// Creates an adapter for `config`.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Active endpoint configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, url: Result<Url, ApiError>) -> Result<T, ApiError> {
        let url = url?;
        crate::bridge::get_json(url.as_str(), self.config.request_timeout_ms).await
    }
}

impl PortfolioApi for WebPortfolioApi {
    fn source_tree<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Vec<TreeNode>, ApiError>> {
        Box::pin(async move { self.get(self.config.source_tree_url(project_id)).await })
    }

    fn source_file<'a>(
        &'a self,
        project_id: &'a ProjectId,
        path: &'a str,
    ) -> PortfolioApiFuture<'a, Result<SourceFileContent, ApiError>> {
        Box::pin(async move { self.get(self.config.source_file_url(project_id, path)).await })
    }

    fn projects<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Project>, ApiError>> {
        Box::pin(async move { self.get(self.config.collection_url("projects")).await })
    }

    fn project<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Project, ApiError>> {
        Box::pin(async move { self.get(self.config.project_url(project_id)).await })
    }

    fn presentations<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Presentation>, ApiError>> {
        Box::pin(async move { self.get(self.config.collection_url("presentations")).await })
    }

    fn parcours<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Parcours>, ApiError>> {
        Box::pin(async move { self.get(self.config.collection_url("parcours")).await })
    }

    fn postes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<PosteCible>, ApiError>> {
        Box::pin(async move { self.get(self.config.collection_url("postes")).await })
    }

    fn diplomes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Diplome>, ApiError>> {
        Box::pin(async move { self.get(self.config.collection_url("diplomes")).await })
    }

    fn competences<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Competence>, ApiError>> {
        Box::pin(async move { self.get(self.config.collection_url("competences")).await })
    }
}
