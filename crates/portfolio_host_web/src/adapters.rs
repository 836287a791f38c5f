use portfolio_host::{
    ApiConfig, ApiError, Competence, Diplome, NoopPortfolioApi, Parcours, PortfolioApi,
    PortfolioApiFuture, PosteCible, Presentation, Project, ProjectId, SourceFileContent, TreeNode,
};

use crate::WebPortfolioApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected backend strategy.
pub enum ApiStrategy {
    /// Live backend over `fetch`.
    Browser,
    /// No backend; every request fails. Used for static previews.
    OfflineStub,
}

/// Returns the compile-time selected backend strategy for the active build.
pub const fn selected_api_strategy() -> ApiStrategy {
    #[cfg(feature = "offline-stub")]
    {
        ApiStrategy::OfflineStub
    }

    #[cfg(not(feature = "offline-stub"))]
    {
        ApiStrategy::Browser
    }
}

/// Adapter enum that erases the concrete backend behind [`PortfolioApi`].
#[derive(Debug, Clone)]
pub enum PortfolioApiAdapter {
    /// Live backend.
    Browser(WebPortfolioApi),
    /// Offline placeholder.
    OfflineStub(NoopPortfolioApi),
}

impl PortfolioApiAdapter {
    fn inner(&self) -> &dyn PortfolioApi {
        match self {
            Self::Browser(api) => api,
            Self::OfflineStub(api) => api,
        }
    }
}

impl PortfolioApi for PortfolioApiAdapter {
    fn source_tree<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Vec<TreeNode>, ApiError>> {
        self.inner().source_tree(project_id)
    }

    fn source_file<'a>(
        &'a self,
        project_id: &'a ProjectId,
        path: &'a str,
    ) -> PortfolioApiFuture<'a, Result<SourceFileContent, ApiError>> {
        self.inner().source_file(project_id, path)
    }

    fn projects<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Project>, ApiError>> {
        self.inner().projects()
    }

    fn project<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Project, ApiError>> {
        self.inner().project(project_id)
    }

    fn presentations<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Presentation>, ApiError>> {
        self.inner().presentations()
    }

    fn parcours<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Parcours>, ApiError>> {
        self.inner().parcours()
    }

    fn postes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<PosteCible>, ApiError>> {
        self.inner().postes()
    }

    fn diplomes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Diplome>, ApiError>> {
        self.inner().diplomes()
    }

    fn competences<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Competence>, ApiError>> {
        self.inner().competences()
    }
}

/// Builds the backend adapter for the compile-time selected strategy and default config.
pub fn portfolio_api() -> PortfolioApiAdapter {
    portfolio_api_with(ApiConfig::default())
}

/// Builds the backend adapter for the compile-time selected strategy and `config`.
pub fn portfolio_api_with(config: ApiConfig) -> PortfolioApiAdapter {
    match selected_api_strategy() {
        ApiStrategy::Browser => PortfolioApiAdapter::Browser(WebPortfolioApi::new(config)),
        ApiStrategy::OfflineStub => PortfolioApiAdapter::OfflineStub(NoopPortfolioApi),
    }
}
