//! Portfolio backend service contract and in-process adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use crate::{
    content::{Competence, Diplome, Parcours, PosteCible, Presentation, Project},
    error::ApiError,
    source::types::{ProjectId, SourceFileContent, TreeNode},
};

/// Object-safe boxed future used by [`PortfolioApi`] async methods.
pub type PortfolioApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Read-only access to the portfolio backend.
pub trait PortfolioApi {
    /// Fetches the source-tree forest for a project.
    fn source_tree<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Vec<TreeNode>, ApiError>>;

    /// Fetches the text content of one file in a project's source tree.
    fn source_file<'a>(
        &'a self,
        project_id: &'a ProjectId,
        path: &'a str,
    ) -> PortfolioApiFuture<'a, Result<SourceFileContent, ApiError>>;

    /// Lists all projects.
    fn projects<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Project>, ApiError>>;

    /// Fetches one project.
    fn project<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Project, ApiError>>;

    /// Lists presentation entries (the site uses the first one).
    fn presentations<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Presentation>, ApiError>>;

    /// Lists career timeline entries.
    fn parcours<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Parcours>, ApiError>>;

    /// Lists targeted roles.
    fn postes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<PosteCible>, ApiError>>;

    /// Lists degrees.
    fn diplomes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Diplome>, ApiError>>;

    /// Lists technology skills.
    fn competences<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Competence>, ApiError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Adapter for targets without a backend transport; every call fails.
pub struct NoopPortfolioApi;

impl NoopPortfolioApi {
    fn unsupported<T>(op: &str) -> Result<T, ApiError> {
        Err(ApiError::Unsupported(op.to_string()))
    }
}

impl PortfolioApi for NoopPortfolioApi {
    fn source_tree<'a>(
        &'a self,
        _project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Vec<TreeNode>, ApiError>> {
        Box::pin(async { Self::unsupported("source_tree") })
    }

    fn source_file<'a>(
        &'a self,
        _project_id: &'a ProjectId,
        _path: &'a str,
    ) -> PortfolioApiFuture<'a, Result<SourceFileContent, ApiError>> {
        Box::pin(async { Self::unsupported("source_file") })
    }

    fn projects<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Project>, ApiError>> {
        Box::pin(async { Self::unsupported("projects") })
    }

    fn project<'a>(
        &'a self,
        _project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Project, ApiError>> {
        Box::pin(async { Self::unsupported("project") })
    }

    fn presentations<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Presentation>, ApiError>> {
        Box::pin(async { Self::unsupported("presentations") })
    }

    fn parcours<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Parcours>, ApiError>> {
        Box::pin(async { Self::unsupported("parcours") })
    }

    fn postes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<PosteCible>, ApiError>> {
        Box::pin(async { Self::unsupported("postes") })
    }

    fn diplomes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Diplome>, ApiError>> {
        Box::pin(async { Self::unsupported("diplomes") })
    }

    fn competences<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Competence>, ApiError>> {
        Box::pin(async { Self::unsupported("competences") })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request observed by [`MemoryPortfolioApi`].
pub enum ApiRequest {
    /// Source-tree listing.
    SourceTree(ProjectId),
    /// Source-file read.
    SourceFile {
        /// Owning project.
        project_id: ProjectId,
        /// Requested path.
        path: String,
    },
    /// Project detail.
    Project(ProjectId),
    /// Collection listing (`projects`, `parcours`, ...).
    Collection(&'static str),
}

#[derive(Debug, Default)]
struct MemoryFixtures {
    trees: HashMap<ProjectId, Vec<TreeNode>>,
    files: HashMap<(ProjectId, String), String>,
    projects: Vec<Project>,
    presentations: Vec<Presentation>,
    parcours: Vec<Parcours>,
    postes: Vec<PosteCible>,
    diplomes: Vec<Diplome>,
    competences: Vec<Competence>,
    failing_collections: Vec<&'static str>,
    requests: Vec<ApiRequest>,
}

#[derive(Debug, Clone, Default)]
/// In-memory backend keyed by project and path; records every request.
///
/// Missing fixtures answer HTTP 404, mirroring the backend.
pub struct MemoryPortfolioApi {
    inner: Rc<RefCell<MemoryFixtures>>,
}

impl MemoryPortfolioApi {
    /// Registers the source tree served for `project_id`.
    pub fn with_tree(self, project_id: ProjectId, forest: Vec<TreeNode>) -> Self {
        self.inner.borrow_mut().trees.insert(project_id, forest);
        self
    }

    /// Registers the content served for `path` in `project_id`.
    pub fn with_file(
        self,
        project_id: ProjectId,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.inner
            .borrow_mut()
            .files
            .insert((project_id, path.into()), content.into());
        self
    }

    /// Registers the project list; single-project lookups resolve against it.
    pub fn with_projects(self, projects: Vec<Project>) -> Self {
        self.inner.borrow_mut().projects = projects;
        self
    }

    /// Registers the presentation entries.
    pub fn with_presentations(self, presentations: Vec<Presentation>) -> Self {
        self.inner.borrow_mut().presentations = presentations;
        self
    }

    /// Registers the career timeline.
    pub fn with_parcours(self, parcours: Vec<Parcours>) -> Self {
        self.inner.borrow_mut().parcours = parcours;
        self
    }

    /// Registers targeted roles.
    pub fn with_postes(self, postes: Vec<PosteCible>) -> Self {
        self.inner.borrow_mut().postes = postes;
        self
    }

    /// Registers degrees.
    pub fn with_diplomes(self, diplomes: Vec<Diplome>) -> Self {
        self.inner.borrow_mut().diplomes = diplomes;
        self
    }

    /// Registers skills.
    pub fn with_competences(self, competences: Vec<Competence>) -> Self {
        self.inner.borrow_mut().competences = competences;
        self
    }

    /// Makes a collection listing answer HTTP 500.
    pub fn failing_collection(self, collection: &'static str) -> Self {
        self.inner.borrow_mut().failing_collections.push(collection);
        self
    }

    /// Returns every request observed so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    fn record(&self, request: ApiRequest) {
        self.inner.borrow_mut().requests.push(request);
    }

    fn not_found(url: String) -> ApiError {
        ApiError::Status {
            status: 404,
            url,
            detail: None,
        }
    }

    fn collection<T: Clone>(
        &self,
        name: &'static str,
        select: impl FnOnce(&MemoryFixtures) -> &Vec<T>,
    ) -> Result<Vec<T>, ApiError> {
        self.record(ApiRequest::Collection(name));
        let fixtures = self.inner.borrow();
        if fixtures.failing_collections.contains(&name) {
            return Err(ApiError::Status {
                status: 500,
                url: format!("/{name}/"),
                detail: None,
            });
        }
        Ok(select(&*fixtures).clone())
    }
}

impl PortfolioApi for MemoryPortfolioApi {
    fn source_tree<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Vec<TreeNode>, ApiError>> {
        Box::pin(async move {
            self.record(ApiRequest::SourceTree(project_id.clone()));
            self.inner
                .borrow()
                .trees
                .get(project_id)
                .cloned()
                .ok_or_else(|| {
                    Self::not_found(format!("/projects/{project_id}/source-code-tree/"))
                })
        })
    }

    fn source_file<'a>(
        &'a self,
        project_id: &'a ProjectId,
        path: &'a str,
    ) -> PortfolioApiFuture<'a, Result<SourceFileContent, ApiError>> {
        Box::pin(async move {
            self.record(ApiRequest::SourceFile {
                project_id: project_id.clone(),
                path: path.to_string(),
            });
            self.inner
                .borrow()
                .files
                .get(&(project_id.clone(), path.to_string()))
                .map(|content| SourceFileContent {
                    path: Some(path.to_string()),
                    content: content.clone(),
                })
                .ok_or_else(|| {
                    Self::not_found(format!(
                        "/projects/{project_id}/source-code-file/?path={path}"
                    ))
                })
        })
    }

    fn projects<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Project>, ApiError>> {
        Box::pin(async move { self.collection("projects", |f| &f.projects) })
    }

    fn project<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> PortfolioApiFuture<'a, Result<Project, ApiError>> {
        Box::pin(async move {
            self.record(ApiRequest::Project(project_id.clone()));
            self.inner
                .borrow()
                .projects
                .iter()
                .find(|project| project.id.to_string() == project_id.as_str())
                .cloned()
                .ok_or_else(|| Self::not_found(format!("/projects/{project_id}/")))
        })
    }

    fn presentations<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Presentation>, ApiError>> {
        Box::pin(async move { self.collection("presentations", |f| &f.presentations) })
    }

    fn parcours<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Parcours>, ApiError>> {
        Box::pin(async move { self.collection("parcours", |f| &f.parcours) })
    }

    fn postes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<PosteCible>, ApiError>> {
        Box::pin(async move { self.collection("postes", |f| &f.postes) })
    }

    fn diplomes<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Diplome>, ApiError>> {
        Box::pin(async move { self.collection("diplomes", |f| &f.diplomes) })
    }

    fn competences<'a>(&'a self) -> PortfolioApiFuture<'a, Result<Vec<Competence>, ApiError>> {
        Box::pin(async move { self.collection("competences", |f| &f.competences) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn noop_portfolio_api_reports_unsupported() {
        let api = NoopPortfolioApi;
        let api_obj: &dyn PortfolioApi = &api;
        let id = ProjectId::from(1);

        let err = block_on(api_obj.source_tree(&id)).expect_err("tree should fail");
        assert_eq!(err, ApiError::Unsupported("source_tree".to_string()));
        let err = block_on(api_obj.source_file(&id, "a.rs")).expect_err("file should fail");
        assert!(err.to_string().contains("source_file"));
    }

    #[test]
    fn memory_api_serves_fixtures_and_records_requests() {
        let id = ProjectId::from(2);
        let api = MemoryPortfolioApi::default()
            .with_tree(id.clone(), vec![TreeNode::file("a.rs", "a.rs")])
            .with_file(id.clone(), "a.rs", "fn main() {}");

        let forest = block_on(api.source_tree(&id)).expect("tree");
        assert_eq!(forest, vec![TreeNode::file("a.rs", "a.rs")]);
        let file = block_on(api.source_file(&id, "a.rs")).expect("file");
        assert_eq!(file.content, "fn main() {}");

        assert_eq!(
            api.requests(),
            vec![
                ApiRequest::SourceTree(id.clone()),
                ApiRequest::SourceFile {
                    project_id: id,
                    path: "a.rs".to_string()
                },
            ]
        );
    }

    #[test]
    fn memory_api_answers_404_for_missing_fixtures() {
        let api = MemoryPortfolioApi::default();
        let err = block_on(api.source_file(&ProjectId::from(9), "nope.txt")).expect_err("404");
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[test]
    fn failing_collection_answers_500() {
        let api = MemoryPortfolioApi::default().failing_collection("diplomes");
        assert!(block_on(api.postes()).expect("postes").is_empty());
        let err = block_on(api.diplomes()).expect_err("diplomes should fail");
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }
}
