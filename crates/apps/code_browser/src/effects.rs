//! Executes [`BrowserEffect`] fetch intents against a [`PortfolioApi`].

use portfolio_host::PortfolioApi;

use crate::reducer::{BrowserAction, BrowserEffect};

/// Runs one effect to completion and returns the action that reports its outcome.
///
/// The returned action carries the original ticket, so feeding it back through
/// [`crate::reduce_browser`] applies it only if the request is still current.
pub async fn execute_effect(api: &dyn PortfolioApi, effect: BrowserEffect) -> BrowserAction {
    match effect {
        BrowserEffect::FetchTree(request) => {
            let result = api.source_tree(&request.project_id).await;
            BrowserAction::TreeLoaded { request, result }
        }
        BrowserEffect::FetchFile(request) => {
            let result = api.source_file(&request.project_id, &request.path).await;
            BrowserAction::FileLoaded { request, result }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use portfolio_host::{ApiRequest, MemoryPortfolioApi, ProjectId, TreeNode, TREE_LOAD_MESSAGE};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::highlight::{highlight_lines, HighlightKind};
    use crate::reducer::{reduce_browser, BrowserState};

    /// Applies `action` and runs every resulting effect until the state settles.
    fn drive(state: &mut BrowserState, api: &dyn PortfolioApi, action: BrowserAction) {
        let mut queue = vec![action];
        while let Some(action) = queue.pop() {
            let effects = reduce_browser(state, action).expect("reduce");
            for effect in effects {
                queue.push(block_on(execute_effect(api, effect)));
            }
        }
    }

    fn project() -> ProjectId {
        ProjectId::from(1)
    }

    fn backend() -> MemoryPortfolioApi {
        MemoryPortfolioApi::default()
            .with_tree(
                project(),
                vec![TreeNode::directory(
                    "src",
                    "src",
                    vec![TreeNode::file("main.go", "src/main.go")],
                )],
            )
            .with_file(project(), "src/main.go", "package main\n\nfunc main() {}\n")
    }

    #[test]
    fn browsing_a_project_fetches_tree_then_file_on_demand() {
        let api = backend();
        let mut state = BrowserState::default();

        drive(&mut state, &api, BrowserAction::SetProject(Some(project())));
        assert_eq!(api.requests(), vec![ApiRequest::SourceTree(project())]);
        assert!(state.selected.is_none());

        let src = state.visible_rows()[0].id;
        drive(&mut state, &api, BrowserAction::ToggleDirectory { node: src });
        let rows = state.visible_rows();
        assert_eq!(rows[1].path, "src/main.go");
        assert_eq!(api.requests().len(), 1);

        drive(
            &mut state,
            &api,
            BrowserAction::SelectFile {
                path: rows[1].path.clone(),
            },
        );
        assert_eq!(
            api.requests().last(),
            Some(&ApiRequest::SourceFile {
                project_id: project(),
                path: "src/main.go".to_string(),
            })
        );

        let selected = state.selected.clone().expect("selected");
        assert_eq!(selected.language(), "go");
        let lines = highlight_lines(selected.language(), &selected.content);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0][0].kind, HighlightKind::Keyword);
        assert_eq!(lines[0][0].text, "package");
    }

    #[test]
    fn missing_tree_surfaces_load_error() {
        let api = MemoryPortfolioApi::default();
        let mut state = BrowserState::default();

        drive(&mut state, &api, BrowserAction::SetProject(Some(project())));

        assert!(!state.tree_loading);
        assert_eq!(state.tree_error.as_deref(), Some(TREE_LOAD_MESSAGE));
        assert!(state.visible_rows().is_empty());
    }

    #[test]
    fn missing_file_surfaces_path_error() {
        let api = backend();
        let mut state = BrowserState::default();
        drive(&mut state, &api, BrowserAction::SetProject(Some(project())));

        drive(
            &mut state,
            &api,
            BrowserAction::SelectFile {
                path: "src/gone.go".to_string(),
            },
        );

        let selected = state.selected.clone().expect("selected");
        assert_eq!(
            selected.error.as_deref(),
            Some("Unable to load file content: src/gone.go")
        );
    }

    #[test]
    fn close_and_reopen_hits_the_backend_again() {
        let api = backend();
        let mut state = BrowserState::default();
        drive(&mut state, &api, BrowserAction::SetProject(Some(project())));
        let select = || BrowserAction::SelectFile {
            path: "src/main.go".to_string(),
        };

        drive(&mut state, &api, select());
        drive(&mut state, &api, BrowserAction::CloseFile);
        drive(&mut state, &api, select());

        let file_fetches = api
            .requests()
            .into_iter()
            .filter(|request| matches!(request, ApiRequest::SourceFile { .. }))
            .count();
        assert_eq!(file_fetches, 2);
        assert!(state.selected.is_some());
    }
}
