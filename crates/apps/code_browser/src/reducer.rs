//! Browser actions, fetch intents, and transition logic for the code browser.
//!
//! Every fetch is issued with a ticket (`project`, optional `path`, `generation`). A result is
//! applied only while its ticket is still the pending one; anything else is a stale response
//! and is dropped. Generations come from one counter, so two requests never share a ticket even
//! when they target the same key.

use leptos::logging::{log, warn};
use portfolio_host::{ApiError, ProjectId, SourceFileContent, SourceLoadError, TreeNode};
use thiserror::Error;

use crate::model::{
    ExpansionState, NodeId, SelectedFile, SourceTree, TreeAnomaly, VisibleRow,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ticket for an outstanding source-tree fetch.
pub struct TreeRequest {
    /// Project the tree was requested for.
    pub project_id: ProjectId,
    /// Issue order.
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ticket for an outstanding file-content fetch.
pub struct FileRequest {
    /// Owning project.
    pub project_id: ProjectId,
    /// Requested path.
    pub path: String,
    /// Issue order.
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_browser`].
pub enum BrowserAction {
    /// Switch to another project (or none). Same id is a no-op.
    SetProject(Option<ProjectId>),
    /// A source-tree fetch resolved.
    TreeLoaded {
        /// Ticket the fetch was issued with.
        request: TreeRequest,
        /// Backend outcome.
        result: Result<Vec<TreeNode>, ApiError>,
    },
    /// Flip a directory row between collapsed and expanded.
    ToggleDirectory {
        /// Row to flip.
        node: NodeId,
    },
    /// A leaf row was activated.
    SelectFile {
        /// Path to load.
        path: String,
    },
    /// A file-content fetch resolved.
    FileLoaded {
        /// Ticket the fetch was issued with.
        request: FileRequest,
        /// Backend outcome.
        result: Result<SourceFileContent, ApiError>,
    },
    /// Dismiss the viewer.
    CloseFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_browser`].
pub enum BrowserEffect {
    /// Fetch the source tree; resolve with [`BrowserAction::TreeLoaded`].
    FetchTree(TreeRequest),
    /// Fetch one file; resolve with [`BrowserAction::FileLoaded`].
    FetchFile(FileRequest),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not fit the current state.
pub enum BrowserError {
    /// A file was selected while no project is active.
    #[error("no project is selected")]
    NoProject,
    /// A file was selected with an empty path.
    #[error("file path is empty")]
    EmptyPath,
    /// The node id does not belong to the loaded tree.
    #[error("tree node {0:?} not found")]
    UnknownNode(NodeId),
    /// Only directories expand.
    #[error("`{path}` is not a directory")]
    NotADirectory {
        /// Offending path.
        path: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// All state owned by one code browser instance.
pub struct BrowserState {
    /// Active project.
    pub project_id: Option<ProjectId>,
    /// Loaded forest; empty while loading and after a failure.
    pub tree: SourceTree,
    /// A tree fetch is outstanding.
    pub tree_loading: bool,
    /// User-facing tree failure.
    pub tree_error: Option<String>,
    /// Expanded directories.
    pub expansion: ExpansionState,
    /// File shown by the viewer.
    pub selected: Option<SelectedFile>,
    pending_tree: Option<TreeRequest>,
    pending_file: Option<FileRequest>,
    generation: u64,
}

impl BrowserState {
    /// Visible rows for the tree panel.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        self.tree.visible_rows(&self.expansion)
    }

    /// Selected path, if any.
    pub fn selected_path(&self) -> Option<&str> {
        self.selected.as_ref().map(|file| file.path.as_str())
    }

    /// Returns `true` once a tree has been applied and it had no nodes.
    pub fn tree_is_empty(&self) -> bool {
        self.project_id.is_some()
            && !self.tree_loading
            && self.tree_error.is_none()
            && self.tree.is_empty()
    }

    /// Outstanding tree ticket.
    pub fn pending_tree(&self) -> Option<&TreeRequest> {
        self.pending_tree.as_ref()
    }

    /// Outstanding file ticket.
    pub fn pending_file(&self) -> Option<&FileRequest> {
        self.pending_file.as_ref()
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn reset_for_project(&mut self, project_id: Option<ProjectId>) {
        self.project_id = project_id;
        self.tree = SourceTree::default();
        self.tree_loading = false;
        self.tree_error = None;
        self.expansion.clear();
        self.selected = None;
        self.pending_tree = None;
        self.pending_file = None;
    }
}

/// Applies a [`BrowserAction`] and collects resulting fetch intents.
///
/// # Errors
///
/// Returns a [`BrowserError`] when the action does not fit the current state. State is left
/// untouched in that case.
pub fn reduce_browser(
    state: &mut BrowserState,
    action: BrowserAction,
) -> Result<Vec<BrowserEffect>, BrowserError> {
    let mut effects = Vec::new();
    match action {
        BrowserAction::SetProject(project_id) => {
            if state.project_id == project_id {
                return Ok(effects);
            }
            state.reset_for_project(project_id.clone());
            if let Some(project_id) = project_id {
                let request = TreeRequest {
                    project_id,
                    generation: state.next_generation(),
                };
                state.tree_loading = true;
                state.pending_tree = Some(request.clone());
                effects.push(BrowserEffect::FetchTree(request));
            }
        }
        BrowserAction::TreeLoaded { request, result } => {
            if state.pending_tree.as_ref() != Some(&request) {
                log!(
                    "discarding stale source tree for project {} (generation {})",
                    request.project_id,
                    request.generation
                );
                return Ok(effects);
            }
            state.pending_tree = None;
            state.tree_loading = false;
            state.expansion.clear();
            match result {
                Ok(forest) => {
                    let tree = SourceTree::from_forest(forest);
                    for anomaly in tree.anomalies() {
                        match anomaly {
                            TreeAnomaly::DuplicatePath { path } => {
                                warn!("source tree lists `{path}` more than once; keeping the last entry")
                            }
                            TreeAnomaly::UnrecognizedKind { path } => {
                                warn!("source tree node `{path}` has an unrecognized type; showing it as a file")
                            }
                        }
                    }
                    state.tree = tree;
                    state.tree_error = None;
                }
                Err(err) => {
                    let err = SourceLoadError::tree(err);
                    warn!("{err}: {}", err.cause());
                    state.tree = SourceTree::default();
                    state.tree_error = Some(err.user_message());
                }
            }
        }
        BrowserAction::ToggleDirectory { node } => {
            let entry = state.tree.node(node).ok_or(BrowserError::UnknownNode(node))?;
            if !entry.kind.is_directory() {
                return Err(BrowserError::NotADirectory {
                    path: entry.path.clone(),
                });
            }
            let path = entry.path.clone();
            state.expansion.toggle(&path);
        }
        BrowserAction::SelectFile { path } => {
            if path.is_empty() {
                return Err(BrowserError::EmptyPath);
            }
            let project_id = state.project_id.clone().ok_or(BrowserError::NoProject)?;
            let request = FileRequest {
                project_id,
                path: path.clone(),
                generation: state.next_generation(),
            };
            state.selected = Some(SelectedFile::loading(path));
            state.pending_file = Some(request.clone());
            effects.push(BrowserEffect::FetchFile(request));
        }
        BrowserAction::FileLoaded { request, result } => {
            if state.pending_file.as_ref() != Some(&request) {
                log!(
                    "discarding stale content for `{}` (generation {})",
                    request.path,
                    request.generation
                );
                return Ok(effects);
            }
            state.pending_file = None;
            let Some(selected) = state.selected.as_mut() else {
                return Ok(effects);
            };
            selected.loading = false;
            match result {
                Ok(file) => {
                    selected.content = file.content;
                    selected.error = None;
                }
                Err(err) => {
                    let err = SourceLoadError::file(request.path, err);
                    warn!("{err}: {}", err.cause());
                    selected.content.clear();
                    selected.error = Some(err.user_message());
                }
            }
        }
        BrowserAction::CloseFile => {
            state.selected = None;
            state.pending_file = None;
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use portfolio_host::TREE_LOAD_MESSAGE;
    use pretty_assertions::assert_eq;

    use super::*;

    fn project(id: &str) -> ProjectId {
        ProjectId::parse(id).expect("project id")
    }

    fn go_forest() -> Vec<TreeNode> {
        vec![TreeNode::directory(
            "src",
            "src",
            vec![TreeNode::file("main.go", "src/main.go")],
        )]
    }

    fn tree_request(effects: &[BrowserEffect]) -> TreeRequest {
        match effects {
            [BrowserEffect::FetchTree(request)] => request.clone(),
            other => panic!("expected one tree fetch, got {other:?}"),
        }
    }

    fn file_request(effects: &[BrowserEffect]) -> FileRequest {
        match effects {
            [BrowserEffect::FetchFile(request)] => request.clone(),
            other => panic!("expected one file fetch, got {other:?}"),
        }
    }

    fn loaded(project_id: &str, forest: Vec<TreeNode>) -> BrowserState {
        let mut state = BrowserState::default();
        let effects = reduce_browser(
            &mut state,
            BrowserAction::SetProject(Some(project(project_id))),
        )
        .expect("set project");
        let request = tree_request(&effects);
        reduce_browser(
            &mut state,
            BrowserAction::TreeLoaded {
                request,
                result: Ok(forest),
            },
        )
        .expect("tree loaded");
        state
    }

    fn select(state: &mut BrowserState, path: &str) -> FileRequest {
        let effects = reduce_browser(
            state,
            BrowserAction::SelectFile {
                path: path.to_string(),
            },
        )
        .expect("select file");
        file_request(&effects)
    }

    fn content(path: &str, text: &str) -> Result<SourceFileContent, ApiError> {
        Ok(SourceFileContent {
            path: Some(path.to_string()),
            content: text.to_string(),
        })
    }

    fn not_found(url: &str) -> ApiError {
        ApiError::Status {
            status: 404,
            url: url.to_string(),
            detail: None,
        }
    }

    #[test]
    fn absent_project_is_a_no_op() {
        let mut state = BrowserState::default();
        let effects = reduce_browser(&mut state, BrowserAction::SetProject(None)).expect("none");

        assert!(effects.is_empty());
        assert!(!state.tree_loading);
        assert!(state.tree.is_empty());
        assert!(!state.tree_is_empty());
    }

    #[test]
    fn set_project_starts_single_tree_fetch() {
        let mut state = BrowserState::default();
        let effects =
            reduce_browser(&mut state, BrowserAction::SetProject(Some(project("7")))).expect("set");

        assert_eq!(
            effects,
            vec![BrowserEffect::FetchTree(TreeRequest {
                project_id: project("7"),
                generation: 1,
            })]
        );
        assert!(state.tree_loading);

        let again =
            reduce_browser(&mut state, BrowserAction::SetProject(Some(project("7")))).expect("same");
        assert!(again.is_empty());
    }

    #[test]
    fn end_to_end_go_scenario() {
        let mut state = loaded("1", go_forest());
        assert!(!state.tree_loading);
        assert!(state.selected.is_none());

        let rows = state.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "src");
        assert!(!rows[0].expanded);

        reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: rows[0].id })
            .expect("toggle");
        let rows = state.visible_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].expanded);
        assert_eq!((rows[1].name.as_str(), rows[1].depth), ("main.go", 1));

        let request = select(&mut state, &rows[1].path);
        assert_eq!(request.path, "src/main.go");
        assert_eq!(request.project_id, project("1"));
        assert!(state.selected.as_ref().is_some_and(|file| file.loading));

        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request,
                result: content("src/main.go", "package main\n"),
            },
        )
        .expect("file loaded");
        let selected = state.selected.clone().expect("selected");
        assert_eq!(selected.content, "package main\n");
        assert!(!selected.loading);
        assert_eq!(selected.error, None);
        assert_eq!(selected.language(), "go");
    }

    #[test]
    fn tree_failure_sets_message_and_clears_tree() {
        let mut state = BrowserState::default();
        let request = tree_request(
            &reduce_browser(&mut state, BrowserAction::SetProject(Some(project("3")))).expect("set"),
        );
        reduce_browser(
            &mut state,
            BrowserAction::TreeLoaded {
                request,
                result: Err(ApiError::Network("offline".to_string())),
            },
        )
        .expect("apply failure");

        assert!(!state.tree_loading);
        assert!(state.tree.is_empty());
        assert_eq!(state.tree_error.as_deref(), Some(TREE_LOAD_MESSAGE));
        assert!(!state.tree_is_empty());
    }

    #[test]
    fn malformed_and_status_failures_share_the_tree_message() {
        for err in [
            ApiError::Decode("expected value".to_string()),
            not_found("/projects/3/source-code-tree/"),
        ] {
            let mut state = BrowserState::default();
            let request = tree_request(
                &reduce_browser(&mut state, BrowserAction::SetProject(Some(project("3"))))
                    .expect("set"),
            );
            reduce_browser(
                &mut state,
                BrowserAction::TreeLoaded {
                    request,
                    result: Err(err),
                },
            )
            .expect("apply failure");
            assert_eq!(state.tree_error.as_deref(), Some(TREE_LOAD_MESSAGE));
        }
    }

    #[test]
    fn stale_tree_for_previous_project_is_discarded() {
        let mut state = BrowserState::default();
        let first = tree_request(
            &reduce_browser(&mut state, BrowserAction::SetProject(Some(project("1")))).expect("a"),
        );
        let second = tree_request(
            &reduce_browser(&mut state, BrowserAction::SetProject(Some(project("2")))).expect("b"),
        );

        reduce_browser(
            &mut state,
            BrowserAction::TreeLoaded {
                request: second,
                result: Ok(vec![TreeNode::file("b.py", "b.py")]),
            },
        )
        .expect("second");
        reduce_browser(
            &mut state,
            BrowserAction::TreeLoaded {
                request: first,
                result: Ok(vec![TreeNode::file("a.js", "a.js")]),
            },
        )
        .expect("stale first");

        let rows = state.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].path, "b.py");
        assert_eq!(state.project_id, Some(project("2")));
    }

    #[test]
    fn stale_tree_failure_does_not_clobber_loading_state() {
        let mut state = BrowserState::default();
        let first = tree_request(
            &reduce_browser(&mut state, BrowserAction::SetProject(Some(project("1")))).expect("a"),
        );
        reduce_browser(&mut state, BrowserAction::SetProject(Some(project("2")))).expect("b");

        reduce_browser(
            &mut state,
            BrowserAction::TreeLoaded {
                request: first,
                result: Err(ApiError::Network("late".to_string())),
            },
        )
        .expect("stale");

        assert!(state.tree_loading);
        assert_eq!(state.tree_error, None);
    }

    #[test]
    fn project_change_resets_expansion_and_selection() {
        let mut state = loaded("1", go_forest());
        let src = state.visible_rows()[0].id;
        reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: src }).expect("toggle");
        let _ = select(&mut state, "src/main.go");

        reduce_browser(&mut state, BrowserAction::SetProject(Some(project("2")))).expect("switch");

        assert!(state.expansion.is_empty());
        assert!(state.selected.is_none());
        assert!(state.pending_file().is_none());
        assert!(state.tree.is_empty());
        assert!(state.tree_loading);
    }

    #[test]
    fn file_result_from_previous_project_is_discarded() {
        let mut state = loaded("1", go_forest());
        let old = select(&mut state, "src/main.go");

        let effects = reduce_browser(&mut state, BrowserAction::SetProject(Some(project("2"))))
            .expect("switch");
        reduce_browser(
            &mut state,
            BrowserAction::TreeLoaded {
                request: tree_request(&effects),
                result: Ok(go_forest()),
            },
        )
        .expect("tree 2");

        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request: old.clone(),
                result: content("src/main.go", "package one"),
            },
        )
        .expect("late result");
        assert!(state.selected.is_none());

        let current = select(&mut state, "src/main.go");
        assert_eq!(current.path, old.path);
        assert_ne!(current, old);
        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request: old,
                result: content("src/main.go", "package one"),
            },
        )
        .expect("late result again");

        let selected = state.selected.clone().expect("selected");
        assert!(selected.loading);
        assert_eq!(selected.content, "");
        assert_eq!(state.pending_file(), Some(&current));
    }

    #[test]
    fn clearing_project_drops_everything_without_fetching() {
        let mut state = loaded("1", go_forest());
        let effects = reduce_browser(&mut state, BrowserAction::SetProject(None)).expect("clear");

        assert!(effects.is_empty());
        assert_eq!(state.project_id, None);
        assert!(state.tree.is_empty());
        assert!(state.pending_tree().is_none());
    }

    #[test]
    fn toggling_twice_restores_collapsed_and_leaves_siblings_alone() {
        let forest = vec![
            TreeNode::directory("a", "a", vec![TreeNode::directory("a1", "a/a1", Vec::new())]),
            TreeNode::directory("b", "b", Vec::new()),
        ];
        let mut state = loaded("1", forest);
        let rows = state.visible_rows();
        let (a, b) = (rows[0].id, rows[1].id);

        reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: b }).expect("b");
        reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: a }).expect("a open");
        let a1 = state.visible_rows()[1].id;
        reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: a1 }).expect("a1");
        reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: a }).expect("a close");

        assert!(!state.expansion.is_expanded("a"));
        assert!(state.expansion.is_expanded("a/a1"));
        assert!(state.expansion.is_expanded("b"));
    }

    #[test]
    fn toggling_a_file_or_unknown_node_is_rejected() {
        let mut state = loaded("1", go_forest());
        let src = state.visible_rows()[0].id;
        reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: src }).expect("open");
        let file = state.visible_rows()[1].id;

        let before = state.clone();
        assert_eq!(
            reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: file }),
            Err(BrowserError::NotADirectory {
                path: "src/main.go".to_string()
            })
        );
        assert_eq!(
            reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: NodeId(99) }),
            Err(BrowserError::UnknownNode(NodeId(99)))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn selecting_a_leaf_always_issues_exactly_one_fetch() {
        let mut state = loaded("1", go_forest());

        let first = select(&mut state, "src/main.go");
        let second = select(&mut state, "src/main.go");

        assert_eq!(first.path, second.path);
        assert!(second.generation > first.generation);
        assert_eq!(state.pending_file(), Some(&second));
    }

    #[test]
    fn late_response_for_abandoned_path_is_discarded() {
        let mut state = loaded("1", vec![
            TreeNode::file("a.js", "/a.js"),
            TreeNode::file("b.py", "/b.py"),
        ]);
        let a = select(&mut state, "/a.js");
        let b = select(&mut state, "/b.py");

        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request: b,
                result: content("/b.py", "print('b')"),
            },
        )
        .expect("b");
        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request: a,
                result: content("/a.js", "console.log('a')"),
            },
        )
        .expect("stale a");

        let selected = state.selected.clone().expect("selected");
        assert_eq!(selected.path, "/b.py");
        assert_eq!(selected.content, "print('b')");
        assert!(!selected.loading);
    }

    #[test]
    fn late_response_before_new_one_keeps_new_selection_loading() {
        let mut state = loaded("1", go_forest());
        let a = select(&mut state, "/a.js");
        let _b = select(&mut state, "/b.py");

        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request: a,
                result: content("/a.js", "console.log('a')"),
            },
        )
        .expect("stale a");

        let selected = state.selected.clone().expect("selected");
        assert_eq!(selected.path, "/b.py");
        assert!(selected.loading);
        assert!(selected.content.is_empty());
    }

    #[test]
    fn file_failure_names_the_path_and_clears_content() {
        let mut state = loaded("1", go_forest());
        let request = select(&mut state, "src/main.go");

        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request,
                result: Err(not_found("/projects/1/source-code-file/?path=src%2Fmain.go")),
            },
        )
        .expect("failure");

        let selected = state.selected.clone().expect("selected");
        assert!(!selected.loading);
        assert!(selected.content.is_empty());
        assert_eq!(
            selected.error.as_deref(),
            Some("Unable to load file content: src/main.go")
        );
    }

    #[test]
    fn reselecting_after_failure_retries() {
        let mut state = loaded("1", go_forest());
        let failed = select(&mut state, "src/main.go");
        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request: failed,
                result: Err(ApiError::Network("offline".to_string())),
            },
        )
        .expect("failure");

        let retry = select(&mut state, "src/main.go");
        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request: retry,
                result: content("src/main.go", "package main"),
            },
        )
        .expect("retry");

        let selected = state.selected.clone().expect("selected");
        assert_eq!(selected.error, None);
        assert_eq!(selected.content, "package main");
    }

    #[test]
    fn close_discards_in_flight_result() {
        let mut state = loaded("1", go_forest());
        let request = select(&mut state, "src/main.go");

        let effects = reduce_browser(&mut state, BrowserAction::CloseFile).expect("close");
        assert!(effects.is_empty());
        assert!(state.selected.is_none());

        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request,
                result: content("src/main.go", "package main"),
            },
        )
        .expect("late");
        assert!(state.selected.is_none());
    }

    #[test]
    fn close_then_reselect_fetches_again() {
        let mut state = loaded("1", go_forest());
        let first = select(&mut state, "src/main.go");
        reduce_browser(
            &mut state,
            BrowserAction::FileLoaded {
                request: first.clone(),
                result: content("src/main.go", "v1"),
            },
        )
        .expect("first");
        reduce_browser(&mut state, BrowserAction::CloseFile).expect("close");

        let second = select(&mut state, "src/main.go");
        assert_ne!(first, second);
        assert!(state.selected.as_ref().is_some_and(|file| file.content.is_empty()));
    }

    #[test]
    fn selecting_requires_project_and_path() {
        let mut state = BrowserState::default();
        assert_eq!(
            reduce_browser(
                &mut state,
                BrowserAction::SelectFile {
                    path: "a.rs".to_string()
                }
            ),
            Err(BrowserError::NoProject)
        );

        let mut state = loaded("1", go_forest());
        assert_eq!(
            reduce_browser(
                &mut state,
                BrowserAction::SelectFile {
                    path: String::new()
                }
            ),
            Err(BrowserError::EmptyPath)
        );
        assert!(state.selected.is_none());
    }

    #[test]
    fn reload_of_same_tree_resets_expansion() {
        let mut state = loaded("1", go_forest());
        let src = state.visible_rows()[0].id;
        reduce_browser(&mut state, BrowserAction::ToggleDirectory { node: src }).expect("open");

        reduce_browser(&mut state, BrowserAction::SetProject(None)).expect("clear");
        let request = tree_request(
            &reduce_browser(&mut state, BrowserAction::SetProject(Some(project("1")))).expect("again"),
        );
        reduce_browser(
            &mut state,
            BrowserAction::TreeLoaded {
                request,
                result: Ok(go_forest()),
            },
        )
        .expect("reloaded");

        assert!(state.visible_rows().iter().all(|row| !row.expanded));
    }
}
