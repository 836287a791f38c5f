//! Read-only source-code browser for one portfolio project.
//!
//! The browser fetches a project's source tree once per project id, renders it as a collapsible
//! list, and loads file contents on demand for highlighted display. All transitions go through
//! [`reduce_browser`]; fetches are described as [`BrowserEffect`] values and run by
//! [`BrowserRuntime`], so results for a superseded project or file are discarded instead of
//! overwriting newer state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
pub mod effects;
pub mod highlight;
pub mod language;
pub mod model;
pub mod reducer;
mod runtime;

use std::rc::Rc;

use leptos::*;
use portfolio_host::{PortfolioApi, ProjectId};

pub use components::{FileViewer, SourceTreePanel};
pub use effects::execute_effect;
pub use highlight::{highlight_lines, HighlightKind, HighlightSpan, LanguageRegistry};
pub use language::language_for_path;
pub use model::{ExpansionState, NodeId, SelectedFile, SourceTree, VisibleRow};
pub use reducer::{
    reduce_browser, BrowserAction, BrowserEffect, BrowserError, BrowserState, FileRequest,
    TreeRequest,
};
pub use runtime::BrowserRuntime;

#[component]
/// Source tree and file viewer for `project_id`.
///
/// A new id discards the current tree, expansion, and selection and fetches the new tree. `None`
/// leaves the browser empty.
pub fn CodeBrowser(
    /// Project whose source tree is shown; `None` leaves the browser empty.
    #[prop(into)]
    project_id: MaybeSignal<Option<ProjectId>>,
    /// Backend used for tree and file fetches.
    api: Rc<dyn PortfolioApi>,
) -> impl IntoView {
    let runtime = BrowserRuntime::new(api);
    let state = runtime.state;

    create_effect(move |_| {
        runtime.dispatch_action(BrowserAction::SetProject(project_id.get()));
    });

    let rows = create_memo(move |_| state.with(BrowserState::visible_rows));
    let loading = Signal::derive(move || state.with(|s| s.tree_loading));
    let error = Signal::derive(move || state.with(|s| s.tree_error.clone()));
    let empty = Signal::derive(move || state.with(BrowserState::tree_is_empty));
    let selected_path =
        Signal::derive(move || state.with(|s| s.selected_path().map(str::to_string)));
    let selected = Signal::derive(move || state.with(|s| s.selected.clone()));
    let has_selection = Signal::derive(move || state.with(|s| s.selected.is_some()));

    view! {
        <div class="code-browser" data-app="code-browser">
            <SourceTreePanel
                rows
                loading
                error
                empty
                selected_path
                on_toggle=Callback::new(move |node| {
                    runtime.dispatch_action(BrowserAction::ToggleDirectory { node })
                })
                on_select=Callback::new(move |path| {
                    runtime.dispatch_action(BrowserAction::SelectFile { path })
                })
            />
            <Show when=move || has_selection.get() fallback=|| ()>
                <FileViewer
                    file=selected
                    on_close=Callback::new(move |()| runtime.dispatch_action(BrowserAction::CloseFile))
                />
            </Show>
        </div>
    }
}
