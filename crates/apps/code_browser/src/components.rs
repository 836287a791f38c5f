//! Tree panel and file viewer views.

use leptos::*;
use portfolio_ui::{
    Alert, AlertSeverity, EmptyState, Icon, IconButton, IconName, IconSize, Pane, PaneHeader,
    Spinner, Tree, TreeRow,
};

use crate::highlight::{highlight_lines, language_label, HighlightedLine};
use crate::model::{NodeId, SelectedFile, VisibleRow};

fn row_icons(row: &VisibleRow) -> (Option<IconName>, IconName) {
    match (row.is_directory(), row.expanded) {
        (true, true) => (Some(IconName::ChevronDown), IconName::FolderOpen),
        (true, false) => (Some(IconName::ChevronRight), IconName::Folder),
        (false, _) => (None, IconName::File),
    }
}

#[component]
/// Collapsible source tree with its own loading and error states.
pub fn SourceTreePanel(
    #[prop(into)] rows: Signal<Vec<VisibleRow>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] empty: Signal<bool>,
    #[prop(into)] selected_path: Signal<Option<String>>,
    on_toggle: Callback<NodeId>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <Pane layout_class="code-browser-tree" aria_label="Source files">
            <PaneHeader title="Files" />
            {move || {
                if loading.get() {
                    view! { <Spinner label="Loading source tree..." /> }.into_view()
                } else if let Some(message) = error.get() {
                    view! { <Alert severity=AlertSeverity::Error>{message}</Alert> }.into_view()
                } else if empty.get() {
                    view! { <EmptyState>"This project has no source files."</EmptyState> }
                        .into_view()
                } else {
                    view! {
                        <Tree aria_label="Source tree">
                            <For
                                each=move || rows.get()
                                key=|row| (row.id, row.expanded)
                                children=move |row| {
                                    view! {
                                        <SourceTreeRow
                                            row
                                            selected_path
                                            on_toggle
                                            on_select
                                        />
                                    }
                                }
                            />
                        </Tree>
                    }
                        .into_view()
                }
            }}
        </Pane>
    }
}

#[component]
fn SourceTreeRow(
    row: VisibleRow,
    selected_path: Signal<Option<String>>,
    on_toggle: Callback<NodeId>,
    on_select: Callback<String>,
) -> impl IntoView {
    let (chevron, icon) = row_icons(&row);
    let is_directory = row.is_directory();
    let id = row.id;
    let path = store_value(row.path.clone());
    let selected = Signal::derive(move || {
        !is_directory
            && selected_path.with(|current| {
                path.with_value(|path| current.as_deref() == Some(path.as_str()))
            })
    });

    view! {
        <TreeRow
            depth=row.depth
            branch=is_directory
            expanded=row.expanded
            selected
            title=row.path.clone()
            on_activate=Callback::new(move |()| {
                if is_directory {
                    on_toggle.call(id);
                } else {
                    on_select.call(path.get_value());
                }
            })
        >
            {chevron.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <Icon icon size=IconSize::Sm />
            <span class="code-browser-row-name">{row.name}</span>
        </TreeRow>
    }
}

#[component]
/// Viewer for the selected file: header with path and close action, then highlighted content.
pub fn FileViewer(
    #[prop(into)] file: Signal<Option<SelectedFile>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let path = Signal::derive(move || {
        file.with(|file| file.as_ref().map(|file| file.path.clone()).unwrap_or_default())
    });
    let label = Signal::derive(move || {
        file.with(|file| {
            file.as_ref()
                .map(|file| language_label(file.language()).to_string())
                .unwrap_or_default()
        })
    });
    let lines = create_memo(move |_| {
        file.with(|file| {
            file.as_ref()
                .filter(|file| !file.loading && file.error.is_none())
                .map(|file| highlight_lines(file.language(), &file.content))
        })
    });

    view! {
        <Pane layout_class="code-browser-viewer" aria_label="File content">
            <PaneHeader title=path meta=label>
                <IconButton
                    icon=IconName::Close
                    aria_label="Close file"
                    on_click=Callback::new(move |_| on_close.call(()))
                />
            </PaneHeader>
            {move || {
                file.with(|file| match file {
                    None => ().into_view(),
                    Some(file) if file.loading => {
                        let label = format!("Loading {}...", file.file_name());
                        view! { <Spinner label /> }.into_view()
                    }
                    Some(SelectedFile { error: Some(message), .. }) => {
                        let message = message.clone();
                        view! { <Alert severity=AlertSeverity::Error>{message}</Alert> }
                            .into_view()
                    }
                    Some(file) => {
                        let language = file.language().to_string();
                        lines
                            .get()
                            .map(|lines| render_lines(language, lines).into_view())
                            .unwrap_or_else(|| ().into_view())
                    }
                })
            }}
        </Pane>
    }
}

fn render_lines(language: String, lines: Vec<HighlightedLine>) -> impl IntoView {
    view! {
        <pre class="code-browser-code" data-language=language>
            <code>
                {lines
                    .into_iter()
                    .enumerate()
                    .map(|(index, spans)| {
                        view! {
                            <span class="code-line">
                                <span class="code-line-number" aria-hidden="true">
                                    {index + 1}
                                </span>
                                <span class="code-line-text">
                                    {spans
                                        .into_iter()
                                        .map(|span| {
                                            view! {
                                                <span data-token=span.kind.token()>{span.text}</span>
                                            }
                                        })
                                        .collect_view()}
                                </span>
                                "\n"
                            </span>
                        }
                    })
                    .collect_view()}
            </code>
        </pre>
    }
}

#[cfg(test)]
mod tests {
    use portfolio_host::NodeKind;

    use super::*;

    fn row(kind: NodeKind, expanded: bool) -> VisibleRow {
        VisibleRow {
            id: NodeId(0),
            depth: 0,
            name: "src".to_string(),
            path: "src".to_string(),
            kind,
            expanded,
        }
    }

    #[test]
    fn directory_icons_follow_expansion() {
        assert_eq!(
            row_icons(&row(NodeKind::Directory, false)),
            (Some(IconName::ChevronRight), IconName::Folder)
        );
        assert_eq!(
            row_icons(&row(NodeKind::Directory, true)),
            (Some(IconName::ChevronDown), IconName::FolderOpen)
        );
    }

    #[test]
    fn leaves_use_file_icon_without_chevron() {
        assert_eq!(row_icons(&row(NodeKind::File, false)), (None, IconName::File));
        assert_eq!(row_icons(&row(NodeKind::Unrecognized, false)), (None, IconName::File));
    }
}
