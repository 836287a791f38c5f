use leptos::logging::{log, warn};
use leptos::*;
use leptos_router::{use_navigate, use_params_map, NavigateOptions};
use portfolio_app_code_browser::CodeBrowser;
use portfolio_host::{Project, ProjectId};
use portfolio_ui::{
    Alert, AlertSeverity, Button, ButtonVariant, EmptyState, Heading, IconButton, IconName, Modal,
    Panel, Spinner, Surface, SurfaceVariant, Tab, TabList, Text, TextRole, TextTone,
};

use crate::store::{use_portfolio_store, LoadState};

/// Message shown when the project detail cannot be loaded.
pub const PROJECT_LOAD_MESSAGE: &str = "Unable to load this project.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identifies one project-detail request.
pub struct ProjectTicket {
    /// Route id the request was issued for.
    pub project_id: ProjectId,
    generation: u64,
}

#[derive(Debug, Clone, Default)]
/// Tracks the latest project-detail request so late responses can be discarded.
pub struct ProjectSlot {
    pending: Option<ProjectTicket>,
    generation: u64,
}

impl ProjectSlot {
    /// Starts a request for `project_id`, superseding any outstanding one.
    pub fn begin(&mut self, project_id: ProjectId) -> ProjectTicket {
        self.generation += 1;
        let ticket = ProjectTicket {
            project_id,
            generation: self.generation,
        };
        self.pending = Some(ticket.clone());
        ticket
    }

    /// Forgets the outstanding request.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` and clears the slot when `ticket` is the outstanding request.
    pub fn accept(&mut self, ticket: &ProjectTicket) -> bool {
        if self.pending.as_ref() == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DetailTab {
    #[default]
    Description,
    Tasks,
    WorkDone,
}

impl DetailTab {
    const ALL: [DetailTab; 3] = [DetailTab::Description, DetailTab::Tasks, DetailTab::WorkDone];

    fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Tasks => "Tasks",
            Self::WorkDone => "Work done",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Tasks => "tasks",
            Self::WorkDone => "work-done",
        }
    }
}

#[component]
/// Project detail page for the `:id` route parameter.
pub fn ProjectPage() -> impl IntoView {
    let store = use_portfolio_store();
    let params = use_params_map();
    let project_id =
        create_memo(move |_| params.with(|map| map.get("id").and_then(|raw| ProjectId::parse(raw))));

    let detail = create_rw_signal(LoadState::<Project>::Loading);
    let slot = store_value(ProjectSlot::default());
    let source_open = create_rw_signal(false);

    create_effect(move |_| {
        let id = project_id.get();
        source_open.set(false);

        let Some(id) = id else {
            slot.update_value(ProjectSlot::cancel);
            detail.set(LoadState::Failed(PROJECT_LOAD_MESSAGE.to_string()));
            return;
        };

        let Some(ticket) = slot.try_update_value(|slot| slot.begin(id)) else {
            return;
        };
        detail.set(LoadState::Loading);

        let api = store.api();
        spawn_local(async move {
            let result = api.project(&ticket.project_id).await;
            let accepted = slot
                .try_update_value(|slot| slot.accept(&ticket))
                .unwrap_or(false);
            if !accepted {
                log!("discarding stale project response for {}", ticket.project_id);
                return;
            }
            let next = match result {
                Ok(project) => LoadState::Ready(project),
                Err(err) => {
                    warn!("project {} load failed: {err}", ticket.project_id);
                    LoadState::Failed(PROJECT_LOAD_MESSAGE.to_string())
                }
            };
            if detail.try_set(next).is_some() {
                log!("project page unmounted before project {} loaded", ticket.project_id);
            }
        });
    });

    let navigate = use_navigate();
    let go_back = Callback::new(move |_| navigate("/", NavigateOptions::default()));

    view! {
        <div class="project-page">
            <IconButton icon=IconName::ArrowBack aria_label="Back to projects" on_click=go_back />
            {move || match detail.get() {
                LoadState::Loading => view! { <Spinner label="Loading project..." /> }.into_view(),
                LoadState::Failed(message) => {
                    view! { <Alert severity=AlertSeverity::Error>{message}</Alert> }.into_view()
                }
                LoadState::Ready(project) => view! { <ProjectDetail project source_open /> }.into_view(),
            }}
            <Show when=move || source_open.get() fallback=|| ()>
                <Modal
                    layout_class="source-code-modal"
                    title=Signal::derive(move || {
                        detail
                            .with(|detail| detail.ready().map(|project| project.title.clone()))
                            .map(|title| format!("Source code: {title}"))
                            .unwrap_or_else(|| "Source code".to_string())
                    })
                    on_close=Callback::new(move |()| source_open.set(false))
                >
                    <CodeBrowser project_id=Signal::from(project_id) api=store.api() />
                </Modal>
            </Show>
        </div>
    }
}

#[component]
fn ProjectDetail(project: Project, source_open: RwSignal<bool>) -> impl IntoView {
    let active = create_rw_signal(DetailTab::default());
    let Project {
        title,
        video,
        description,
        tasks,
        technologies,
        work_done,
        ..
    } = project;
    let panels = store_value((description, tasks, work_done));

    view! {
        <article class="project-detail">
            <Heading>{title}</Heading>
            {video
                .map(|src| {
                    view! { <video class="project-video" src=src controls=true preload="metadata"></video> }
                })}
            <Surface variant=SurfaceVariant::Muted layout_class="project-technologies" aria_label="Technologies">
                {technologies
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <span class="technology">
                                {tech
                                    .logo
                                    .map(|logo| view! { <img class="technology-logo" src=logo alt="" /> })}
                                <Text role=TextRole::Label>{tech.name}</Text>
                            </span>
                        }
                    })
                    .collect_view()}
            </Surface>
            <TabList aria_label="Project details">
                {DetailTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <Tab
                                id=format!("project-tab-{}", tab.token())
                                controls=format!("project-panel-{}", tab.token())
                                selected=Signal::derive(move || active.get() == tab)
                                on_click=Callback::new(move |_| active.set(tab))
                            >
                                {tab.label()}
                            </Tab>
                        }
                    })
                    .collect_view()}
                <Button
                    variant=ButtonVariant::Primary
                    ui_slot="source-code"
                    leading_icon=IconName::Code
                    on_click=Callback::new(move |_| source_open.set(true))
                >
                    "Source code"
                </Button>
            </TabList>
            {move || {
                let tab = active.get();
                let (description, tasks, work_done) = panels.get_value();
                let body = match tab {
                    DetailTab::Description => view! { <Text>{description}</Text> }.into_view(),
                    DetailTab::Tasks => view! { <Text>{tasks}</Text> }.into_view(),
                    DetailTab::WorkDone if work_done.is_empty() => {
                        view! { <EmptyState>"No detailed work items."</EmptyState> }.into_view()
                    }
                    DetailTab::WorkDone => work_done
                        .into_iter()
                        .map(|item| {
                            view! {
                                <Panel layout_class="work-item">
                                    <Heading role=TextRole::Label>{item.subtitle}</Heading>
                                    <Text tone=TextTone::Secondary>{item.description}</Text>
                                </Panel>
                            }
                        })
                        .collect_view(),
                };
                view! {
                    <div
                        class="project-tab-panel"
                        id=format!("project-panel-{}", tab.token())
                        role="tabpanel"
                        aria-labelledby=format!("project-tab-{}", tab.token())
                    >
                        {body}
                    </div>
                }
            }}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_the_latest_request_is_accepted() {
        let mut slot = ProjectSlot::default();
        let first = slot.begin(ProjectId::from(1));
        let second = slot.begin(ProjectId::from(2));

        assert!(!slot.accept(&first));
        assert!(slot.accept(&second));
        assert!(!slot.accept(&second), "a ticket is accepted once");
    }

    #[test]
    fn repeated_id_still_supersedes_the_older_request() {
        let mut slot = ProjectSlot::default();
        let first = slot.begin(ProjectId::from(7));
        let again = slot.begin(ProjectId::from(7));

        assert_eq!(first.project_id, again.project_id);
        assert!(!slot.accept(&first));
        assert!(slot.accept(&again));
    }

    #[test]
    fn cancel_discards_the_outstanding_request() {
        let mut slot = ProjectSlot::default();
        let ticket = slot.begin(ProjectId::from(3));
        slot.cancel();
        assert!(!slot.accept(&ticket));
    }

    #[test]
    fn detail_tabs_have_distinct_tokens() {
        let tokens: Vec<_> = DetailTab::ALL.iter().map(|tab| tab.token()).collect();
        assert_eq!(tokens, vec!["description", "tasks", "work-done"]);
    }
}
