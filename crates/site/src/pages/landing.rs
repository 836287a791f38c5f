use leptos::*;
use leptos_router::A;
use portfolio_host::{Competence, Parcours, PosteCible, Presentation, Project};
use portfolio_ui::{
    Alert, AlertSeverity, Button, ButtonVariant, Card, EmptyState, Heading, Icon, IconName,
    IconSize, Panel, Spinner, Surface, SurfaceVariant, Text, TextRole, TextTone,
};

use crate::sections::{Section, SectionNavigator};
use crate::store::{use_portfolio_store, LoadState, PortfolioData};
use crate::timeline::{excerpt, sort_timeline, TimelineKind};

const CARD_EXCERPT_CHARS: usize = 100;
const CARD_TECHNOLOGY_CHIPS: usize = 3;

#[component]
/// Landing page: section navbar plus the active section.
pub fn LandingPage() -> impl IntoView {
    let store = use_portfolio_store();
    let navigator = create_rw_signal(SectionNavigator::default());
    let current = Signal::derive(move || navigator.with(SectionNavigator::current));

    let on_wheel = move |ev: ev::WheelEvent| {
        let now = js_sys::Date::now();
        navigator.update(|nav| {
            nav.wheel(ev.delta_y(), now);
        });
    };

    view! {
        <div class="landing" data-section=move || current.get().token() on:wheel=on_wheel>
            <nav class="landing-nav" aria-label="Sections">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                ui_slot="section-link"
                                selected=Signal::derive(move || current.get() == section)
                                on_click=Callback::new(move |_| {
                                    navigator.update(|nav| nav.select(section))
                                })
                            >
                                {section.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match store.data.get() {
                LoadState::Loading => view! { <Spinner label="Loading portfolio..." /> }.into_view(),
                LoadState::Failed(message) => {
                    view! { <Alert severity=AlertSeverity::Error>{message}</Alert> }.into_view()
                }
                LoadState::Ready(data) => render_section(current.get(), data),
            }}
        </div>
    }
}

fn render_section(section: Section, data: PortfolioData) -> View {
    match section {
        Section::Introduction => view! { <IntroductionSection data /> }.into_view(),
        Section::Parcours => view! { <TimelineSection parcours=data.parcours /> }.into_view(),
        Section::Projects => view! { <ProjectGallery projects=data.projects /> }.into_view(),
    }
}

#[component]
fn IntroductionSection(data: PortfolioData) -> impl IntoView {
    let PortfolioData {
        presentation,
        postes,
        diplomes,
        competences,
        ..
    } = data;

    view! {
        <section class="landing-section" id="introduction">
            {match presentation {
                Some(presentation) => view! { <ContactCard presentation postes /> }.into_view(),
                None => view! { <EmptyState>"No introduction yet."</EmptyState> }.into_view(),
            }}
            <Panel layout_class="skills" aria_label="Skills and degrees">
                <Heading>"Degrees"</Heading>
                <ul class="degree-list">
                    {diplomes
                        .into_iter()
                        .map(|diplome| {
                            view! {
                                <li>
                                    <Text role=TextRole::Label>{diplome.title}</Text>
                                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                                        {diplome.institution}
                                    </Text>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <Heading>"Skills"</Heading>
                <ul class="skill-list">
                    {competences
                        .into_iter()
                        .map(|competence| view! { <li><SkillBadge competence /></li> })
                        .collect_view()}
                </ul>
            </Panel>
        </section>
    }
}

#[component]
fn ContactCard(presentation: Presentation, postes: Vec<PosteCible>) -> impl IntoView {
    let name = presentation.full_name();
    let mailto = format!("mailto:{}", presentation.email);

    view! {
        <Surface layout_class="contact" aria_label="Contact">
            {presentation
                .photo
                .map(|photo| view! { <img class="contact-photo" src=photo alt=name.clone() /> })}
            <Heading>{name.clone()}</Heading>
            <a class="contact-email" href=mailto>
                <Icon icon=IconName::Mail size=IconSize::Sm />
                {presentation.email}
            </a>
            <ul class="contact-roles">
                {postes
                    .into_iter()
                    .map(|poste| view! { <li><Text role=TextRole::Label>{poste.name}</Text></li> })
                    .collect_view()}
            </ul>
            <Text>{presentation.text}</Text>
        </Surface>
    }
}

#[component]
fn SkillBadge(competence: Competence) -> impl IntoView {
    let title = competence.name.clone();

    view! {
        <span class="skill-badge" title=title>
            {match competence.logo {
                Some(logo) => {
                    view! { <img class="skill-logo" src=logo alt=competence.name /> }.into_view()
                }
                None => view! { <Text role=TextRole::Caption>{competence.name}</Text> }.into_view(),
            }}
        </span>
    }
}

#[component]
fn TimelineSection(parcours: Vec<Parcours>) -> impl IntoView {
    if parcours.is_empty() {
        return ().into_view();
    }

    view! {
        <section class="landing-section" id="parcours">
            <Heading>"Career"</Heading>
            <ol class="timeline">
                {sort_timeline(&parcours)
                    .into_iter()
                    .map(|entry| {
                        let kind = TimelineKind::of(&entry);
                        let icon = match kind {
                            TimelineKind::Education => IconName::School,
                            TimelineKind::Work => IconName::Work,
                        };
                        view! {
                            <li class="timeline-entry" data-kind=kind.token()>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    {entry.period}
                                </Text>
                                <Icon icon />
                                <Card>
                                    <Heading role=TextRole::Label>{entry.position}</Heading>
                                    <Text>{entry.description}</Text>
                                </Card>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
    .into_view()
}

#[component]
fn ProjectGallery(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section class="landing-section" id="projects">
            <Heading>"Projects"</Heading>
            {if projects.is_empty() {
                view! { <EmptyState>"No projects yet."</EmptyState> }.into_view()
            } else {
                view! {
                    <div class="project-gallery">
                        {projects
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let summary = excerpt(&project.description, CARD_EXCERPT_CHARS);

    view! {
        <A href class="project-card-link">
            <Card layout_class="project-card">
                {project
                    .video
                    .map(|src| {
                        view! {
                            <video class="project-card-video" src=src muted=true preload="metadata"></video>
                        }
                    })}
                <Heading>{project.title}</Heading>
                <Text tone=TextTone::Secondary>{summary}</Text>
                <Surface variant=SurfaceVariant::Inset layout_class="project-card-chips">
                    {project
                        .technologies
                        .into_iter()
                        .take(CARD_TECHNOLOGY_CHIPS)
                        .map(|tech| view! { <span class="chip">{tech.name}</span> })
                        .collect_view()}
                </Surface>
            </Card>
        </A>
    }
}
