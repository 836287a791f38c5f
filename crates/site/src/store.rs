//! Site-wide portfolio data loaded once at startup and shared through context.

use std::rc::Rc;

use leptos::logging::{log, warn};
use leptos::*;
use portfolio_host::{
    ApiError, Competence, Diplome, Parcours, PortfolioApi, PosteCible, Presentation, Project,
};

/// Message shown when any of the collection fetches fails.
pub const PORTFOLIO_LOAD_MESSAGE: &str = "Unable to load portfolio data.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Every collection the landing page renders.
pub struct PortfolioData {
    /// Project gallery.
    pub projects: Vec<Project>,
    /// Career timeline, in backend order.
    pub parcours: Vec<Parcours>,
    /// First presentation entry, if the backend has one.
    pub presentation: Option<Presentation>,
    /// Targeted roles.
    pub postes: Vec<PosteCible>,
    /// Degrees.
    pub diplomes: Vec<Diplome>,
    /// Skills.
    pub competences: Vec<Competence>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Lifecycle of an asynchronously loaded value.
pub enum LoadState<T> {
    /// Fetch in flight.
    Loading,
    /// Fetch succeeded.
    Ready(T),
    /// Fetch failed; carries the user-facing message.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    /// Returns the loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` while the fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Fetches the six portfolio collections concurrently.
///
/// The load is all-or-nothing: the first failing request fails the whole load.
pub async fn load_portfolio(api: &dyn PortfolioApi) -> Result<PortfolioData, ApiError> {
    let (projects, parcours, presentations, postes, diplomes, competences) = futures::try_join!(
        api.projects(),
        api.parcours(),
        api.presentations(),
        api.postes(),
        api.diplomes(),
        api.competences(),
    )?;

    Ok(PortfolioData {
        projects,
        parcours,
        presentation: presentations.into_iter().next(),
        postes,
        diplomes,
        competences,
    })
}

#[derive(Clone, Copy)]
/// Shared handle to the backend and the loaded portfolio collections.
pub struct PortfolioStore {
    /// Backend used by every page.
    pub api: StoredValue<Rc<dyn PortfolioApi>>,
    /// Collection load state.
    pub data: RwSignal<LoadState<PortfolioData>>,
}

impl PortfolioStore {
    fn new(api: Rc<dyn PortfolioApi>) -> Self {
        Self {
            api: store_value(api),
            data: create_rw_signal(LoadState::Loading),
        }
    }

    /// Returns the shared backend handle.
    pub fn api(self) -> Rc<dyn PortfolioApi> {
        self.api.get_value()
    }

    /// Starts a fresh collection load.
    pub fn load(self) {
        self.data.set(LoadState::Loading);
        let api = self.api();
        spawn_local(async move {
            let next = match load_portfolio(api.as_ref()).await {
                Ok(data) => LoadState::Ready(data),
                Err(err) => {
                    warn!("portfolio load failed: {err}");
                    LoadState::Failed(PORTFOLIO_LOAD_MESSAGE.to_string())
                }
            };
            if self.data.try_set(next).is_some() {
                log!("portfolio store disposed before load completed");
            }
        });
    }
}

#[component]
/// Provides a [`PortfolioStore`] to `children` and starts the initial load.
pub fn PortfolioProvider(api: Rc<dyn PortfolioApi>, children: Children) -> impl IntoView {
    let store = PortfolioStore::new(api);
    provide_context(store);
    store.load();

    children().into_view()
}

/// Returns the current [`PortfolioStore`].
///
/// # Panics
///
/// Panics if called outside [`PortfolioProvider`].
pub fn use_portfolio_store() -> PortfolioStore {
    use_context::<PortfolioStore>().expect("PortfolioStore not provided")
}
