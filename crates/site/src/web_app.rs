use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use portfolio_host::PortfolioApi;

use crate::pages::{LandingPage, ProjectPage};
use crate::store::{use_portfolio_store, PortfolioProvider};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let api: Rc<dyn PortfolioApi> = Rc::new(portfolio_host_web::portfolio_api());

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="Projects, career, and source code." />

        <PortfolioProvider api>
            <Router>
                <SiteHeader />
                <main class="site-root">
                    <Routes>
                        <Route path="" view=LandingPage />
                        <Route path="/projects/:id" view=ProjectPage />
                        <Route path="/project/:id" view=ProjectPage />
                    </Routes>
                </main>
            </Router>
        </PortfolioProvider>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    let store = use_portfolio_store();
    let brand = move || {
        store
            .data
            .with(|data| {
                data.ready()
                    .and_then(|data| data.presentation.as_ref())
                    .map(|presentation| presentation.full_name())
            })
            .unwrap_or_else(|| "Portfolio".to_string())
    };

    view! {
        <header class="site-header">
            <A href="/" class="site-brand">{brand}</A>
        </header>
    }
}
