//! Portfolio single-page application: router, shared data store, and pages.

mod pages;
mod sections;
mod store;
mod timeline;
mod web_app;

pub use pages::{LandingPage, ProjectPage, ProjectSlot, ProjectTicket};
pub use sections::{Section, SectionNavigator, WHEEL_THROTTLE_MS};
pub use store::{
    load_portfolio, use_portfolio_store, LoadState, PortfolioData, PortfolioProvider,
    PortfolioStore, PORTFOLIO_LOAD_MESSAGE,
};
pub use timeline::{excerpt, sort_timeline, start_date, StartDate, TimelineKind};
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
