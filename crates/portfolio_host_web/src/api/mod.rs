//! Browser-backed portfolio API service.

mod portfolio;

pub use portfolio::WebPortfolioApi;
