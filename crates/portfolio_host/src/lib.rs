//! Typed backend contracts and shared models for the portfolio site.
//!
//! This crate is the API-first boundary for the portfolio backend. It exposes the wire models for
//! projects, career data, and project source trees, the object-safe [`PortfolioApi`] service trait,
//! and endpoint configuration. Concrete browser transport lives in `portfolio_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod content;
pub mod error;
pub mod service;
pub mod source;

pub use config::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS};
pub use content::{Competence, Diplome, Parcours, PosteCible, Presentation, Project, WorkDone};
pub use error::{ApiError, SourceLoadError, TREE_LOAD_MESSAGE};
pub use service::{
    ApiRequest, MemoryPortfolioApi, NoopPortfolioApi, PortfolioApi, PortfolioApiFuture,
};
pub use source::types::{NodeKind, ProjectId, SourceFileContent, TreeNode};
