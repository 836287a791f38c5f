//! Project source-tree models served by the source-code endpoints.

pub mod types;
