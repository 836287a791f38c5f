//! Shared UI primitive library for the portfolio site and its apps.
//!
//! The crate owns reusable Leptos primitives, a small glyph-based icon API, and the stable
//! `data-ui-*` DOM contract consumed by the site stylesheet. Apps compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Alert, AlertSeverity, Button, ButtonVariant, Card, EmptyState, Heading, IconButton, Modal,
    Pane, PaneHeader, Panel, Spinner, Surface, SurfaceVariant, Tab, TabList, Text, TextRole,
    TextTone, Tree, TreeRow,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Alert, AlertSeverity, Button, ButtonVariant, Card, EmptyState, Heading, Icon, IconButton,
        IconName, IconSize, Modal, Pane, PaneHeader, Panel, Spinner, Surface, SurfaceVariant, Tab,
        TabList, Text, TextRole, TextTone, Tree, TreeRow,
    };
}
