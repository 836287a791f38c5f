//! Shared structural, control, navigation, feedback, and overlay primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod feedback;
mod navigation;
mod overlays;

pub use controls::{Button, IconButton};
pub use data_display::{
    Card, EmptyState, Heading, Pane, PaneHeader, Panel, Surface, Text, Tree, TreeRow,
};
pub use feedback::{Alert, Spinner};
pub use navigation::{Tab, TabList};
pub use overlays::Modal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic surface variants for structural primitives.
pub enum SurfaceVariant {
    /// Primary surface.
    Standard,
    /// Secondary or muted surface.
    Muted,
    /// Inset surface.
    Inset,
}

impl Default for SurfaceVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text roles used by [`Text`] and [`Heading`].
pub enum TextRole {
    /// Body text.
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Monospace/code text.
    Code,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text tones used by [`Text`] and [`Heading`].
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
    /// Danger tone.
    Danger,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Severity of an inline [`Alert`].
pub enum AlertSeverity {
    /// Neutral information.
    #[default]
    Info,
    /// Recoverable problem.
    Warning,
    /// Failed operation.
    Error,
}

impl AlertSeverity {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// `error` alerts interrupt assistive technology; the rest are polite.
    pub(crate) fn aria_role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Info | Self::Warning => "status",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Inline indentation for a tree row at `depth` (0 for roots).
pub(crate) fn tree_indent_style(depth: usize) -> String {
    format!("padding-inline-start: calc(var(--ui-tree-indent, 1rem) * {depth} + 0.25rem)")
}

/// Whether a key press should activate a focused row or control.
pub(crate) fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

pub(crate) fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-pane", None), "ui-pane");
        assert_eq!(merge_layout_class("ui-pane", Some("")), "ui-pane");
        assert_eq!(
            merge_layout_class("ui-pane", Some("code-browser-tree")),
            "ui-pane code-browser-tree"
        );
    }

    #[test]
    fn tree_indent_scales_with_depth() {
        assert!(tree_indent_style(0).contains("* 0 +"));
        assert!(tree_indent_style(3).contains("* 3 +"));
    }

    #[test]
    fn activation_keys_cover_enter_and_space() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn escape_dismisses_overlays() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key(" "));
    }

    #[test]
    fn error_alerts_use_assertive_role() {
        assert_eq!(AlertSeverity::Error.aria_role(), "alert");
        assert_eq!(AlertSeverity::Info.aria_role(), "status");
        assert_eq!(AlertSeverity::default().token(), "info");
    }
}
