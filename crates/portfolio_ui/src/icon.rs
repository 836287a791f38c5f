//! Glyph-based icon set shared by every primitive.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to primitives and apps.
pub enum IconName {
    /// Closed folder.
    Folder,
    /// Open folder.
    FolderOpen,
    /// Generic file.
    File,
    /// Collapsed disclosure indicator.
    ChevronRight,
    /// Expanded disclosure indicator.
    ChevronDown,
    /// Close / dismiss.
    Close,
    /// Back navigation.
    ArrowBack,
    /// Source code.
    Code,
    /// Email contact.
    Mail,
    /// Studies or training.
    School,
    /// Employment.
    Work,
}

impl IconName {
    /// Stable `data-ui-icon` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::FolderOpen => "folder-open",
            Self::File => "file",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::Close => "close",
            Self::ArrowBack => "arrow-back",
            Self::Code => "code",
            Self::Mail => "mail",
            Self::School => "school",
            Self::Work => "work",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Folder => "\u{1F4C1}",
            Self::FolderOpen => "\u{1F4C2}",
            Self::File => "\u{1F4C4}",
            Self::ChevronRight => "\u{25B8}",
            Self::ChevronDown => "\u{25BE}",
            Self::Close => "\u{2715}",
            Self::ArrowBack => "\u{2190}",
            Self::Code => "</>",
            Self::Mail => "\u{2709}",
            Self::School => "\u{1F393}",
            Self::Work => "\u{1F4BC}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline with dense text.
    Sm,
    /// Default control size.
    #[default]
    Md,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[component]
/// Decorative icon; hidden from assistive technology.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}
