use super::*;

#[component]
/// Generic structural surface primitive.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Generic panel primitive.
pub fn Panel(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Card surface for gallery tiles and summaries.
pub fn Card(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Placeholder shown when a region has nothing to display yet.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared pane surface.
pub fn Pane(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-pane", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            role=role
            aria-label=move || aria_label.get()
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared pane header with title, optional meta line, and trailing actions.
pub fn PaneHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] meta: MaybeSignal<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let meta_signal = Signal::derive(move || meta.get());
    view! {
        <header
            class=merge_layout_class("ui-pane-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane-header"
        >
            <div class="ui-pane-header-copy">
                <span class="ui-pane-header-title" data-ui-slot="title">
                    {move || title.get()}
                </span>
                <Show when=move || !meta_signal.get().is_empty() fallback=|| ()>
                    <span class="ui-pane-header-meta" data-ui-slot="meta">
                        {move || meta_signal.get()}
                    </span>
                </Show>
            </div>
            {children.map(|children| {
                view! {
                    <div class="ui-pane-header-actions" data-ui-slot="actions">
                        {children()}
                    </div>
                }
            })}
        </header>
    }
}

#[component]
/// Flat tree container; rows carry their own depth.
pub fn Tree(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-tree", layout_class)
            role="tree"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tree"
        >
            {children()}
        </ul>
    }
}

#[component]
/// One visible tree row, indented by `depth`.
///
/// Branch rows report `expanded` through `aria-expanded`; leaf rows omit it.
pub fn TreeRow(
    #[prop(optional)] layout_class: Option<&'static str>,
    depth: usize,
    #[prop(optional)] branch: bool,
    #[prop(optional, into)] expanded: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_activate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let activate = move || {
        if let Some(on_activate) = on_activate.as_ref() {
            on_activate.call(());
        }
    };
    view! {
        <li
            class=merge_layout_class("ui-tree-row", layout_class)
            role="treeitem"
            tabindex="0"
            title=title
            style=tree_indent_style(depth)
            aria-level=depth + 1
            aria-expanded=move || branch.then(|| bool_token(expanded.get()))
            aria-selected=move || bool_token(selected.get())
            data-ui-primitive="true"
            data-ui-kind="tree-row"
            data-ui-depth=depth
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |_| activate()
            on:keydown=move |ev: KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            {children()}
        </li>
    }
}
