use super::*;

#[component]
/// Indeterminate progress indicator with a visible label.
pub fn Spinner(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] label: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-spinner", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="spinner"
        >
            <span class="ui-spinner-indicator" aria-hidden="true"></span>
            <span class="ui-spinner-label">{move || label.get()}</span>
        </div>
    }
}

#[component]
/// Inline message banner.
pub fn Alert(
    #[prop(default = AlertSeverity::Info)] severity: AlertSeverity,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role=severity.aria_role()
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=severity.token()
        >
            {children()}
        </div>
    }
}
