use super::*;

#[component]
/// Modal dialog over a dimmed backdrop.
///
/// Clicking the backdrop, pressing Escape, or using the close button all invoke `on_close`;
/// the caller owns visibility and unmounts the modal in response.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || !is_dismiss_key(&ev.key()) {
            return;
        }
        ev.prevent_default();
        on_close.call(());
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |_| on_close.call(())
        >
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=move || title.get()
                data-ui-primitive="true"
                data-ui-kind="modal"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <header class="ui-modal-header" data-ui-slot="header">
                    <span class="ui-modal-title">{move || title.get()}</span>
                    <IconButton
                        icon=IconName::Close
                        aria_label="Close"
                        ui_slot="close"
                        on_click=Callback::new(move |_| on_close.call(()))
                    />
                </header>
                <div class="ui-modal-body" data-ui-slot="body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
