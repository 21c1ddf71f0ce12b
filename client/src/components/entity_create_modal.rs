//! Modal dialog for creating a related entity without leaving the form.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::ui::button::{Button, ButtonVariant};
use crate::util::qa;

#[cfg(test)]
#[path = "entity_create_modal_test.rs"]
mod entity_create_modal_test;

pub fn modal_qa(title: &str) -> String {
    format!("entity-create-modal-{}", qa::slugify(title))
}

pub fn save_label(loading: bool) -> &'static str {
    if loading { "Saving..." } else { "Save" }
}

/// Backdrop clicks and the close button both call `on_close`; the form body
/// comes from `children`.
#[component]
pub fn EntityCreateModal(
    #[prop(into)] title: String,
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    on_save: Callback<()>,
    #[prop(into, optional)] is_loading: MaybeProp<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let base_qa = modal_qa(&title);
    let loading = move || is_loading.get().unwrap_or(false);
    let close = Callback::new(move |_: MouseEvent| on_close.run(()));
    let save = Callback::new(move |_: MouseEvent| on_save.run(()));
    let disabled = Signal::derive(move || Some(loading()));

    view! {
        <Show when=move || is_open.get()>
            <div
                class="modal show d-block"
                style="background-color: rgba(0,0,0,0.5);"
                on:click=move |ev| close.run(ev)
                data-qa=base_qa.clone()
            >
                <div
                    class="modal-dialog modal-dialog-centered"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                    data-qa=qa::suffixed(&base_qa, "dialog")
                >
                    <div class="modal-content" data-qa=qa::suffixed(&base_qa, "content")>
                        <div class="modal-header" data-qa=qa::suffixed(&base_qa, "header")>
                            <h5 class="modal-title" data-qa=qa::suffixed(&base_qa, "title")>
                                {title.clone()}
                            </h5>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |ev| close.run(ev)
                                data-qa=qa::suffixed(&base_qa, "close-button")
                            ></button>
                        </div>
                        <div class="modal-body" data-qa=qa::suffixed(&base_qa, "body")>
                            {children()}
                        </div>
                        <div class="modal-footer" data-qa=qa::suffixed(&base_qa, "footer")>
                            <Button
                                variant=ButtonVariant::Secondary
                                on_click=close
                                disabled=disabled
                                data_qa=qa::suffixed(&base_qa, "cancel-button")
                            >
                                "Cancel"
                            </Button>
                            <Button
                                variant=ButtonVariant::Primary
                                on_click=save
                                disabled=disabled
                                data_qa=qa::suffixed(&base_qa, "save-button")
                            >
                                {move || save_label(loading())}
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
