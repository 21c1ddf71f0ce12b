//! Danger alert with an optional retry action.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::util::qa;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const DEFAULT_ERROR_QA: &str = "error";

/// Identifier of the retry control for an alert identified by `base`.
pub fn retry_qa(base: &str) -> String {
    qa::suffixed(base, "retry-button")
}

/// Click handler that runs `on_retry` once per activation.
pub(crate) fn retry_handler<E>(on_retry: Callback<()>) -> impl Fn(E) + Copy + Send + Sync + 'static {
    move |_| on_retry.run(())
}

/// Alert showing `message`. The retry control exists only when `on_retry` is given.
#[component]
pub fn Error(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(into, default = DEFAULT_ERROR_QA.to_owned())] data_qa: String,
) -> impl IntoView {
    let retry = on_retry.map(|on_retry| {
        let on_click = Callback::new(retry_handler::<MouseEvent>(on_retry));
        view! {
            <Button
                variant=ButtonVariant::OutlineDanger
                size=ButtonSize::Sm
                on_click=on_click
                data_qa=retry_qa(&data_qa)
            >
                "Retry"
            </Button>
        }
    });

    view! {
        <div class="alert alert-danger" role="alert" data-qa=data_qa.clone()>
            <div class="d-flex justify-content-between align-items-center gap-3">
                <span data-qa=qa::suffixed(&data_qa, "message")>{message}</span>
                {retry}
            </div>
        </div>
    }
}
