//! Centered spinner with a caption.

use leptos::prelude::*;

use crate::util::qa;

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
pub const DEFAULT_LOADING_QA: &str = "loading";

/// Purely presentational: the caller decides when something is loading.
#[component]
pub fn Loading(
    #[prop(into, default = DEFAULT_LOADING_MESSAGE.to_owned())] message: String,
    #[prop(into, default = DEFAULT_LOADING_QA.to_owned())] data_qa: String,
) -> impl IntoView {
    view! {
        <div
            class="d-flex flex-column align-items-center justify-content-center p-5"
            data-qa=data_qa.clone()
        >
            <div
                class="spinner-border text-primary mb-3"
                role="status"
                data-qa=qa::suffixed(&data_qa, "spinner")
            >
                <span class="visually-hidden">"Loading..."</span>
            </div>
            <p class="text-muted" data-qa=qa::suffixed(&data_qa, "message")>
                {message}
            </p>
        </div>
    }
}
