use leptos::prelude::*;

use crate::components::status_bar::StatusBar;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container py-5 text-center" data-qa="not-found-page">
            <h1 class="h3" data-qa="not-found-title">"Page not found"</h1>
            <a href="/" data-qa="not-found-home-link">"Back to home"</a>
            <StatusBar message="Page not found"/>
        </div>
    }
}
