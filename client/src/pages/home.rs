//! Landing page.

use leptos::prelude::*;

use crate::components::sidebar::NAV_ITEMS;
use crate::components::status_bar::StatusBar;
use crate::components::ui::button::Button;
use crate::util::clock::ClockHandle;
use crate::util::date::display_date_only;
use crate::util::qa;

#[component]
pub fn HomePage() -> impl IntoView {
    let clock = use_context::<ClockHandle>().unwrap_or_default();
    let today = display_date_only(clock.now());
    let sections = NAV_ITEMS
        .iter()
        .filter(|item| item.href != "/")
        .map(|item| {
            let card_qa = qa::suffixed("home-section", &qa::slugify(item.label));
            view! {
                <div class="col-12 col-md-6 col-lg-4">
                    <a href=item.href class="card h-100 shadow-sm text-decoration-none" data-qa=card_qa>
                        <div class="card-body">
                            <h3 class="h5 card-title text-primary">{item.label}</h3>
                            <p class="card-text text-muted small mb-0">{item.description}</p>
                        </div>
                    </a>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="min-vh-100 bg-light" data-qa="home-page" style="padding-bottom: 60px;">
            <div class="container py-4 py-md-5">
                <div class="mb-4 mb-md-5 text-center">
                    <h1 class="h2 fw-bold text-primary mb-2 mb-md-3" data-qa="home-title">
                        "Job Search Application"
                    </h1>
                    <p class="text-muted mb-0" data-qa="home-today">{today}</p>
                </div>
                <div class="d-flex justify-content-end mb-3">
                    <a href="/applications/new" data-qa="home-new-application-link">
                        <Button class="w-100 w-md-auto" data_qa="home-new-application-button">
                            "Add Application"
                        </Button>
                    </a>
                </div>
                <div class="row g-3" data-qa="home-sections">
                    {sections}
                </div>
            </div>
            <StatusBar/>
        </div>
    }
}
