//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::sidebar::Sidebar;
use crate::pages::{
    home::HomePage,
    not_found::NotFound,
    section::SectionPage,
    wizard::{WizardRedirect, WizardStep},
};
use crate::util::clock::ClockHandle;

pub const APP_TITLE: &str = "ONE GOAL - Job Search Application";
pub const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the wall clock used by time-stamped chrome and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClockHandle::default());

    view! {
        <Stylesheet id="bootstrap" href=BOOTSTRAP_CSS/>
        <Title text=APP_TITLE/>
        <Meta
            name="description"
            content="Job search application for tracking applications, companies, contacts, and notes"
        />

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("applications")
                        view=|| view! { <SectionPage href="/applications"/> }
                    />
                    <Route
                        path=(StaticSegment("applications"), StaticSegment("new"))
                        view=WizardRedirect
                    />
                    <Route
                        path=(StaticSegment("applications"), StaticSegment("new"), StaticSegment("step1"))
                        view=|| view! { <WizardStep step=1/> }
                    />
                    <Route
                        path=(StaticSegment("applications"), StaticSegment("new"), StaticSegment("step2"))
                        view=|| view! { <WizardStep step=2/> }
                    />
                    <Route
                        path=StaticSegment("companies")
                        view=|| view! { <SectionPage href="/companies"/> }
                    />
                    <Route
                        path=StaticSegment("contacts")
                        view=|| view! { <SectionPage href="/contacts"/> }
                    />
                    <Route
                        path=StaticSegment("clients")
                        view=|| view! { <SectionPage href="/clients"/> }
                    />
                    <Route
                        path=StaticSegment("notes")
                        view=|| view! { <SectionPage href="/notes"/> }
                    />
                    <Route
                        path=StaticSegment("job-search-sites")
                        view=|| view! { <SectionPage href="/job-search-sites"/> }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}

/// Sidebar plus the routed content area. Must render inside `Router`.
#[component]
fn Layout(children: Children) -> impl IntoView {
    let location = use_location();

    view! {
        <div class="d-flex min-vh-100">
            <Sidebar pathname=location.pathname/>
            <main class="flex-grow-1" style="min-width: 0;" data-qa="main-content">
                {children()}
            </main>
        </div>
    }
}
