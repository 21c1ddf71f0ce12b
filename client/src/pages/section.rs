//! Listing page shell shared by every top-level section.

use leptos::prelude::*;

use crate::components::sidebar::{NAV_ITEMS, NavItem};
use crate::components::status_bar::StatusBar;
use crate::pages::not_found::NotFound;
use crate::util::qa;

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

pub fn nav_item(href: &str) -> Option<NavItem> {
    NAV_ITEMS.iter().copied().find(|item| item.href == href)
}

/// `"/job-search-sites"` -> `"job-search-sites-page"`.
pub fn section_qa(href: &str) -> String {
    let slug = qa::slugify(href.trim_matches('/'));
    if slug.is_empty() { "home-page".to_owned() } else { format!("{slug}-page") }
}

pub fn empty_message(label: &str) -> String {
    format!("No {} yet.", label.to_lowercase())
}

#[component]
pub fn SectionPage(href: &'static str) -> impl IntoView {
    let Some(item) = nav_item(href) else {
        return view! { <NotFound/> }.into_any();
    };
    let page_qa = section_qa(item.href);

    view! {
        <div class="min-vh-100 bg-light" data-qa=page_qa.clone() style="padding-bottom: 60px;">
            <div class="container py-3 py-md-4">
                <h1 class="h3 mb-1" data-qa=qa::suffixed(&page_qa, "title")>{item.label}</h1>
                <p class="text-muted mb-4" data-qa=qa::suffixed(&page_qa, "description")>
                    {item.description}
                </p>
                <div class="card shadow-sm">
                    <div class="card-body text-center text-muted" data-qa=qa::suffixed(&page_qa, "empty")>
                        {empty_message(item.label)}
                    </div>
                </div>
            </div>
            <StatusBar/>
        </div>
    }
    .into_any()
}
