//! Primary navigation sidebar with a mobile drawer mode.
//!
//! SYSTEM CONTEXT
//! ==============
//! The current route arrives as an injected `pathname` signal; the sidebar
//! never queries the router itself. Exactly one entry is highlighted for any
//! known route (see `util::route` for the matching policy).
//!
//! DESIGN
//! ======
//! Drawer state has two values. It always starts `Closed` so server and
//! client markup agree; wide viewports still show the sidebar through the
//! `d-md-block` breakpoint class. Route changes and link clicks close it.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use serde::Serialize;

use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::util::{qa, route};

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// One navigation destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", label: "Home", description: "Dashboard and applications" },
    NavItem { href: "/applications", label: "Applications", description: "Manage your job applications" },
    NavItem { href: "/companies", label: "Companies", description: "Track companies you've applied to" },
    NavItem { href: "/contacts", label: "Contacts", description: "Manage recruiters and contacts" },
    NavItem { href: "/clients", label: "Clients", description: "Manage client relationships" },
    NavItem { href: "/notes", label: "Notes", description: "Track notes for applications" },
    NavItem { href: "/job-search-sites", label: "Job Search Sites", description: "Manage job search platforms" },
];

/// Drawer visibility on narrow viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    Open,
    #[default]
    Closed,
}

impl SidebarState {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Index into [`NAV_ITEMS`] of the entry active for `pathname`.
pub fn active_nav_index(pathname: &str) -> Option<usize> {
    route::active_index(NAV_ITEMS.iter().map(|item| item.href), pathname)
}

pub fn nav_qa(label: &str) -> String {
    format!("sidebar-nav-{}", qa::slugify(label))
}

fn aside_class(state: SidebarState) -> &'static str {
    match state {
        SidebarState::Open => "bg-light border-end shadow-sm d-block position-fixed",
        SidebarState::Closed => "bg-light border-end shadow-sm d-none d-md-block position-relative",
    }
}

fn aside_style(state: SidebarState) -> &'static str {
    match state {
        SidebarState::Open => {
            "width: 280px; height: 100vh; min-height: 100vh; overflow-y: auto; z-index: 1035; flex-shrink: 0;"
        }
        SidebarState::Closed => {
            "width: 280px; height: auto; min-height: 100vh; overflow-y: auto; z-index: auto; flex-shrink: 0;"
        }
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "text-decoration-none d-block p-2 rounded bg-primary text-white"
    } else {
        "text-decoration-none d-block p-2 rounded text-dark hover-bg-light"
    }
}

fn nav_description_class(active: bool) -> &'static str {
    if active { "text-white-50" } else { "text-muted" }
}

#[component]
pub fn Sidebar(#[prop(into)] pathname: Signal<String>) -> impl IntoView {
    let state = RwSignal::new(SidebarState::default());
    let active = Memo::new(move |_| active_nav_index(&pathname.get()));

    Effect::new(move || {
        pathname.track();
        state.set(SidebarState::Closed);
    });

    let on_toggle = Callback::new(move |_: MouseEvent| state.update(|s| *s = s.toggle()));
    let on_close = Callback::new(move |_: MouseEvent| state.set(SidebarState::Closed));

    let links = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let is_active = move || active.get() == Some(index);
            view! {
                <li class="mb-2">
                    <a
                        href=item.href
                        class=move || nav_link_class(is_active())
                        aria-current=move || is_active().then_some("page")
                        data-qa=nav_qa(item.label)
                        on:click=move |_| state.set(SidebarState::Closed)
                    >
                        <div class="fw-medium">{item.label}</div>
                        <small class=move || nav_description_class(is_active())>{item.description}</small>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div
            class="d-md-none position-fixed top-0 start-0 m-3 z-4"
            style="z-index: 1040;"
            data-qa="sidebar-mobile-toggle"
        >
            <Button
                variant=ButtonVariant::Primary
                size=ButtonSize::Sm
                on_click=on_toggle
                aria_label="Toggle navigation"
                data_qa="sidebar-toggle-button"
            >
                "☰ Menu"
            </Button>
        </div>

        <Show when=move || state.get().is_open()>
            <div
                class="d-md-none position-fixed top-0 start-0 w-100 h-100 bg-dark bg-opacity-50"
                style="z-index: 1030;"
                on:click=move |_| state.set(SidebarState::Closed)
                data-qa="sidebar-overlay"
            ></div>
        </Show>

        <aside
            class=move || aside_class(state.get())
            style=move || aside_style(state.get())
            data-qa="sidebar"
        >
            <div class="p-3 p-md-4">
                <div class="d-flex justify-content-between align-items-center mb-3 mb-md-4">
                    <a href="/" class="text-decoration-none">
                        <h2 class="h5 mb-0 text-primary fw-bold" data-qa="sidebar-title">
                            "Navigation"
                        </h2>
                    </a>
                    <Button
                        variant=ButtonVariant::Link
                        size=ButtonSize::Sm
                        class="d-md-none text-dark"
                        on_click=on_close
                        aria_label="Close navigation"
                        data_qa="sidebar-close-button"
                    >
                        "✕"
                    </Button>
                </div>

                <nav data-qa="sidebar-navigation">
                    <ul class="list-unstyled mb-0">{links}</ul>
                </nav>
            </div>
        </aside>
    }
}
