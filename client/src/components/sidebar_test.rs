use super::*;

// =============================================================
// Active entry
// =============================================================

fn active_label(pathname: &str) -> Option<&'static str> {
    active_nav_index(pathname).map(|index| NAV_ITEMS[index].label)
}

#[test]
fn root_route_activates_home_only() {
    assert_eq!(active_label("/"), Some("Home"));
}

#[test]
fn applications_route_activates_applications() {
    assert_eq!(active_label("/applications"), Some("Applications"));
    assert_ne!(active_nav_index("/applications"), active_nav_index("/"));
}

#[test]
fn nested_routes_activate_their_section() {
    assert_eq!(active_label("/applications/new/step1"), Some("Applications"));
    assert_eq!(active_label("/companies/4/edit"), Some("Companies"));
    assert_eq!(active_label("/job-search-sites/"), Some("Job Search Sites"));
}

#[test]
fn unknown_route_activates_nothing() {
    assert_eq!(active_label("/settings"), None);
    assert_eq!(active_label("/notesx"), None);
}

#[test]
fn every_known_route_has_exactly_one_active_entry() {
    for item in NAV_ITEMS {
        let matches = NAV_ITEMS
            .iter()
            .filter(|candidate| route::is_active(candidate.href, item.href))
            .count();
        assert_eq!(matches, 1, "route {} matched {matches} entries", item.href);
        assert_eq!(active_label(item.href), Some(item.label));
    }
}

// =============================================================
// Drawer state / markup helpers
// =============================================================

#[test]
fn drawer_starts_closed_and_toggles() {
    let state = SidebarState::default();
    assert_eq!(state, SidebarState::Closed);
    assert!(!state.is_open());
    assert_eq!(state.toggle(), SidebarState::Open);
    assert_eq!(state.toggle().toggle(), SidebarState::Closed);
}

#[test]
fn aside_class_depends_on_drawer_state() {
    assert!(aside_class(SidebarState::Open).contains("d-block position-fixed"));
    assert!(aside_class(SidebarState::Closed).contains("d-none d-md-block"));
}

#[test]
fn nav_identifiers_use_label_slug() {
    assert_eq!(nav_qa("Job Search Sites"), "sidebar-nav-job-search-sites");
    assert_eq!(nav_qa("Home"), "sidebar-nav-home");
}

#[test]
fn link_classes_reflect_active_state() {
    assert!(nav_link_class(true).contains("bg-primary text-white"));
    assert!(nav_link_class(false).contains("text-dark"));
    assert_eq!(nav_description_class(true), "text-white-50");
    assert_eq!(nav_description_class(false), "text-muted");
}

#[test]
fn nav_items_serialize_for_menus() {
    let json = serde_json::to_value(NAV_ITEMS[1]).unwrap();
    assert_eq!(json["href"], "/applications");
    assert_eq!(json["label"], "Applications");
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    fn render_at(path: &'static str) -> String {
        Owner::new().with(|| {
            let pathname = Signal::derive(move || path.to_owned());
            view! { <Sidebar pathname=pathname/> }.to_html()
        })
    }

    #[test]
    fn renders_one_highlighted_link_for_known_route() {
        let html = render_at("/applications");
        assert_eq!(html.matches("bg-primary text-white").count(), 1);
        assert!(html.contains(r#"data-qa="sidebar-nav-applications""#));
    }

    #[test]
    fn renders_no_highlight_for_unknown_route() {
        let html = render_at("/nowhere");
        assert_eq!(html.matches("bg-primary text-white").count(), 0);
    }

    #[test]
    fn renders_closed_drawer_without_overlay() {
        let html = render_at("/");
        assert!(!html.contains("sidebar-overlay"));
        assert!(html.contains("d-none d-md-block position-relative"));
    }
}
