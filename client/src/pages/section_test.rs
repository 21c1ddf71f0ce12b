use super::*;

#[test]
fn nav_item_resolves_known_sections() {
    assert_eq!(nav_item("/companies").map(|item| item.label), Some("Companies"));
    assert_eq!(nav_item("/settings"), None);
}

#[test]
fn section_identifiers() {
    assert_eq!(section_qa("/job-search-sites"), "job-search-sites-page");
    assert_eq!(section_qa("/applications"), "applications-page");
    assert_eq!(section_qa("/"), "home-page");
}

#[test]
fn empty_message_lowercases_label() {
    assert_eq!(empty_message("Job Search Sites"), "No job search sites yet.");
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;
    use crate::util::clock::ClockHandle;

    #[test]
    fn renders_heading_and_status_bar() {
        let html = Owner::new().with(|| {
            provide_context(ClockHandle::fixed(time::macros::datetime!(2026-01-11 9:05:00 UTC)));
            view! { <SectionPage href="/notes"/> }.to_html()
        });
        assert!(html.contains(r#"data-qa="notes-page-title""#));
        assert!(html.contains("No notes yet."));
        assert!(html.contains("9:05:00 AM"));
    }

    #[test]
    fn unknown_section_renders_not_found() {
        let html = Owner::new().with(|| view! { <SectionPage href="/nowhere"/> }.to_html());
        assert!(html.contains(r#"data-qa="not-found-page""#));
    }
}
