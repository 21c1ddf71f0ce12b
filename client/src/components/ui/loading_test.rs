use super::*;

#[test]
fn default_message_is_loading_ellipsis() {
    assert_eq!(DEFAULT_LOADING_MESSAGE, "Loading...");
    assert_eq!(DEFAULT_LOADING_QA, "loading");
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    #[test]
    fn renders_default_message_and_derived_identifiers() {
        let html = Owner::new().with(|| view! { <Loading/> }.to_html());
        assert!(html.contains(r#"data-qa="loading""#));
        assert!(html.contains(r#"data-qa="loading-spinner""#));
        assert!(html.contains(r#"data-qa="loading-message""#));
        assert!(html.contains(r#"role="status""#));
    }

    #[test]
    fn supplied_message_replaces_default() {
        let html = Owner::new().with(|| {
            view! { <Loading message="Loading applications..." data_qa="apps-loading"/> }.to_html()
        });
        assert!(html.contains("Loading applications..."));
        assert!(html.contains(r#"data-qa="apps-loading-message""#));
        // Only the visually hidden spinner label keeps the default text.
        assert_eq!(html.matches("Loading...").count(), 1);
    }
}
