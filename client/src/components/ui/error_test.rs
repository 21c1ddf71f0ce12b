use super::*;

#[test]
fn retry_identifier_is_derived_from_alert_identifier() {
    assert_eq!(retry_qa("error"), "error-retry-button");
    assert_eq!(retry_qa("applications-error"), "applications-error-retry-button");
}

#[test]
fn each_activation_retries_exactly_once() {
    Owner::new().with(|| {
        let calls = RwSignal::new(0_u32);
        let handler = retry_handler::<()>(Callback::new(move |()| calls.update(|n| *n += 1)));

        handler(());
        assert_eq!(calls.get_untracked(), 1);

        handler(());
        handler(());
        assert_eq!(calls.get_untracked(), 3);
    });
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    #[test]
    fn renders_alert_with_message() {
        let html = Owner::new().with(|| view! { <Error message="Something went wrong"/> }.to_html());
        assert!(html.contains(r#"class="alert alert-danger""#));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Something went wrong"));
        assert!(html.contains(r#"data-qa="error-message""#));
    }

    #[test]
    fn omits_retry_without_handler() {
        let html = Owner::new().with(|| view! { <Error message="Error occurred"/> }.to_html());
        assert!(!html.contains("Retry"));
        assert!(!html.contains("retry-button"));
    }

    #[test]
    fn renders_retry_with_handler() {
        let html = Owner::new().with(|| {
            let on_retry = Callback::new(|()| {});
            view! { <Error message="Failed to load data" on_retry=on_retry data_qa="test-error-retry"/> }
                .to_html()
        });
        assert!(html.contains("Retry"));
        assert!(html.contains(r#"data-qa="test-error-retry-retry-button""#));
        assert!(html.contains("btn btn-outline-danger btn-sm"));
    }
}
