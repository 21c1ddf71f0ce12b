use super::*;

fn options() -> Vec<EntityOption> {
    vec![
        EntityOption { id: 1, name: "Acme Corp".to_owned(), display: None },
        EntityOption { id: 2, name: "Jane Doe".to_owned(), display: Some("Jane Doe (Globex)".to_owned()) },
        EntityOption { id: 3, name: "Initech".to_owned(), display: None },
    ]
}

#[test]
fn filter_options_is_case_insensitive() {
    let all = options();
    let ids: Vec<i64> = filter_options(&all, "ACME").iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn filter_options_matches_display_text() {
    let all = options();
    let ids: Vec<i64> = filter_options(&all, "globex").iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn filter_options_empty_term_keeps_everything() {
    let all = options();
    assert_eq!(filter_options(&all, "").len(), 3);
    assert!(filter_options(&all, "zzz").is_empty());
}

#[test]
fn find_selected_resolves_id() {
    let all = options();
    assert_eq!(find_selected(&all, Some(3)).map(|o| o.name.as_str()), Some("Initech"));
    assert_eq!(find_selected(&all, Some(99)), None);
    assert_eq!(find_selected(&all, None), None);
}

#[test]
fn label_prefers_display_text() {
    let all = options();
    assert_eq!(all[0].label(), "Acme Corp");
    assert_eq!(all[1].label(), "Jane Doe (Globex)");
}

#[test]
fn identifier_uses_label_slug() {
    assert_eq!(entity_select_qa("Hiring Company"), "entity-select-hiring-company");
}

#[test]
fn options_deserialize_without_display() {
    let parsed: Vec<EntityOption> =
        serde_json::from_str(r#"[{"id":7,"name":"Umbrella"},{"id":8,"name":"Ann","display":"Ann (Umbrella)"}]"#)
            .unwrap();
    assert_eq!(parsed[0], EntityOption { id: 7, name: "Umbrella".to_owned(), display: None });
    assert_eq!(parsed[1].label(), "Ann (Umbrella)");
    assert_eq!(serde_json::to_string(&parsed[0]).unwrap(), r#"{"id":7,"name":"Umbrella"}"#);
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    #[test]
    fn renders_selected_value_and_clear_button() {
        let html = Owner::new().with(|| {
            view! {
                <EntitySelect
                    label="Company"
                    value=Signal::derive(|| Some(1))
                    options=Signal::derive(options)
                    on_select=Callback::new(|_| {})
                    on_create=Callback::new(|()| {})
                    required=true
                />
            }
            .to_html()
        });
        assert!(html.contains(r#"data-qa="entity-select-company-selected-value""#));
        assert!(html.contains("Acme Corp"));
        assert!(html.contains(r#"data-qa="entity-select-company-clear-button""#));
        assert!(!html.contains("entity-select-company-dropdown"));
    }
}
