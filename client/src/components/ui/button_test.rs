use super::*;

// =============================================================
// Variant / size parsing
// =============================================================

#[test]
fn every_variant_renders_its_own_class() {
    for variant in ButtonVariant::ALL {
        let class = button_class(variant, ButtonSize::Md, "");
        assert_eq!(class, format!("btn btn-{}", variant.token()));
    }
}

#[test]
fn variant_tokens_round_trip_through_from_str() {
    for variant in ButtonVariant::ALL {
        assert_eq!(variant.token().parse::<ButtonVariant>(), Ok(variant));
    }
}

#[test]
fn unknown_variant_is_rejected_by_from_str() {
    assert_eq!(
        "neon".parse::<ButtonVariant>(),
        Err(UnknownVariant("neon".to_owned()))
    );
}

#[test]
fn unknown_variant_falls_back_to_primary_for_props() {
    assert_eq!(ButtonVariant::from("neon"), ButtonVariant::Primary);
    assert_eq!(ButtonVariant::from("outline-danger"), ButtonVariant::OutlineDanger);
    assert_eq!(button_class("neon".into(), ButtonSize::Md, ""), "btn btn-primary");
}

#[test]
fn default_variant_is_primary() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn size_class_only_for_non_default_sizes() {
    assert_eq!(button_class(ButtonVariant::Primary, ButtonSize::Sm, ""), "btn btn-primary btn-sm");
    assert_eq!(button_class(ButtonVariant::Primary, ButtonSize::Lg, ""), "btn btn-primary btn-lg");
    assert_eq!(button_class(ButtonVariant::Primary, ButtonSize::Md, ""), "btn btn-primary");
    assert_eq!(ButtonSize::from("md"), ButtonSize::Md);
    assert_eq!(ButtonSize::from("huge"), ButtonSize::Md);
}

#[test]
fn extra_classes_are_appended_trimmed() {
    assert_eq!(
        button_class(ButtonVariant::Link, ButtonSize::Sm, "  d-md-none text-dark "),
        "btn btn-link btn-sm d-md-none text-dark"
    );
}

#[test]
fn missing_qa_names_the_variant() {
    assert_eq!(missing_qa(ButtonVariant::Danger), "button-missing-qa-danger");
}

// =============================================================
// Activation guard
// =============================================================

#[test]
fn enabled_activation_dispatches_exactly_once() {
    let mut calls = 0;
    assert!(guard_activation(false, (), |()| calls += 1));
    assert_eq!(calls, 1);
}

#[test]
fn disabled_activation_never_dispatches() {
    let mut calls = 0;
    for _ in 0..5 {
        assert!(!guard_activation(true, (), |()| calls += 1));
    }
    assert_eq!(calls, 0);
}

// =============================================================
// SSR markup
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    #[test]
    fn renders_variant_size_and_identifier() {
        let html = Owner::new().with(|| {
            view! {
                <Button variant="danger" size="sm" data_qa="delete-button">"Delete"</Button>
            }
            .to_html()
        });
        assert!(html.contains(r#"class="btn btn-danger btn-sm""#));
        assert!(html.contains(r#"data-qa="delete-button""#));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains("Delete"));
    }

    #[test]
    fn renders_disabled_attribute() {
        let html = Owner::new().with(|| {
            view! { <Button disabled=true data_qa="save">"Save"</Button> }.to_html()
        });
        assert!(html.contains("disabled"));
    }

    #[test]
    fn missing_identifier_gets_variant_fallback() {
        let html = Owner::new().with(|| view! { <Button variant="success">"Go"</Button> }.to_html());
        assert!(html.contains(r#"data-qa="button-missing-qa-success""#));
    }
}
