//! Labelled text entry with inline validation feedback.
//!
//! DESIGN
//! ======
//! Value ownership is explicit: `InputValue::Controlled` mirrors a caller-owned
//! signal and reports edits through `on_change` without storing anything. An
//! edit the owner rejects or rewrites is overwritten in the element with the
//! owner's value, so the field never drifts from `value`.
//! `InputValue::Uncontrolled` seeds the element once and leaves the browser in
//! charge of it.

use leptos::ev::FocusEvent;
use leptos::prelude::*;

use crate::util::qa;

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Who owns the text shown in the entry element.
#[derive(Clone)]
pub enum InputValue {
    Controlled {
        value: Signal<String>,
        on_change: Callback<String>,
    },
    Uncontrolled {
        initial: String,
    },
}

impl InputValue {
    pub fn controlled(value: impl Into<Signal<String>>, on_change: impl Into<Callback<String>>) -> Self {
        Self::Controlled { value: value.into(), on_change: on_change.into() }
    }

    pub fn uncontrolled(initial: impl Into<String>) -> Self {
        Self::Uncontrolled { initial: initial.into() }
    }

    /// Controlled by `signal`, writing each edit straight back into it.
    pub fn bound(signal: RwSignal<String>) -> Self {
        Self::controlled(signal, Callback::new(move |next: String| signal.set(next)))
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// Text rendered into the element's `value` attribute.
    pub fn rendered_value(&self) -> String {
        match self {
            Self::Controlled { value, .. } => value.get_untracked(),
            Self::Uncontrolled { initial } => initial.clone(),
        }
    }
}

impl Default for InputValue {
    fn default() -> Self {
        Self::uncontrolled(String::new())
    }
}

/// Report `typed` to the owner, then return the text the element must be
/// reset to when the owner did not adopt the edit verbatim.
pub(crate) fn apply_edit(value: Signal<String>, on_change: Callback<String>, typed: String) -> Option<String> {
    on_change.run(typed.clone());
    let owned = value.get_untracked();
    (owned != typed).then_some(owned)
}

/// `form-control[ is-invalid][ <extra>]`.
pub fn input_class(has_error: bool, extra: &str) -> String {
    let mut class = String::from("form-control");
    if has_error {
        class.push_str(" is-invalid");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Explicit identifier, else `input-<label-slug>`, else `input-missing-qa`.
pub fn resolve_input_qa(data_qa: Option<&str>, label: Option<&str>) -> String {
    if let Some(id) = data_qa {
        return id.to_owned();
    }
    qa::warn_missing("Input");
    match label.map(qa::slugify) {
        Some(slug) if !slug.is_empty() => format!("input-{slug}"),
        _ => "input-missing-qa".to_owned(),
    }
}

/// An error only counts when it has text.
pub fn has_error_text(error: Option<&str>) -> bool {
    error.is_some_and(|text| !text.is_empty())
}

#[component]
pub fn Input(
    #[prop(into, optional)] label: Option<String>,
    #[prop(into, optional)] error: MaybeProp<String>,
    #[prop(optional)] value: InputValue,
    #[prop(into, default = "text".to_owned())] input_type: String,
    #[prop(into, optional)] placeholder: MaybeProp<String>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] data_qa: Option<String>,
    #[prop(optional)] on_focus: Option<Callback<()>>,
) -> impl IntoView {
    let qa_id = resolve_input_qa(data_qa.as_deref(), label.as_deref());
    let error_id = format!("error-{qa_id}");

    let has_error = move || has_error_text(error.get().as_deref());
    let entry_class = Signal::derive(move || input_class(has_error(), &class));
    let described_by = Signal::derive({
        let error_id = error_id.clone();
        move || has_error().then(|| error_id.clone())
    });
    let aria_invalid = move || has_error().then_some("true");
    let is_disabled = move || disabled.get().unwrap_or(false);
    let on_focus_in = move |_: FocusEvent| {
        if let Some(on_focus) = on_focus {
            on_focus.run(());
        }
    };

    let label_view = label.map(|text| {
        view! {
            <label class="form-label" for=qa_id.clone() data-qa=format!("label-{qa_id}")>
                {text}
            </label>
        }
    });

    let shown = value.rendered_value();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let entry = match value {
        InputValue::Controlled { value, on_change } => view! {
            <input
                id=qa_id.clone()
                type=input_type
                class=move || entry_class.get()
                data-qa=qa_id.clone()
                node_ref=input_ref
                value=shown
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                disabled=is_disabled
                required=required
                aria-invalid=aria_invalid
                aria-describedby=move || described_by.get()
                on:input=move |ev| {
                    if let Some(owned) = apply_edit(value, on_change, event_target_value(&ev)) {
                        if let Some(element) = input_ref.get_untracked() {
                            element.set_value(&owned);
                        }
                    }
                }
                on:focus=on_focus_in
            />
        }
        .into_any(),
        InputValue::Uncontrolled { .. } => view! {
            <input
                id=qa_id.clone()
                type=input_type
                class=move || entry_class.get()
                data-qa=qa_id.clone()
                value=shown
                placeholder=move || placeholder.get()
                disabled=is_disabled
                required=required
                aria-invalid=aria_invalid
                aria-describedby=move || described_by.get()
                on:focus=on_focus_in
            />
        }
        .into_any(),
    };

    view! {
        <div class="mb-3" data-qa=format!("input-wrapper-{qa_id}")>
            {label_view}
            {entry}
            <Show when=has_error>
                <div class="invalid-feedback" id=error_id.clone() data-qa=error_id.clone()>
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
