//! Searchable picker for related entities with an inline "create" escape hatch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms use this to link an application to a company, contact, or client.
//! The selected id is owned by the caller (`value` + `on_select`); the picker
//! only keeps its own transient search text and dropdown visibility.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::input::{Input, InputValue};
use crate::util::qa;

#[cfg(test)]
#[path = "entity_select_test.rs"]
mod entity_select_test;

/// A selectable entity as returned by the API list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityOption {
    pub id: i64,
    pub name: String,
    /// Richer label, e.g. `"Jane Doe (Acme)"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl EntityOption {
    pub fn label(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.name)
    }
}

/// Case-insensitive substring match on `name` or `display`.
pub fn filter_options<'a>(options: &'a [EntityOption], term: &str) -> Vec<&'a EntityOption> {
    let needle = term.to_lowercase();
    options
        .iter()
        .filter(|option| {
            option.name.to_lowercase().contains(&needle)
                || option
                    .display
                    .as_ref()
                    .is_some_and(|display| display.to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn find_selected(options: &[EntityOption], value: Option<i64>) -> Option<&EntityOption> {
    let id = value?;
    options.iter().find(|option| option.id == id)
}

pub fn entity_select_qa(label: &str) -> String {
    format!("entity-select-{}", qa::slugify(label))
}

#[component]
pub fn EntitySelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Option<i64>>,
    #[prop(into)] options: Signal<Vec<EntityOption>>,
    on_select: Callback<Option<i64>>,
    on_create: Callback<()>,
    #[prop(into, optional)] is_loading: MaybeProp<bool>,
    #[prop(into, default = "Select or search...".to_owned())] placeholder: String,
    #[prop(into, default = "Search...".to_owned())] search_placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let base_qa = entity_select_qa(&label);
    let id = |part: &str| qa::suffixed(&base_qa, part);
    let label_qa = id("label");
    let selected_qa = id("selected");
    let selected_value_qa = id("selected-value");
    let clear_qa = id("clear-button");
    let search_qa = id("search-input");
    let dropdown_qa = id("dropdown");
    let option_qa = id("option");
    let create_qa = id("create-new-button");
    let loading_qa = id("loading");

    let search_term = RwSignal::new(String::new());
    let open = RwSignal::new(false);
    let loading = move || is_loading.get().unwrap_or(false);
    let selected = Memo::new(move |_| options.with(|opts| find_selected(opts, value.get()).cloned()));

    let close = move || {
        open.set(false);
        search_term.set(String::new());
    };
    let choose = move |option_id: i64| {
        on_select.run(Some(option_id));
        close();
    };
    let clear = Callback::new(move |_: MouseEvent| {
        on_select.run(None);
        search_term.set(String::new());
    });
    let create = Callback::new(move |_: MouseEvent| {
        close();
        on_create.run(());
    });

    let search_value = InputValue::controlled(
        search_term,
        Callback::new(move |next: String| {
            search_term.set(next);
            open.set(true);
        }),
    );
    let search_hint = Signal::derive(move || {
        Some(if selected.with(Option::is_some) { search_placeholder.clone() } else { placeholder.clone() })
    });

    let dropdown = move || {
        if loading() {
            return view! {
                <div class="p-3 text-center text-muted" data-qa=loading_qa.clone()>"Loading..."</div>
            }
            .into_any();
        }
        let visible: Vec<EntityOption> =
            options.with(|opts| filter_options(opts, &search_term.get()).into_iter().cloned().collect());
        if visible.is_empty() {
            return view! {
                <div class="p-3">
                    <div class="text-muted mb-2">"No results found"</div>
                    <Button
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Sm
                        class="w-100"
                        on_click=create
                        data_qa=create_qa.clone()
                    >
                        "+ Create New"
                    </Button>
                </div>
            }
            .into_any();
        }
        let rows = visible
            .into_iter()
            .map(|option| {
                let option_id = option.id;
                view! {
                    <button
                        type="button"
                        class="w-100 text-start px-3 py-2 border-0 bg-white hover-bg-light"
                        style="cursor: pointer;"
                        on:click=move |_| choose(option_id)
                        data-qa=format!("{option_qa}-{option_id}")
                    >
                        {option.label().to_owned()}
                    </button>
                }
            })
            .collect_view();
        view! {
            <>
                {rows}
                <div class="border-top">
                    <button
                        type="button"
                        class="w-100 text-start px-3 py-2 border-0 bg-white text-primary fw-bold"
                        style="cursor: pointer;"
                        on:click=move |ev| create.run(ev)
                        data-qa=create_qa.clone()
                    >
                        "+ Create New"
                    </button>
                </div>
            </>
        }
        .into_any()
    };

    view! {
        <div
            class="mb-3"
            data-qa=base_qa
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    close();
                }
            }
        >
            <label class="form-label" data-qa=label_qa>
                {label}
                {required.then(|| view! { <span class="text-danger">" *"</span> })}
            </label>

            <Show when=move || selected.with(Option::is_some) && !open.get()>
                <div class="d-flex align-items-center gap-2 mb-2" data-qa=selected_qa.clone()>
                    <div class="form-control" data-qa=selected_value_qa.clone()>
                        {move || selected.get().map(|option| option.label().to_owned()).unwrap_or_default()}
                    </div>
                    <Button
                        variant=ButtonVariant::OutlineSecondary
                        size=ButtonSize::Sm
                        on_click=clear
                        data_qa=clear_qa.clone()
                    >
                        "Clear"
                    </Button>
                </div>
            </Show>

            <div class="position-relative">
                <Input
                    value=search_value
                    placeholder=search_hint
                    disabled=is_loading
                    on_focus=Callback::new(move |()| open.set(true))
                    data_qa=search_qa
                />
                <Show when=move || open.get()>
                    <div
                        class="position-absolute top-100 start-0 w-100 bg-white border rounded shadow-lg z-3 mt-1"
                        style="max-height: 300px; overflow-y: auto;"
                        data-qa=dropdown_qa.clone()
                    >
                        {dropdown.clone()}
                    </div>
                </Show>
            </div>
        </div>
    }
}
