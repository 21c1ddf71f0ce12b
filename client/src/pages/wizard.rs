//! New-application wizard entry points.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::entity_create_modal::EntityCreateModal;
use crate::components::entity_select::{EntityOption, EntitySelect};
use crate::components::status_bar::StatusBar;
use crate::components::ui::input::{Input, InputValue};
use crate::util::clock::ClockHandle;
use crate::util::date::display_date_only;
use crate::util::qa;

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

pub const WIZARD_STEPS: u8 = 2;

pub fn wizard_step_path(step: u8) -> String {
    format!("/applications/new/step{step}")
}

pub fn wizard_step_title(step: u8) -> &'static str {
    match step {
        1 => "Job Details",
        _ => "Related Records",
    }
}

/// Next id for a locally created entity: one past the largest known id.
pub fn next_entity_id(options: &[EntityOption]) -> i64 {
    options.iter().map(|option| option.id).max().map_or(1, |id| id + 1)
}

/// Entity built from the create form, or `None` when the name is blank.
pub fn new_entity(options: &[EntityOption], name: &str) -> Option<EntityOption> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(EntityOption { id: next_entity_id(options), name: name.to_owned(), display: None })
}

/// `/applications/new` forwards to the first step.
#[component]
pub fn WizardRedirect() -> impl IntoView {
    view! {
        <div class="container py-3 py-md-4">
            <div class="text-center">
                <p>"Redirecting to application wizard..."</p>
            </div>
        </div>
        <Redirect path=wizard_step_path(1)/>
    }
}

#[component]
pub fn WizardStep(step: u8) -> impl IntoView {
    let page_qa = format!("application-wizard-step{step}");
    let progress = format!("Step {step} of {WIZARD_STEPS}");

    view! {
        <div class="min-vh-100 bg-light" data-qa=page_qa.clone() style="padding-bottom: 60px;">
            <div class="container py-3 py-md-4">
                <h1 class="h3 mb-1" data-qa=qa::suffixed(&page_qa, "title")>
                    "New Application: "{wizard_step_title(step)}
                </h1>
                <p class="text-muted" data-qa=qa::suffixed(&page_qa, "progress")>{progress}</p>
                {(step == 1).then(|| view! { <JobDetailsForm/> })}
            </div>
            <StatusBar message=format!("New application, step {step}")/>
        </div>
    }
}

/// First wizard step: position, hiring company, and the application date.
#[component]
fn JobDetailsForm() -> impl IntoView {
    let clock = use_context::<ClockHandle>().unwrap_or_default();
    let applied_on = display_date_only(clock.now());

    let position = RwSignal::new(String::new());
    let companies = RwSignal::new(Vec::<EntityOption>::new());
    let company = RwSignal::new(None::<i64>);
    let creating = RwSignal::new(false);
    let draft_name = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<String>);

    let save_company = Callback::new(move |()| {
        match companies.with_untracked(|list| new_entity(list, &draft_name.get_untracked())) {
            Some(created) => {
                company.set(Some(created.id));
                companies.update(|list| list.push(created));
                draft_name.set(String::new());
                name_error.set(None);
                creating.set(false);
            }
            None => name_error.set(Some("Company name is required".to_owned())),
        }
    });

    view! {
        <form
            class="card shadow-sm"
            data-qa="application-wizard-step1-form"
            on:submit=|ev| ev.prevent_default()
        >
            <div class="card-body">
                <Input
                    label="Position"
                    value=InputValue::bound(position)
                    required=true
                    data_qa="application-wizard-position"
                />
                <EntitySelect
                    label="Company"
                    value=company
                    options=companies
                    on_select=Callback::new(move |id| company.set(id))
                    on_create=Callback::new(move |()| creating.set(true))
                />
                <p class="text-muted small mb-0" data-qa="application-wizard-date-applied">
                    "Date applied: "{applied_on}
                </p>
            </div>
        </form>
        <EntityCreateModal
            title="New Company"
            is_open=creating
            on_close=Callback::new(move |()| creating.set(false))
            on_save=save_company
        >
            <Input
                label="Company Name"
                value=InputValue::bound(draft_name)
                error=Signal::derive(move || name_error.get())
                required=true
                data_qa="new-company-name"
            />
        </EntityCreateModal>
    }
}
