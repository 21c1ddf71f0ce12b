//! Bottom status bar showing a status message and the time of render.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only component that reads the clock. It takes one snapshot per
//! render from an injected [`ClockHandle`] (prop first, then context, then the
//! system clock) and formats it in UTC, so a pinned clock yields identical
//! markup on every machine.

use leptos::prelude::*;

use crate::util::clock::ClockHandle;
use crate::util::date::format_time_of_day;

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

pub const DEFAULT_STATUS_MESSAGE: &str = "Ready";

/// Message to display; empty or missing text shows [`DEFAULT_STATUS_MESSAGE`].
pub fn status_message(message: Option<&str>) -> &str {
    match message {
        Some(text) if !text.is_empty() => text,
        _ => DEFAULT_STATUS_MESSAGE,
    }
}

fn status_bar_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        "bg-light border-top py-2 px-3".to_owned()
    } else {
        format!("bg-light border-top py-2 px-3 {extra}")
    }
}

/// Status bar pinned to the bottom edge of the viewport.
#[component]
pub fn StatusBar(
    #[prop(into, optional)] message: MaybeProp<String>,
    #[prop(into, optional)] class: String,
    #[prop(optional)] clock: Option<ClockHandle>,
) -> impl IntoView {
    let clock = clock.or_else(use_context::<ClockHandle>).unwrap_or_default();
    let timestamp = format_time_of_day(clock.now());
    let text = move || status_message(message.get().as_deref()).to_owned();

    view! {
        <div
            class=status_bar_class(&class)
            style="position: fixed; bottom: 0; left: 0; right: 0; z-index: 1000;"
            data-qa="status-bar"
        >
            <div class="container-fluid">
                <div class="d-flex justify-content-between align-items-center">
                    <small class="text-muted" data-qa="status-bar-message">
                        {text}
                    </small>
                    <small class="text-muted" data-qa="status-bar-timestamp">
                        {timestamp}
                    </small>
                </div>
            </div>
        </div>
    }
}
