//! `data-qa` identifier helpers.
//!
//! Identifiers are part of the public contract with the end-to-end and
//! load-test suites: `<component>-<subpart>`, lowercase, hyphen-separated.

#[cfg(test)]
#[path = "qa_test.rs"]
mod qa_test;

/// Lowercase `label` and collapse each whitespace run into a single `-`.
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// `"<base>-<part>"`.
pub fn suffixed(base: &str, part: &str) -> String {
    format!("{base}-{part}")
}

/// Log a missing identifier in debug builds.
pub fn warn_missing(component: &str) {
    if cfg!(debug_assertions) {
        leptos::logging::warn!(
            "{component} component must have a unique data-qa attribute for testing. Please provide data_qa prop."
        );
    }
}
