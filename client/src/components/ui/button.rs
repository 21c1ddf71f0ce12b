//! Bootstrap button with a closed set of variants and sizes.
//!
//! DESIGN
//! ======
//! The rendered class is derived only from `variant`, `size`, and the caller's
//! extra classes. A disabled button drops activations at the component
//! boundary, so `on_click` never runs while disabled even if the browser
//! dispatches the event anyway.

use std::str::FromStr;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::util::qa;

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

/// Visual style selector, rendered as `btn-<token>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
    Warning,
    Info,
    Light,
    Dark,
    Link,
    OutlinePrimary,
    OutlineSecondary,
    OutlineDanger,
    OutlineSuccess,
    OutlineWarning,
    OutlineInfo,
    OutlineLight,
    OutlineDark,
}

impl ButtonVariant {
    pub const ALL: [Self; 17] = [
        Self::Primary,
        Self::Secondary,
        Self::Danger,
        Self::Success,
        Self::Warning,
        Self::Info,
        Self::Light,
        Self::Dark,
        Self::Link,
        Self::OutlinePrimary,
        Self::OutlineSecondary,
        Self::OutlineDanger,
        Self::OutlineSuccess,
        Self::OutlineWarning,
        Self::OutlineInfo,
        Self::OutlineLight,
        Self::OutlineDark,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Link => "link",
            Self::OutlinePrimary => "outline-primary",
            Self::OutlineSecondary => "outline-secondary",
            Self::OutlineDanger => "outline-danger",
            Self::OutlineSuccess => "outline-success",
            Self::OutlineWarning => "outline-warning",
            Self::OutlineInfo => "outline-info",
            Self::OutlineLight => "outline-light",
            Self::OutlineDark => "outline-dark",
        }
    }
}

/// Returned by `ButtonVariant::from_str` for names outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown button variant: {0:?}")]
pub struct UnknownVariant(pub String);

impl FromStr for ButtonVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// Lenient conversion for props: unknown names fall back to `Primary`.
impl From<&str> for ButtonVariant {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: UnknownVariant| {
            leptos::logging::warn!("{err}, using primary");
            Self::Primary
        })
    }
}

/// Scale selector. `Md` is the default and adds no class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Sm => Some("btn-sm"),
            Self::Md => None,
            Self::Lg => Some("btn-lg"),
        }
    }
}

impl From<&str> for ButtonSize {
    fn from(s: &str) -> Self {
        match s {
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            _ => Self::Md,
        }
    }
}

/// `btn btn-<variant>[ btn-<size>][ <extra>]`.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut class = format!("btn btn-{}", variant.token());
    if let Some(size_class) = size.class() {
        class.push(' ');
        class.push_str(size_class);
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Fallback identifier for buttons rendered without `data_qa`.
pub fn missing_qa(variant: ButtonVariant) -> String {
    format!("button-missing-qa-{}", variant.token())
}

/// Dispatch one activation unless disabled. Returns whether it was dispatched.
pub(crate) fn guard_activation<E>(disabled: bool, event: E, dispatch: impl FnOnce(E)) -> bool {
    if disabled {
        return false;
    }
    dispatch(event);
    true
}

#[component]
pub fn Button(
    #[prop(into, optional)] variant: ButtonVariant,
    #[prop(into, optional)] size: ButtonSize,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(into, default = "button".to_owned())] button_type: String,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] data_qa: Option<String>,
    #[prop(into, optional)] aria_label: Option<String>,
    #[prop(into, optional)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let data_qa = data_qa.unwrap_or_else(|| {
        qa::warn_missing("Button");
        missing_qa(variant)
    });
    let is_disabled = move || disabled.get().unwrap_or(false);

    let on_activate = move |ev: MouseEvent| {
        let disabled = disabled.get_untracked().unwrap_or(false);
        guard_activation(disabled, ev, |ev| {
            if let Some(on_click) = on_click {
                on_click.run(ev);
            }
        });
    };

    view! {
        <button
            type=button_type
            class=button_class(variant, size, &class)
            data-qa=data_qa
            disabled=is_disabled
            aria-label=aria_label
            title=title
            on:click=on_activate
        >
            {children()}
        </button>
    }
}
