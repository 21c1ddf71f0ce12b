//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui` holds the presentational primitives every form and page is built
//! from; the remaining modules are application chrome (navigation, status)
//! and composite form widgets layered on top of those primitives.

pub mod entity_create_modal;
pub mod entity_select;
pub mod sidebar;
pub mod status_bar;
pub mod ui;
