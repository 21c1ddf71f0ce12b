//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep environment concerns (wall clock, current route) and
//! pure formatting out of component code so both can be tested without a
//! browser.

pub mod clock;
pub mod date;
pub mod qa;
pub mod route;
