//! Primitive and feedback widgets shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! These components are pure functions of their props. Class names and
//! `data-qa` identifiers they emit are asserted on by the end-to-end suites,
//! so both are treated as public API.

pub mod button;
pub mod error;
pub mod input;
pub mod loading;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use error::Error;
pub use input::{Input, InputValue};
pub use loading::Loading;
