//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages compose the shared components and own nothing but route-scoped
//! layout; every page ends with the `StatusBar`.

pub mod home;
pub mod not_found;
pub mod section;
pub mod wizard;
