//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page resolves route data from the static catalog and delegates
//! rendering details to `components`.

pub mod home;
pub mod product;
