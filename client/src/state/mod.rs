//! Reactive application state provided through Leptos context.
//!
//! Each struct is wrapped in an `RwSignal` by `App` and read with
//! `expect_context` by pages and components.

pub mod cart;
pub mod toast;
pub mod ui;
