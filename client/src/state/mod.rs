//! Client state modules provided through Leptos context.

pub mod ui;
