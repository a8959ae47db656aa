//! Reactive application state shared via Leptos contexts.

pub mod board;
pub mod ui;
