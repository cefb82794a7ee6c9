//! Leptos UI components.

pub mod nav_menu;
