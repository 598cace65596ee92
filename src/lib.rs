//! Dark / light / system theme picker for Leptos web frontends.
//!
//! The [`controller`] holds the selection rules over three small seams
//! ([`storage`], [`scheme`], [`document`]) so they run the same against
//! the browser and against in-memory doubles. [`components`] wraps it in
//! the `ThemeDropdown` view.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod listbox;
pub mod pages;
pub mod scheme;
pub mod storage;
pub mod theme;
