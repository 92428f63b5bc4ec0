//! Core, DOM-free primitives and helpers for the Web UI.
pub mod breakpoints;
pub mod endpoints;
pub mod error;
pub mod form;
pub mod layout;
pub mod property;
pub mod session;
pub mod store;
pub mod style;
pub mod theme;
