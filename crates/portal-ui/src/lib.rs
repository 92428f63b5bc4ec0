#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Portal Web UI.
//! This crate holds the Yew front-end entrypoint plus the DOM-free layout grid, form
//! draft, listing and session helpers it renders from.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::breakpoints::{DESKTOP, PHONE, TABLET};
    use crate::core::layout::{ColHints, Tiered};

    #[test]
    fn column_cascade_across_tiers() {
        let hints = ColHints {
            span: Tiered::new(12, 6, 4).unwrap_or_default(),
            ..ColHints::default()
        };
        let sheet = hints.resolve();
        assert_eq!(sheet.computed_at(PHONE.min_width).get("width"), Some("100%"));
        assert_eq!(sheet.computed_at(TABLET.min_width).get("width"), Some("50%"));
        assert_eq!(
            sheet.computed_at(DESKTOP.min_width).get("width"),
            Some("33.33%")
        );
    }
}
