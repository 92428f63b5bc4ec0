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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Portal UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() {
    portal_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn write_browser_hint(out: &mut impl std::io::Write) -> std::io::Result<()> {
    writeln!(
        out,
        "portal-ui renders in the browser; run `trunk serve` from crates/portal-ui (target wasm32-unknown-unknown)."
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_browser_hint(&mut std::io::stderr().lock())
}
