//! Persistence and environment helpers for the app shell.

use crate::core::form::PostDraft;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const POST_DRAFT_KEY: &str = "portal.post_draft";

pub(crate) fn load_post_draft() -> PostDraft {
    match LocalStorage::get::<PostDraft>(POST_DRAFT_KEY) {
        Ok(draft) => draft,
        Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => PostDraft::default(),
        Err(err) => {
            log_storage_error("load", POST_DRAFT_KEY, &err.to_string());
            PostDraft::default()
        }
    }
}

/// Store the draft, or drop the stored copy once the draft is blank again.
pub(crate) fn sync_post_draft(draft: &PostDraft) {
    if draft.is_blank() {
        clear_post_draft();
        return;
    }
    if let Err(err) = LocalStorage::set(POST_DRAFT_KEY, draft) {
        log_storage_error("persist", POST_DRAFT_KEY, &err.to_string());
    }
}

pub(crate) fn clear_post_draft() {
    LocalStorage::delete(POST_DRAFT_KEY);
}

/// Origin the API is served from; the UI and API share a host.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8000".to_string());
    Url::new(&href).map_or_else(|_| "http://localhost:8000".to_string(), |url| url.origin())
}

fn log_storage_error(operation: &str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
