//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - The store is the only writer of the post draft; views read slices through selectors.
//! - Reducers are plain functions over `&mut AppStore` so they test without a DOM.

use crate::core::error::{FormError, UiError};
use crate::core::form::{FieldValue, PostDraft, PostField};
use crate::core::property::Property;
use crate::core::session::Session;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppStore {
    /// Current user.
    pub session: Session,
    /// Post submission draft.
    pub post: PostSlice,
    /// Sublet listings.
    pub listings: ListingsSlice,
}

/// Post draft plus the last rejected update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostSlice {
    /// Draft being edited.
    pub draft: PostDraft,
    /// Message for the most recent rejected update.
    pub error: Option<String>,
}

/// Listing fetch state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingsSlice {
    /// Loaded listings.
    pub properties: Vec<Property>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Message for the last failed fetch.
    pub error: Option<String>,
}

/// Apply one form update to the draft, recording a rejected update on the slice.
///
/// # Errors
///
/// Returns the [`FormError`] that rejected the update; the draft is unchanged.
pub fn apply_field_update(
    store: &mut AppStore,
    field: PostField,
    value: FieldValue,
) -> Result<(), FormError> {
    match store.post.draft.apply(field, value) {
        Ok(()) => {
            store.post.error = None;
            Ok(())
        }
        Err(err) => {
            store.post.error = Some(err.to_string());
            Err(err)
        }
    }
}

/// Mark the listings slice as loading.
pub fn begin_listings_fetch(store: &mut AppStore) {
    store.listings.loading = true;
    store.listings.error = None;
}

/// Store the outcome of a listings fetch.
pub fn finish_listings_fetch(store: &mut AppStore, outcome: Result<Vec<Property>, UiError>) {
    store.listings.loading = false;
    match outcome {
        Ok(properties) => {
            store.listings.properties = properties;
            store.listings.error = None;
        }
        Err(err) => store.listings.error = Some(err.to_string()),
    }
}
