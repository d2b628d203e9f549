//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::modal::ModalContent;
use crate::models::{Subscriber, Wish, WishlistSummary};

/// Banner message; `seq` tells apart repeated reports of the same text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub text: String,
}

impl Notice {
    /// Whether the dismiss timer started for `seq` may clear what is shown
    pub fn expires(shown: Option<&Notice>, seq: u64) -> bool {
        shown.is_some_and(|n| n.seq == seq)
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last wishlist search result
    pub wishlists: Vec<WishlistSummary>,
    /// Entity shown in the detail modal (None = modal closed)
    pub modal: Option<ModalContent>,
    /// Subscribers of the wishlist in the modal
    pub subscribers: Vec<Subscriber>,
    /// Error message shown in the notice banner
    pub notice: Option<Notice>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remove a wishlist row by ID
pub fn store_remove_wishlist(store: &AppStore, wishlist_id: u64) {
    store.wishlists().write().retain(|w| w.id != wishlist_id);
}

/// Remove a subscriber badge by username
pub fn store_remove_subscriber(store: &AppStore, username: &str) {
    store.subscribers().write().retain(|s| s.username != username);
}

/// Replace the wish shown in the modal, keeping its wishlist
pub fn store_show_wish(store: &AppStore, wishlist_id: u64, wish: Wish) {
    store.modal().set(Some(ModalContent::Wish {
        wishlist_id,
        wish: Some(wish),
    }));
}

/// Close the modal and drop its subscriber list
pub fn store_close_modal(store: &AppStore) {
    store.modal().set(None);
    store.subscribers().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(seq: u64, text: &str) -> Notice {
        Notice { seq, text: text.to_string() }
    }

    #[test]
    fn test_repeated_notice_outlives_first_timer() {
        let first = notice(1, "Save: 403: Forbidden");
        assert!(Notice::expires(Some(&first), 1));

        // Same text reported again before the first timer fires
        let second = notice(2, "Save: 403: Forbidden");
        assert!(!Notice::expires(Some(&second), 1));
        assert!(Notice::expires(Some(&second), 2));
    }

    #[test]
    fn test_dismissed_notice_does_not_expire() {
        assert!(!Notice::expires(None, 1));
    }
}
