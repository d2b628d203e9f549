//! Application Context
//!
//! Session, API client and the actions shared by several components,
//! provided via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError, Routes};
use crate::modal::ModalContent;
use crate::session::Session;
use crate::store::{store_close_modal, AppStateStoreFields, AppStore, Notice};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current logged-in user
    pub session: RwSignal<Session>,
    /// Trigger to reload the wishlist table
    set_reload_trigger: WriteSignal<u32>,
    client: StoredValue<ApiClient, LocalStorage>,
    store: AppStore,
    notice_timeout_ms: u32,
    notice_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(
        session: RwSignal<Session>,
        set_reload_trigger: WriteSignal<u32>,
        client: ApiClient,
        store: AppStore,
        notice_timeout_ms: u32,
    ) -> Self {
        Self {
            session,
            set_reload_trigger,
            client: StoredValue::new_local(client),
            store,
            notice_timeout_ms,
            notice_seq: StoredValue::new(0),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    /// Routes for the current user, or `NotLoggedIn`
    pub fn routes(&self) -> Result<Routes, ApiError> {
        self.session.with_untracked(Routes::for_session)
    }

    /// Trigger a reload of the wishlist table
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn login(&self, user_id: u64, username: String) {
        tracing::info!("login as {} ({})", username, user_id);
        self.session.update(|s| s.login(user_id, username));
        self.store.wishlists().write().clear();
        self.reload();
    }

    pub fn logout(&self) {
        tracing::info!("logout");
        self.session.update(Session::logout);
        self.store.wishlists().write().clear();
        store_close_modal(&self.store);
    }

    /// Log a failed call and show it in the notice banner
    pub fn report(&self, action: &str, err: ApiError) {
        tracing::warn!("{} failed: {}", action, err);
        self.notice_seq.update_value(|seq| *seq += 1);
        let seq = self.notice_seq.get_value();
        self.store.notice().set(Some(Notice {
            seq,
            text: format!("{}: {}", action, err),
        }));

        if self.notice_timeout_ms == 0 {
            return;
        }
        let store = self.store;
        let timeout = self.notice_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            // A newer notice keeps its own timer
            if store.notice().with_untracked(|shown| Notice::expires(shown.as_ref(), seq)) {
                store.notice().set(None);
            }
        });
    }

    /// Fetch a wishlist and show it with its subscribers
    pub fn open_wishlist(&self, wishlist_id: u64) {
        let ctx = *self;
        spawn_local(async move {
            let result = async {
                let routes = ctx.routes()?;
                let client = ctx.client();
                let wishlist = client.get_wishlist(routes, wishlist_id).await?;
                ctx.store.modal().set(Some(ModalContent::Wishlist(Some(wishlist))));
                ctx.store.subscribers().write().clear();
                let subscribers = client.list_subscribers(routes, wishlist_id).await?;
                ctx.store.subscribers().set(subscribers);
                Ok::<_, ApiError>(())
            }
            .await;
            if let Err(err) = result {
                ctx.report("Open wishlist", err);
            }
        });
    }

    /// Fetch a single wish and show it
    pub fn open_wish(&self, wishlist_id: u64, wish_id: u64) {
        let ctx = *self;
        spawn_local(async move {
            let result = async {
                let routes = ctx.routes()?;
                let wish = ctx.client().get_wish(routes, wishlist_id, wish_id).await?;
                ctx.store.modal().set(Some(ModalContent::Wish {
                    wishlist_id,
                    wish: Some(wish),
                }));
                Ok::<_, ApiError>(())
            }
            .await;
            if let Err(err) = result {
                ctx.report("Open wish", err);
            }
        });
    }

    /// Show an empty modal for a new entity
    pub fn open_new(&self, content: ModalContent) {
        self.store.subscribers().write().clear();
        self.store.modal().set(Some(content));
    }

    pub fn close_modal(&self) {
        store_close_modal(&self.store);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
