//! Wishlist Frontend App
//!
//! Root component: login bar, search form, result table and detail modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{ApiClient, Routes};
use crate::components::{FilterBar, LoginBar, NoticeBanner, WishlistModal, WishlistTable};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::session::Session;
use crate::store::{AppState, AppStateStoreFields};
use crate::view::FilterInput;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let session = RwSignal::new(Session::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let filter = RwSignal::new(FilterInput::default());

    let ctx = AppContext::new(
        session,
        set_reload_trigger,
        ApiClient::new(config.clone()),
        store,
        config.notice_timeout_ms,
    );

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Search again whenever a reload is triggered (login, Find, create, delete)
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let current = session.get_untracked();
        let Ok(routes) = Routes::for_session(&current) else {
            return;
        };
        let list_filter = filter.with_untracked(|f| f.to_filter(&current));
        tracing::debug!("loading wishlists, trigger={}", trigger);
        spawn_local(async move {
            match ctx.client().list_wishlists(routes, &list_filter).await {
                Ok(list) => {
                    tracing::debug!("loaded {} wishlists", list.len());
                    store.wishlists().set(list);
                }
                Err(err) => ctx.report("Find wishlists", err),
            }
        });
    });

    view! {
        <div class="container my-3">
            <header class="d-flex justify-content-between align-items-center">
                <h1>"Wishlists"</h1>
                <LoginBar />
            </header>

            <NoticeBanner />

            <Show when=move || session.with(Session::is_logged_in)>
                <FilterBar filter=filter />
                <WishlistTable />
            </Show>

            <WishlistModal />
        </div>
    }
}
