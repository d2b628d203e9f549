//! Notice Banner Component
//!
//! Shows the last failed call; click to dismiss.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.notice().get().map(|notice| view! {
            <div
                class="alert alert-danger"
                role="alert"
                style="cursor: pointer;"
                title="Dismiss"
                on:click=move |_| store.notice().set(None)
            >
                {notice.text}
            </div>
        })}
    }
}
