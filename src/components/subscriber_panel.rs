//! Subscriber Panel Component
//!
//! Removable badges for the users with access to a wishlist, and an inline
//! "+ Add" input to grant access to one more.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::XIcon;
use crate::context::use_app_context;
use crate::store::{store_remove_subscriber, use_app_store, AppStateStoreFields};

#[component]
pub fn SubscriberPanel(wishlist_id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (adding, set_adding) = signal(false);
    let (new_username, set_new_username) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the input as soon as it is revealed
    Effect::new(move |_| {
        if adding.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let unsubscribe = move |username: String| {
        spawn_local(async move {
            let result = async {
                let routes = ctx.routes()?;
                ctx.client().unsubscribe(routes, wishlist_id, &username).await
            }
            .await;
            match result {
                Ok(()) => store_remove_subscriber(&store, &username),
                Err(err) => ctx.report("Unsubscribe", err),
            }
        });
    };

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = new_username.get().trim().to_string();
        if username.is_empty() {
            return;
        }
        spawn_local(async move {
            let result = async {
                let routes = ctx.routes()?;
                let client = ctx.client();
                client.subscribe(routes, wishlist_id, &username).await?;
                client.list_subscribers(routes, wishlist_id).await
            }
            .await;
            match result {
                Ok(subscribers) => {
                    store.subscribers().set(subscribers);
                    set_new_username.set(String::new());
                    set_adding.set(false);
                }
                Err(err) => ctx.report("Subscribe", err),
            }
        });
    };

    view! {
        <div id="divSubscribers" class="mt-2">
            <span>"Subscribers:"</span>
            <span class="subscriber-box ms-1">
                <For
                    each=move || store.subscribers().get()
                    key=|subscriber| subscriber.username.clone()
                    children=move |subscriber| {
                        let username = subscriber.username.clone();
                        view! {
                            <span class="badge bg-primary m-1 me-0">
                                <span>{subscriber.username}</span>
                                <span
                                    class="unsubscribe"
                                    style="cursor: pointer;"
                                    title="Remove access"
                                    on:click=move |_| unsubscribe(username.clone())
                                >
                                    <XIcon />
                                </span>
                            </span>
                        }
                    }
                />
                <Show when=move || !adding.get()>
                    <span
                        id="spanAdd"
                        class="badge bg-primary m-1"
                        style="cursor: pointer;"
                        on:click=move |_| set_adding.set(true)
                    >
                        <span>"+"</span>
                        <span>"Add"</span>
                    </span>
                </Show>
                <form style="display: inline-block;" on:submit=on_add>
                    <input
                        id="inputUserToSubscribe"
                        node_ref=input_ref
                        placeholder="Username"
                        style:display=move || if adding.get() { "inline-block" } else { "none" }
                        prop:value=move || new_username.get()
                        on:input=move |ev| set_new_username.set(event_target_value(&ev))
                        on:blur=move |_| set_adding.set(false)
                    />
                </form>
            </span>
        </div>
    }
}
