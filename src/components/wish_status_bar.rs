//! Wish Status Bar Component
//!
//! Status selector of a saved wish with book and share actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{MinusIcon, PlayIcon, PlusIcon};
use crate::context::use_app_context;
use crate::models::WishStatus;
use crate::store::{store_show_wish, use_app_store};
use crate::view::wish_controls;

#[component]
pub fn WishStatusBar(wishlist_id: u64, wish_id: u64, status: WishStatus) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (selected, set_selected) = signal(status);
    let controls = wish_controls(status);

    // Send the selected status and re-render the wish from the response
    let book = move |_| {
        let status = selected.get_untracked();
        spawn_local(async move {
            let result = async {
                let routes = ctx.routes()?;
                ctx.client()
                    .set_wish_status(routes, wishlist_id, wish_id, status)
                    .await
            }
            .await;
            match result {
                Ok(wish) => store_show_wish(&store, wishlist_id, wish),
                Err(err) => ctx.report("Book wish", err),
            }
        });
    };

    let share = move |join: bool| {
        spawn_local(async move {
            let result = async {
                let routes = ctx.routes()?;
                let client = ctx.client();
                if join {
                    client.join_share(routes, wishlist_id, wish_id).await
                } else {
                    client.leave_share(routes, wishlist_id, wish_id).await
                }
            }
            .await;
            if let Err(err) = result {
                ctx.report(if join { "Join share" } else { "Leave share" }, err);
            }
        });
    };

    view! {
        <div class="row row-cols-lg-auto g-3 align-items-center">
            <div class="col-12">
                <label class="col-form-label" for="selectStatus">"Status"</label>
                <select
                    class="form-select"
                    id="selectStatus"
                    on:change=move |ev| {
                        if let Some(status) = WishStatus::parse(&event_target_value(&ev)) {
                            set_selected.set(status);
                        }
                    }
                >
                    {WishStatus::ALL.into_iter().map(move |option| view! {
                        <option value=option.as_str() selected={option == status}>{option.as_str()}</option>
                    }).collect_view()}
                </select>
            </div>
            {controls.book.then(|| view! {
                <div class="col-12">
                    <button type="button" class="btn btn-success" style="margin-top: 36px;" title="Set status" on:click=book>
                        <PlayIcon />
                    </button>
                </div>
            })}
            {controls.share_add.then(|| view! {
                <div class="col-12">
                    <button type="button" class="btn btn-primary" style="margin-top: 36px;" title="Join share" on:click=move |_| share(true)>
                        <PlusIcon />
                    </button>
                </div>
            })}
            {controls.share_remove.then(|| view! {
                <div class="col-12">
                    <button type="button" class="btn btn-danger" style="margin-top: 36px;" title="Leave share" on:click=move |_| share(false)>
                        <MinusIcon />
                    </button>
                </div>
            })}
        </div>
    }
}
