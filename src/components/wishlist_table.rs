//! Wishlist Table Component
//!
//! Search results; double-click a row to open it, owners get a delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_remove_wishlist, use_app_store, AppStateStoreFields};
use crate::view::wishlist_rows;

#[component]
pub fn WishlistTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let rows = move || {
        let list = store.wishlists().get();
        ctx.session.with(|session| wishlist_rows(&list, session))
    };

    let delete_wishlist = move |wishlist_id: u64| {
        spawn_local(async move {
            let result = async {
                let routes = ctx.routes()?;
                ctx.client().delete_wishlist(routes, wishlist_id).await
            }
            .await;
            match result {
                Ok(()) => {
                    store_remove_wishlist(&store, wishlist_id);
                    ctx.reload();
                }
                Err(err) => ctx.report("Delete wishlist", err),
            }
        });
    };

    view! {
        <table class="table table-hover" id="tableWishlist">
            <thead>
                <tr>
                    <th scope="col">"Owner"</th>
                    <th scope="col">"Name"</th>
                    <th scope="col">"Comment"</th>
                    <th scope="col"></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|row| (row.id, row.owner.clone(), row.name.clone(), row.comment.clone(), row.can_delete)
                    children=move |row| {
                        let id = row.id;
                        view! {
                            <tr style="cursor: pointer;" on:dblclick=move |_| ctx.open_wishlist(id)>
                                <td>{row.owner}</td>
                                <td>{row.name}</td>
                                <td>{row.comment}</td>
                                <td>
                                    {row.can_delete.then(|| view! {
                                        <DeleteConfirmButton
                                            button_class="btn btn-light"
                                            on_confirm=Callback::new(move |_| delete_wishlist(id))
                                        />
                                    })}
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
