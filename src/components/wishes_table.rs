//! Wishes Table Component
//!
//! Wishes of the wishlist shown in the modal, plus the "Add wish" button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::modal::ModalContent;
use crate::models::Wish;
use crate::view::wish_rows;

#[component]
pub fn WishesTable(wishlist_id: u64, wishes: Vec<Wish>) -> impl IntoView {
    let ctx = use_app_context();
    let rows = wish_rows(&wishes);

    view! {
        <table class="table table-hover" id="tableWishes">
            <thead>
                <tr>
                    <th scope="col">"Name"</th>
                    <th scope="col">"Link"</th>
                    <th scope="col">"Price"</th>
                    <th scope="col">"Status"</th>
                    <th scope="col">"Comment"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(move |row| {
                    let wish_id = row.id;
                    view! {
                        <tr style="cursor: pointer;" on:dblclick=move |_| ctx.open_wish(wishlist_id, wish_id)>
                            <td>{row.name}</td>
                            <td>{row.link}</td>
                            <td>{row.price}</td>
                            <td>{row.status.as_str()}</td>
                            <td>{row.comment}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
        <button
            type="button"
            class="btn btn-primary"
            on:click=move |_| ctx.open_new(ModalContent::new_wish(wishlist_id))
        >
            "Add wish"
        </button>
    }
}
