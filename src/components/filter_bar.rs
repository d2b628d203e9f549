//! Filter Bar Component
//!
//! Wishlist search form: owner, name, sort order and "only mine".

use leptos::prelude::*;

use crate::api::OrderBy;
use crate::context::use_app_context;
use crate::modal::ModalContent;
use crate::view::FilterInput;

#[component]
pub fn FilterBar(filter: RwSignal<FilterInput>) -> impl IntoView {
    let ctx = use_app_context();
    let only_mine = move || filter.with(|f| f.only_mine);

    let on_find = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.reload();
    };

    view! {
        <form class="filter-bar row g-2 align-items-center my-2" on:submit=on_find>
            <div class="col-auto form-check">
                <input
                    id="checkOnlyMy"
                    type="checkbox"
                    class="form-check-input"
                    prop:checked=only_mine
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        filter.update(|f| f.only_mine = checked);
                    }
                />
                <label class="form-check-label" for="checkOnlyMy">"Only mine"</label>
            </div>
            <div class="col-auto">
                <input
                    id="inputFilterByUsername"
                    type="text"
                    class="form-control"
                    placeholder="Owner"
                    prop:disabled=only_mine
                    prop:value=move || filter.with(|f| f.username.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.username = value);
                    }
                />
            </div>
            <div class="col-auto">
                <input
                    id="inputFilterByName"
                    type="text"
                    class="form-control"
                    placeholder="Name"
                    prop:value=move || filter.with(|f| f.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.name = value);
                    }
                />
            </div>
            <div class="col-auto">
                <select
                    id="selectOrderBy"
                    class="form-select"
                    on:change=move |ev| {
                        let order_by = OrderBy::parse(&event_target_value(&ev));
                        filter.update(|f| f.order_by = order_by);
                    }
                >
                    {OrderBy::ALL.into_iter().map(|order_by| view! {
                        <option
                            value=order_by.as_str()
                            selected=move || filter.with(|f| f.order_by == order_by)
                        >
                            {order_by.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>
            <div class="col-auto">
                <button type="submit" class="btn btn-primary">"Find"</button>
            </div>
            <div class="col-auto">
                <button
                    type="button"
                    class="btn btn-success"
                    on:click=move |_| ctx.open_new(ModalContent::new_wishlist())
                >
                    "New wishlist"
                </button>
            </div>
        </form>
    }
}
