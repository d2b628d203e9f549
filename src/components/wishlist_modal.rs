//! Wishlist Modal Component
//!
//! Shared detail dialog for one wishlist or one wish. The form is built from
//! [`form_fields`] and serialized back on save; the request is routed by the
//! ids the modal holds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FieldInput, SubscriberPanel, WishStatusBar, WishesTable};
use crate::context::{use_app_context, AppContext};
use crate::form::{form_fields, read_form, serialize_form};
use crate::modal::{AfterChange, ModalContent, ModalTarget};
use crate::store::{use_app_store, AppStateStoreFields};

/// Where to go after a successful save or delete
fn after_change(ctx: AppContext, target: ModalTarget) {
    match target.next_view() {
        AfterChange::ReopenWishlist(wishlist_id) => ctx.open_wishlist(wishlist_id),
        AfterChange::CloseAndReload => {
            ctx.close_modal();
            ctx.reload();
        }
    }
}

#[component]
pub fn WishlistModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(content) = store.modal().get_untracked() else {
            return;
        };
        let Some(form) = form_ref.get() else {
            return;
        };
        let body = serialize_form(&read_form(&form));
        let target = content.target();
        spawn_local(async move {
            let result = async {
                let request = ctx.routes()?.save(&target, body)?;
                ctx.client().send(request).await
            }
            .await;
            match result {
                Ok(()) => after_change(ctx, target),
                Err(err) => ctx.report("Save", err),
            }
        });
    };

    let delete = move |_: web_sys::MouseEvent| {
        let Some(content) = store.modal().get_untracked() else {
            return;
        };
        let target = content.target();
        spawn_local(async move {
            let result = async {
                let request = ctx.routes()?.remove(&target)?;
                ctx.client().send(request).await
            }
            .await;
            match result {
                Ok(()) => after_change(ctx, target),
                Err(err) => ctx.report("Delete", err),
            }
        });
    };

    move || {
        store.modal().get().map(|content| {
            let title = content.title();
            let is_new = content.is_new();
            let fields = form_fields(&content);
            let back_to = match &content {
                ModalContent::Wish { wishlist_id, .. } => Some(*wishlist_id),
                ModalContent::Wishlist(_) => None,
            };

            let details = match content {
                ModalContent::Wishlist(Some(wishlist)) => view! {
                    <WishesTable wishlist_id=wishlist.id wishes=wishlist.wishes />
                    <SubscriberPanel wishlist_id=wishlist.id />
                }
                .into_any(),
                ModalContent::Wish { wishlist_id, wish: Some(wish) } => view! {
                    <WishStatusBar wishlist_id=wishlist_id wish_id=wish.id status=wish.status />
                }
                .into_any(),
                _ => ().into_any(),
            };

            view! {
                <div class="modal-backdrop show"></div>
                <div class="modal d-block" id="wishlistModal" tabindex="-1" role="dialog">
                    <div class="modal-dialog modal-lg">
                        <div class="modal-content">
                            <div class="modal-header">
                                <h5 class="modal-title">{title}</h5>
                                <button type="button" class="btn-close" title="Close" on:click=move |_| ctx.close_modal()></button>
                            </div>
                            <div class="modal-body">
                                <form id="modalForm" node_ref=form_ref on:submit=save>
                                    <div class="form-group">
                                        {fields.into_iter().map(|field| view! { <FieldInput field=field /> }).collect_view()}
                                    </div>
                                </form>
                                {details}
                            </div>
                            <div class="modal-footer">
                                {back_to.map(|wishlist_id| view! {
                                    <button id="butBack" type="button" class="btn btn-secondary" on:click=move |_| ctx.open_wishlist(wishlist_id)>
                                        "Back"
                                    </button>
                                })}
                                {(!is_new).then(|| view! {
                                    <button id="butDeleteWL" type="button" class="btn btn-danger" on:click=delete>
                                        "Delete"
                                    </button>
                                })}
                                <button type="submit" form="modalForm" class="btn btn-primary">"Save"</button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
