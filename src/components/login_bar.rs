//! Login Bar Component
//!
//! Username/user id inputs with Login and Logout buttons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session::{parse_user_id, Session};

#[component]
pub fn LoginBar() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (user_id, set_user_id) = signal(String::new());
    let logged_in = move || ctx.session.with(Session::is_logged_in);

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        match parse_user_id(&user_id.get()) {
            Ok(id) => ctx.login(id, name),
            Err(err) => ctx.report("Login", err),
        }
    };

    view! {
        <form class="login-bar row g-2 align-items-center" on:submit=on_login>
            <div class="col-auto">
                <input
                    id="inUsername"
                    type="text"
                    class="form-control"
                    placeholder="Username"
                    prop:disabled=logged_in
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <Show
                when=move || !logged_in()
                fallback=move || view! {
                    <div class="col-auto">
                        <button id="butLogout" type="button" class="btn btn-secondary" on:click=move |_| ctx.logout()>
                            "Logout"
                        </button>
                    </div>
                }
            >
                <div class="col-auto">
                    <input
                        type="number"
                        min="1"
                        class="form-control"
                        placeholder="User ID"
                        prop:value=move || user_id.get()
                        on:input=move |ev| set_user_id.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-auto">
                    <button id="butLogin" type="submit" class="btn btn-primary">"Login"</button>
                </div>
            </Show>
        </form>
    }
}
