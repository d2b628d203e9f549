//! Field Input Component
//!
//! Renders one declarative [`FieldSpec`] of the modal form.

use leptos::prelude::*;

use crate::form::{FieldKind, FieldSpec};

#[component]
pub fn FieldInput(field: FieldSpec) -> impl IntoView {
    let FieldSpec { id, label, name, kind, value, required } = field;
    match kind {
        FieldKind::Hidden => view! {
            <input type="hidden" id=id name=name value=value />
        }
        .into_any(),
        FieldKind::Text => view! {
            <label for=id class="col-form-label">{label}</label>
            <input type="text" class="form-control" id=id name=name value=value required=required />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <label for=id class="col-form-label">{label}</label>
            <select class="form-select" id=id name=name>
                {options.into_iter().map(|option| view! {
                    <option value=option selected={option == value}>{option}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
    }
}
