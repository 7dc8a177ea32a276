//! Edit Item Form Component
//!
//! Inline form that replaces a row while it is being edited.

use leptos::prelude::*;
use shopping_list_core::Item;

use crate::context::use_list_controller;

/// Inline editor pre-filled with the item's current values
#[component]
pub fn EditItemForm(item: Item) -> impl IntoView {
    let ctrl = use_list_controller();

    let id = item.id;
    let (name, set_name) = signal(item.name);
    let (price, set_price) = signal(item.price.to_string());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctrl.save_edit(id, &name.get_untracked(), &price.get_untracked());
    };

    view! {
        <li id=id.to_string() class="item editing">
            <form class="edit-form" on:submit=on_submit>
                <input
                    type="text"
                    class="edit-input"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    class="edit-price"
                    step="0.01"
                    min="0"
                    required
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <button type="submit" class="save-btn"><i class="fas fa-check"></i></button>
                <button type="button" class="cancel-btn" on:click=move |_| ctrl.cancel_edit()>
                    <i class="fas fa-times"></i>
                </button>
            </form>
        </li>
    }
}
