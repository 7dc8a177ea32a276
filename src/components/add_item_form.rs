//! Add Item Form Component
//!
//! Name and price inputs; submits on the button or on Enter in either field.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_list_controller;

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctrl = use_list_controller();

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let name_input = NodeRef::<html::Input>::new();

    let submit = move || {
        if !ctrl.add(&name.get_untracked(), &price.get_untracked()) {
            return;
        }
        set_name.set(String::new());
        set_price.set(String::new());
        if let Some(input) = name_input.get_untracked() {
            let _ = input.focus();
        }
    };

    let on_keypress = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    view! {
        <div class="input-section">
            <input
                type="text"
                id="itemName"
                placeholder="Item name"
                node_ref=name_input
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
                on:keypress=on_keypress
            />
            <input
                type="number"
                id="itemPrice"
                placeholder="Price"
                step="0.01"
                min="0"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
                on:keypress=on_keypress
            />
            <button id="addItemBtn" on:click=move |_| submit()>
                <i class="fas fa-plus"></i>" Add Item"
            </button>
        </div>
    }
}
