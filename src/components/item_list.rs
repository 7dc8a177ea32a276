//! Item List Component
//!
//! Rebuilds the rows from the list state after every change.

use leptos::prelude::*;
use shopping_list_core::{ItemRow, RowMode};

use crate::components::{EditItemForm, ListItem};
use crate::context::use_list_controller;

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <i class="fas fa-shopping-basket"></i>
            <p>"Your shopping list is empty"</p>
            <p>"Add some items to get started"</p>
        </div>
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let ctrl = use_list_controller();

    // Every displayed field is part of the key so any change rebuilds the row
    let row_key = |row: &ItemRow| {
        (row.item.id, row.item.name.clone(), row.item.price.to_bits(), row.mode)
    };

    let render_row = |row: ItemRow| {
        let leaving = row.mode == RowMode::Leaving;
        match row.mode {
            RowMode::Editing => view! { <EditItemForm item=row.item /> }.into_any(),
            RowMode::Display | RowMode::Leaving => {
                view! { <ListItem item=row.item leaving=leaving /> }.into_any()
            }
        }
    };

    view! {
        <ul id="itemsList" class="items-list">
            <Show when=move || !ctrl.is_empty() fallback=|| view! { <EmptyState /> }>
                <For each=move || ctrl.rows() key=row_key children=render_row />
            </Show>
        </ul>
    }
}
