//! List Item Component
//!
//! A single item row with price badge and edit/delete actions.

use leptos::prelude::*;
use shopping_list_core::{format_price, Item};

use crate::context::use_list_controller;

/// A display row; `leaving` plays the exit animation and disables the actions
#[component]
pub fn ListItem(item: Item, leaving: bool) -> impl IntoView {
    let ctrl = use_list_controller();

    let id = item.id;
    let price = format_price(item.price, ctrl.config().currency_symbol);
    let price_class = format!("item-price {}", item.tier().css_class());

    view! {
        <li id=id.to_string() class=if leaving { "item removing" } else { "item" }>
            <span class="item-name">{item.name}</span>
            <span class=price_class>{price}</span>
            <div class="item-actions">
                <button class="edit-btn" disabled=leaving on:click=move |_| ctrl.start_edit(id)>
                    <i class="fas fa-edit"></i>
                </button>
                <button class="delete-btn" disabled=leaving on:click=move |_| ctrl.delete(id)>
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </li>
    }
}
