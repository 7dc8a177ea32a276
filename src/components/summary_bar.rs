//! Summary Bar Component
//!
//! Item count and running total.

use leptos::prelude::*;
use shopping_list_core::format_price;

use crate::context::use_list_controller;

#[component]
pub fn SummaryBar() -> impl IntoView {
    let ctrl = use_list_controller();
    let symbol = ctrl.config().currency_symbol;

    view! {
        <div class="summary">
            <div class="summary-item">
                <span class="summary-label">"Items: "</span>
                <span id="itemsCount">{move || ctrl.summary().count}</span>
            </div>
            <div class="summary-item">
                <span class="summary-label">"Total: "</span>
                <span
                    id="totalAmount"
                    class=move || if ctrl.total_pulsing() { "total-amount pulse" } else { "total-amount" }
                >
                    {move || format_price(ctrl.summary().total, symbol)}
                </span>
            </div>
        </div>
    }
}
