//! Shopping List App
//!
//! Root component: entry form, item list, summary and notification banner.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_list_core::ListConfig;

use crate::components::{AddItemForm, ItemList, NotificationBanner, SummaryBar};
use crate::context::ListController;
use crate::store::AppState;

#[component]
pub fn App(config: ListConfig) -> impl IntoView {
    // One controller per session, shared with every child
    let store = Store::new(AppState::default());
    provide_context(ListController::new(store, config));

    view! {
        <div class="container">
            <header>
                <h1><i class="fas fa-shopping-cart"></i>" Shopping List"</h1>
            </header>

            <AddItemForm />

            <ItemList />

            <SummaryBar />

            <NotificationBanner />
        </div>
    }
}
