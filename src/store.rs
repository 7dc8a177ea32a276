//! Application State Store
//!
//! Uses Leptos reactive_stores so each field notifies its own subscribers.

use reactive_stores::Store;
use shopping_list_core::{NotificationCenter, Pulse, ShoppingList};

/// Session state; discarded when the page unloads
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, edit mode and pending removals
    pub list: ShoppingList,
    /// The notification banner
    pub notifications: NotificationCenter,
    /// Scale-up on the total display after a change
    pub total_pulse: Pulse,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
