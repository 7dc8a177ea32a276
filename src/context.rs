//! List Controller
//!
//! The single owner of list mutations, shared via the Leptos Context API.
//! Views read derived state from it; every change goes through its methods.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use shopping_list_core::{
    parse_price, ItemId, ItemRow, ListConfig, ListError, ListEvent, Notification, Summary,
};

use crate::store::{AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct ListController {
    store: AppStore,
    config: ListConfig,
}

impl ListController {
    pub fn new(store: AppStore, config: ListConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    // ========================
    // Mutations
    // ========================

    /// Add an item from the raw form values.
    /// Returns true when the entry form should be cleared.
    pub fn add(&self, name: &str, price: &str) -> bool {
        let result = self.store.list().write().add(name, parse_price(price));
        match result {
            Ok(_) => {
                self.changed(ListEvent::Added);
                true
            }
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    pub fn start_edit(&self, id: ItemId) {
        let result = self.store.list().write().start_edit(id);
        if let Err(err) = result {
            self.report(err);
        }
    }

    /// Save the inline form; on failure the row stays in edit mode
    pub fn save_edit(&self, id: ItemId, name: &str, price: &str) {
        let result = self.store.list().write().save_edit(id, name, parse_price(price));
        match result {
            Ok(()) => self.changed(ListEvent::Updated),
            Err(err) => self.report(err),
        }
    }

    pub fn cancel_edit(&self) {
        self.store.list().write().cancel_edit();
    }

    /// Start the exit transition; the item is dropped once it elapses
    pub fn delete(&self, id: ItemId) {
        let started = self.store.list().write().begin_removal(id);
        if !started {
            log::debug!("[APP] ignoring delete of #{}", id);
            return;
        }

        let ctrl = *self;
        Timeout::new(self.config.removal_transition_ms, move || ctrl.finish_delete(id)).forget();
    }

    fn finish_delete(&self, id: ItemId) {
        let result = self.store.list().write().finish_removal(id);
        match result {
            Ok(_) => self.changed(ListEvent::Removed),
            Err(err) => self.report(err),
        }
    }

    /// Show a banner and schedule its auto-hide.
    /// A newer banner invalidates the pending hide of the older one.
    pub fn notify(&self, notification: Notification) {
        let ticket = self.store.notifications().write().show(notification);

        let store = self.store;
        Timeout::new(self.config.notification_hide_ms, move || {
            store.notifications().write().hide(ticket);
        })
        .forget();
    }

    fn changed(&self, event: ListEvent) {
        self.pulse_total();
        self.notify(event.notification());
    }

    fn report(&self, err: ListError) {
        match Notification::for_error(&err) {
            Some(notification) => self.notify(notification),
            None => log::debug!("[APP] {}", err),
        }
    }

    fn pulse_total(&self) {
        let ticket = self.store.total_pulse().write().start();

        let store = self.store;
        Timeout::new(self.config.total_pulse_ms, move || {
            store.total_pulse().write().end(ticket);
        })
        .forget();
    }

    // ========================
    // Derived views (tracked)
    // ========================

    pub fn rows(&self) -> Vec<ItemRow> {
        self.store.list().with(|list| list.rows())
    }

    pub fn is_empty(&self) -> bool {
        self.store.list().with(|list| list.is_empty())
    }

    pub fn summary(&self) -> Summary {
        self.store.list().with(|list| list.summary())
    }

    pub fn total_pulsing(&self) -> bool {
        self.store.total_pulse().with(|pulse| pulse.is_active())
    }

    pub fn notification(&self) -> Option<Notification> {
        self.store
            .notifications()
            .with(|center| center.current().cloned())
    }

    pub fn notification_visible(&self) -> bool {
        self.store.notifications().with(|center| center.is_visible())
    }
}

/// Get the list controller from context
pub fn use_list_controller() -> ListController {
    expect_context::<ListController>()
}
