//! Notification Banner Component
//!
//! Toast styled by severity; hidden again by the controller's timer.

use leptos::prelude::*;

use crate::context::use_list_controller;

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let ctrl = use_list_controller();

    let banner_class = move || {
        let kind = ctrl
            .notification()
            .map(|n| n.kind.as_str())
            .unwrap_or_default();
        if ctrl.notification_visible() {
            format!("notification {}", kind)
        } else {
            format!("notification {} hidden", kind)
        }
    };

    view! {
        <div id="notification" class=banner_class>
            {move || ctrl.notification().map(|n| view! {
                <i class=n.kind.icon_class()></i>
                " "
                <span id="notificationText">{n.message}</span>
            })}
        </div>
    }
}
