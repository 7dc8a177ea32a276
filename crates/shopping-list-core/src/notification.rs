//! Notification State
//!
//! A single banner that auto-hides. Each `show` bumps a generation counter so
//! an older hide timer cannot dismiss a newer message.

use crate::error::ListError;

/// Banner severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
        }
    }

    /// Font Awesome icon shown before the message
    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
            NotificationKind::Warning => "fas fa-exclamation-triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Banner for a rejected change; `None` for failures the user never sees
    pub fn for_error(err: &ListError) -> Option<Self> {
        err.is_user_facing()
            .then(|| Self::new(err.to_string(), NotificationKind::Error))
    }
}

/// Completed list changes that are announced in the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Added,
    Updated,
    Removed,
}

impl ListEvent {
    pub fn notification(&self) -> Notification {
        match self {
            ListEvent::Added => Notification::new("Item added successfully!", NotificationKind::Success),
            ListEvent::Updated => {
                Notification::new("Item updated successfully!", NotificationKind::Success)
            }
            ListEvent::Removed => {
                Notification::new("Item removed from your list", NotificationKind::Warning)
            }
        }
    }
}

/// Issued by `show`; only the latest ticket can hide the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    visible: bool,
    generation: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing and return the ticket for its auto-hide
    pub fn show(&mut self, notification: Notification) -> HideTicket {
        log::debug!(
            "[NOTIFY] {} {:?}",
            notification.kind.as_str(),
            notification.message
        );
        self.current = Some(notification);
        self.visible = true;
        self.generation += 1;
        HideTicket(self.generation)
    }

    /// Hide the banner if `ticket` belongs to the notification on screen
    pub fn hide(&mut self, ticket: HideTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last notification shown; kept after hiding so the banner can fade out with its text
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_hide() {
        let mut center = NotificationCenter::new();
        assert!(!center.is_visible());
        assert!(center.current().is_none());

        let ticket = center.show(ListEvent::Added.notification());
        assert!(center.is_visible());
        let current = center.current().unwrap();
        assert_eq!(current.message, "Item added successfully!");
        assert_eq!(current.kind, NotificationKind::Success);

        assert!(center.hide(ticket));
        assert!(!center.is_visible());
        assert!(!center.hide(ticket));
    }

    #[test]
    fn test_stale_ticket_does_not_hide_newer_message() {
        let mut center = NotificationCenter::new();
        let first = center.show(Notification::new("first", NotificationKind::Success));
        let second = center.show(Notification::new("second", NotificationKind::Error));

        assert!(!center.hide(first));
        assert!(center.is_visible());
        assert_eq!(center.current().unwrap().message, "second");
        assert_eq!(center.current().unwrap().kind, NotificationKind::Error);

        assert!(center.hide(second));
        assert!(!center.is_visible());
    }

    #[test]
    fn test_event_messages() {
        let added = ListEvent::Added.notification();
        assert_eq!(added.message, "Item added successfully!");
        assert_eq!(added.kind, NotificationKind::Success);

        let updated = ListEvent::Updated.notification();
        assert_eq!(updated.message, "Item updated successfully!");
        assert_eq!(updated.kind, NotificationKind::Success);

        let removed = ListEvent::Removed.notification();
        assert_eq!(removed.message, "Item removed from your list");
        assert_eq!(removed.kind, NotificationKind::Warning);
    }

    #[test]
    fn test_error_notifications() {
        let invalid = Notification::for_error(&ListError::InvalidInput).unwrap();
        assert_eq!(invalid.message, "Please enter valid item name and price");
        assert_eq!(invalid.kind, NotificationKind::Error);

        let duplicate = Notification::for_error(&ListError::DuplicateName).unwrap();
        assert_eq!(duplicate.message, "This item already exists in your list!");
        assert_eq!(duplicate.kind, NotificationKind::Error);

        assert!(Notification::for_error(&ListError::UnknownItem(crate::item::ItemId(3))).is_none());
    }

    #[test]
    fn test_kind_styles() {
        assert_eq!(NotificationKind::Warning.as_str(), "warning");
        assert_eq!(NotificationKind::Error.icon_class(), "fas fa-exclamation-circle");
    }
}
