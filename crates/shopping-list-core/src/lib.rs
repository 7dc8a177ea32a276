//! Shopping List Core
//!
//! Platform-independent list state for the shopping list widget.
//! The UI crate binds this to the DOM; nothing here touches the browser.

pub mod config;
pub mod error;
pub mod format;
pub mod item;
pub mod list;
pub mod notification;
pub mod pulse;

pub use config::ListConfig;
pub use error::{ListError, ListResult};
pub use format::{format_amount, format_price, parse_price};
pub use item::{Item, ItemId, PriceTier};
pub use list::{EditState, ItemRow, RowMode, ShoppingList, Summary};
pub use notification::{HideTicket, ListEvent, Notification, NotificationCenter, NotificationKind};
pub use pulse::{Pulse, PulseTicket};
