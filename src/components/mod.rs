//! UI Components
//!
//! Leptos views bound to the list controller.

mod add_item_form;
mod edit_item_form;
mod item_list;
mod list_item;
mod notification_banner;
mod summary_bar;

pub use add_item_form::AddItemForm;
pub use edit_item_form::EditItemForm;
pub use item_list::ItemList;
pub use list_item::ListItem;
pub use notification_banner::NotificationBanner;
pub use summary_bar::SummaryBar;
