//! List Errors
//!
//! Validation failures raised by list mutations.

use crate::item::ItemId;

/// Common result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Why a list mutation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Empty name, or a price that is missing, non-numeric or not positive
    InvalidInput,
    /// Another item already uses this name (case-insensitive)
    DuplicateName,
    /// No item with this id; callers treat it as a no-op
    UnknownItem(ItemId),
}

impl ListError {
    /// Whether the user should be told about this failure
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, ListError::UnknownItem(_))
    }
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::InvalidInput => write!(f, "Please enter valid item name and price"),
            ListError::DuplicateName => write!(f, "This item already exists in your list!"),
            ListError::UnknownItem(id) => write!(f, "No item with id {}", id),
        }
    }
}

impl std::error::Error for ListError {}
