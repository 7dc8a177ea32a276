//! Shopping List State
//!
//! Owns the ordered items, the edit mode and the rows whose removal
//! transition is still running. Every view is derived from this state.

use std::collections::BTreeSet;

use crate::error::{ListError, ListResult};
use crate::item::{Item, ItemId};

/// Browsing, or editing exactly one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Browsing,
    Editing(ItemId),
}

/// How a single row is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowMode {
    Display,
    /// Inline form pre-filled with the current name/price
    Editing,
    /// Exit transition running, removal pending
    Leaving,
}

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub item: Item,
    pub mode: RowMode,
}

/// Derived count and total
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
}

/// The session's shopping list
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<Item>,
    edit: EditState,
    leaving: BTreeSet<ItemId>,
    next_id: u32,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn edit_mode(&self) -> bool {
        matches!(self.edit, EditState::Editing(_))
    }

    pub fn current_edit_id(&self) -> Option<ItemId> {
        match self.edit {
            EditState::Editing(id) => Some(id),
            EditState::Browsing => None,
        }
    }

    pub fn is_leaving(&self, id: ItemId) -> bool {
        self.leaving.contains(&id)
    }

    /// Append a new item after validation
    pub fn add(&mut self, name: &str, price: f64) -> ListResult<ItemId> {
        let name = validate(name, price)?;
        if self.name_taken(name, None) {
            log::debug!("[LIST] rejected duplicate name {:?}", name);
            return Err(ListError::DuplicateName);
        }

        let id = self.allocate_id();
        self.items.push(Item::new(id, name.to_string(), price));
        log::info!("[LIST] added #{} {:?} at {}", id, name, price);
        Ok(id)
    }

    /// Enter edit mode for `id`
    pub fn start_edit(&mut self, id: ItemId) -> ListResult<()> {
        if self.get(id).is_none() {
            return Err(ListError::UnknownItem(id));
        }
        self.edit = EditState::Editing(id);
        log::debug!("[LIST] editing #{}", id);
        Ok(())
    }

    /// Replace name/price in place and leave edit mode.
    /// On failure the edit state is left untouched.
    pub fn save_edit(&mut self, id: ItemId, name: &str, price: f64) -> ListResult<()> {
        let name = validate(name, price)?;
        if self.name_taken(name, Some(id)) {
            log::debug!("[LIST] rejected rename of #{} to duplicate {:?}", id, name);
            return Err(ListError::DuplicateName);
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ListError::UnknownItem(id))?;
        item.name = name.to_string();
        item.price = price;

        self.edit = EditState::Browsing;
        log::info!("[LIST] updated #{} to {:?} at {}", id, name, price);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Browsing;
    }

    /// First phase of a delete: mark the row as leaving.
    /// Returns false if the id is unknown or already leaving.
    pub fn begin_removal(&mut self, id: ItemId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let started = self.leaving.insert(id);
        if started {
            log::debug!("[LIST] removal of #{} started", id);
        }
        started
    }

    /// Second phase of a delete, once the transition has elapsed
    pub fn finish_removal(&mut self, id: ItemId) -> ListResult<Item> {
        self.leaving.remove(&id);
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ListError::UnknownItem(id))?;
        let item = self.items.remove(index);

        if self.current_edit_id() == Some(id) {
            self.edit = EditState::Browsing;
        }
        log::info!("[LIST] removed #{} {:?}", id, item.name);
        Ok(item)
    }

    /// Rows in display order
    pub fn rows(&self) -> Vec<ItemRow> {
        self.items
            .iter()
            .map(|item| {
                let mode = if self.leaving.contains(&item.id) {
                    RowMode::Leaving
                } else if self.current_edit_id() == Some(item.id) {
                    RowMode::Editing
                } else {
                    RowMode::Display
                };
                ItemRow {
                    item: item.clone(),
                    mode,
                }
            })
            .collect()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.items.len(),
            // Empty f64 sums are -0.0; start from +0.0 so the total reads "0.00"
            total: self.items.iter().fold(0.0, |sum, item| sum + item.price),
        }
    }

    fn name_taken(&self, name: &str, except: Option<ItemId>) -> bool {
        self.items
            .iter()
            .any(|item| Some(item.id) != except && item.has_name(name))
    }

    fn allocate_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }
}

/// Trim the name and check both fields
fn validate(name: &str, price: f64) -> ListResult<&str> {
    let name = name.trim();
    if name.is_empty() || !price.is_finite() || price <= 0.0 {
        log::debug!("[LIST] rejected input name={:?} price={}", name, price);
        return Err(ListError::InvalidInput);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_amount;
    use crate::item::PriceTier;

    fn make_list(entries: &[(&str, f64)]) -> (ShoppingList, Vec<ItemId>) {
        let mut list = ShoppingList::new();
        let ids = entries
            .iter()
            .map(|(name, price)| list.add(name, *price).unwrap())
            .collect();
        (list, ids)
    }

    fn names(list: &ShoppingList) -> Vec<&str> {
        list.items().iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_add_appends_with_tier() {
        let mut list = ShoppingList::new();
        for (price, tier) in [
            (3.5, PriceTier::Low),
            (10.0, PriceTier::Medium),
            (50.0, PriceTier::Medium),
            (75.0, PriceTier::High),
        ] {
            let before = list.len();
            let id = list.add(&format!("Item {}", price), price).unwrap();
            assert_eq!(list.len(), before + 1);
            assert_eq!(list.get(id).unwrap().tier(), tier);
        }
    }

    #[test]
    fn test_add_trims_name() {
        let (list, ids) = make_list(&[("  Bread  ", 2.0)]);
        assert_eq!(list.get(ids[0]).unwrap().name, "Bread");
    }

    #[test]
    fn test_duplicate_name_case_insensitive() {
        let mut list = ShoppingList::new();
        list.add("Milk", 3.5).unwrap();
        assert_eq!(list.add("milk", 4.0), Err(ListError::DuplicateName));
        assert_eq!(list.add("  MILK ", 4.0), Err(ListError::DuplicateName));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].price, 3.5);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let (mut list, _) = make_list(&[("Milk", 3.5)]);
        assert_eq!(list.add("", 5.0), Err(ListError::InvalidInput));
        assert_eq!(list.add("   ", 5.0), Err(ListError::InvalidInput));
        assert_eq!(list.add("Eggs", 0.0), Err(ListError::InvalidInput));
        assert_eq!(list.add("Eggs", -1.0), Err(ListError::InvalidInput));
        assert_eq!(list.add("Eggs", f64::NAN), Err(ListError::InvalidInput));
        assert_eq!(list.add("Eggs", f64::INFINITY), Err(ListError::InvalidInput));
        assert_eq!(names(&list), vec!["Milk"]);
    }

    #[test]
    fn test_invalid_input_checked_before_duplicate() {
        let (mut list, _) = make_list(&[("Milk", 3.5)]);
        assert_eq!(list.add("milk", 0.0), Err(ListError::InvalidInput));
    }

    #[test]
    fn test_summary() {
        let (list, _) = make_list(&[("A", 2.5), ("B", 15.0), ("C", 60.0)]);
        let summary = list.summary();
        assert_eq!(summary.count, 3);
        assert_eq!(format_amount(summary.total), "77.50");

        let empty = ShoppingList::new().summary();
        assert_eq!(empty.count, 0);
        assert_eq!(format_amount(empty.total), "0.00");
    }

    #[test]
    fn test_summary_after_last_removal_is_positive_zero() {
        let (mut list, ids) = make_list(&[("A", 4.0)]);
        list.begin_removal(ids[0]);
        list.finish_removal(ids[0]).unwrap();
        let total = list.summary().total;
        assert!(total.is_sign_positive());
        assert_eq!(format_amount(total), "0.00");
    }

    #[test]
    fn test_ids_unique_and_not_reused() {
        let (mut list, ids) = make_list(&[("A", 1.0), ("B", 2.0)]);
        assert_ne!(ids[0], ids[1]);
        list.begin_removal(ids[1]);
        list.finish_removal(ids[1]).unwrap();
        let c = list.add("C", 3.0).unwrap();
        assert!(!ids.contains(&c));
    }

    #[test]
    fn test_edit_in_place() {
        let (mut list, ids) = make_list(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
        list.start_edit(ids[1]).unwrap();
        assert!(list.edit_mode());
        assert_eq!(list.current_edit_id(), Some(ids[1]));

        list.save_edit(ids[1], "NewName", 9.99).unwrap();
        assert_eq!(names(&list), vec!["A", "NewName", "C"]);
        let item = list.get(ids[1]).unwrap();
        assert_eq!(item.price, 9.99);
        assert_eq!(item.id, ids[1]);
        assert!(!list.edit_mode());
        assert_eq!(list.current_edit_id(), None);
    }

    #[test]
    fn test_edit_may_keep_own_name() {
        let (mut list, ids) = make_list(&[("Milk", 1.0)]);
        list.start_edit(ids[0]).unwrap();
        list.save_edit(ids[0], "MILK", 2.0).unwrap();
        assert_eq!(list.items()[0].name, "MILK");
        assert_eq!(list.items()[0].price, 2.0);
    }

    #[test]
    fn test_edit_collision_stays_in_edit_mode() {
        let (mut list, ids) = make_list(&[("Milk", 1.0), ("Eggs", 2.0)]);
        list.start_edit(ids[1]).unwrap();
        assert_eq!(
            list.save_edit(ids[1], "milk", 5.0),
            Err(ListError::DuplicateName)
        );
        assert_eq!(list.get(ids[1]).unwrap().name, "Eggs");
        assert_eq!(list.get(ids[1]).unwrap().price, 2.0);
        assert_eq!(list.edit_state(), EditState::Editing(ids[1]));

        assert_eq!(list.save_edit(ids[1], "Eggs", -3.0), Err(ListError::InvalidInput));
        assert_eq!(list.edit_state(), EditState::Editing(ids[1]));
    }

    #[test]
    fn test_cancel_edit() {
        let (mut list, ids) = make_list(&[("Milk", 1.0)]);
        list.start_edit(ids[0]).unwrap();
        list.cancel_edit();
        assert_eq!(list.edit_state(), EditState::Browsing);
        assert_eq!(names(&list), vec!["Milk"]);
    }

    #[test]
    fn test_start_edit_unknown_id() {
        let (mut list, _) = make_list(&[("Milk", 1.0)]);
        assert_eq!(
            list.start_edit(ItemId(99)),
            Err(ListError::UnknownItem(ItemId(99)))
        );
        assert!(!list.edit_mode());
    }

    #[test]
    fn test_removal_is_two_phase() {
        let (mut list, ids) = make_list(&[("A", 1.0), ("B", 2.0)]);
        assert!(list.begin_removal(ids[0]));
        // Still present while the transition runs
        assert_eq!(list.len(), 2);
        assert_eq!(list.rows()[0].mode, RowMode::Leaving);
        assert!(!list.begin_removal(ids[0]));

        let removed = list.finish_removal(ids[0]).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(list.len(), 1);
        assert!(!list.is_leaving(ids[0]));
        assert!(list.rows().iter().all(|row| row.item.id != ids[0]));
        assert_eq!(list.summary().total, 2.0);
    }

    #[test]
    fn test_removal_unknown_id_is_noop() {
        let (mut list, _) = make_list(&[("A", 1.0)]);
        assert!(!list.begin_removal(ItemId(42)));
        assert_eq!(
            list.finish_removal(ItemId(42)),
            Err(ListError::UnknownItem(ItemId(42)))
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_removing_edited_item_exits_edit_mode() {
        let (mut list, ids) = make_list(&[("A", 1.0), ("B", 2.0)]);
        list.start_edit(ids[1]).unwrap();
        list.begin_removal(ids[1]);
        list.finish_removal(ids[1]).unwrap();
        assert_eq!(list.edit_state(), EditState::Browsing);
    }

    #[test]
    fn test_rows_modes() {
        let (mut list, ids) = make_list(&[("A", 1.0), ("B", 20.0), ("C", 70.0)]);
        list.start_edit(ids[1]).unwrap();
        list.begin_removal(ids[2]);
        let modes: Vec<RowMode> = list.rows().iter().map(|row| row.mode).collect();
        assert_eq!(modes, vec![RowMode::Display, RowMode::Editing, RowMode::Leaving]);
        assert!(ShoppingList::new().rows().is_empty());
    }
}
