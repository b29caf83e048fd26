//! List and item actions on a [`Store`].
//!
//! Every action recomputes whatever view it needs from scratch; nothing is
//! cached between calls.

use todo_core::{
    filter_and_sort, filter_and_sort_mut, Item, Placement, Selection, TodoList, INBOX_LIST_ID,
};
use tracing::debug;
use uuid::Uuid;

use crate::error::{validate_list_name, StoreError, StoreResult};
use crate::Store;

impl Store {
    // ==================== Views ====================

    /// Returns the items of `list_id` matching `search`, in display order.
    pub fn view(&self, list_id: &str, search: &str) -> Vec<&Item> {
        filter_and_sort(&self.items, search, list_id)
    }

    // ==================== Item Actions ====================

    /// Creates an item in `list_id`, placed just after the selected
    /// position of the list's unfiltered view, or at the end.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ListNotFound` if the list does not exist.
    pub fn add_item(
        &mut self,
        list_id: &str,
        summary: &str,
        after_selected: Selection,
    ) -> StoreResult<&Item> {
        self.require_list(list_id)?;

        let mut item = Item::new(Uuid::new_v4().to_string(), list_id, summary.trim());
        let ordering = self.ordering();
        let placement = {
            let mut view = filter_and_sort_mut(&mut self.items, "", list_id);
            let to = after_selected.insertion_index(view.len());
            ordering.insert_at(&mut view, &mut item, to)
        };
        debug!(id = %item.id, list_id, ?placement, "added item");

        self.items.push(item);
        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Moves an item to `to_index` of the view of `list_id` filtered by
    /// `search`. Items hidden by the search keep their precedence.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ItemNotFound` if no item has `id`.
    /// - Returns `StoreError::NotInView` if the item is hidden by `search`
    ///   or belongs to another list.
    pub fn move_item(
        &mut self,
        list_id: &str,
        search: &str,
        id: &str,
        to_index: usize,
    ) -> StoreResult<Placement> {
        self.item(id)?;

        let ordering = self.ordering();
        let mut view = filter_and_sort_mut(&mut self.items, search, list_id);
        let placement = ordering
            .reorder(&mut view, id, to_index)
            .ok_or_else(|| StoreError::NotInView { id: id.to_string() })?;
        debug!(id, list_id, search, to_index, ?placement, "moved item");
        Ok(placement)
    }

    /// Sets the completion flag of an item.
    pub fn set_complete(&mut self, id: &str, is_complete: bool) -> StoreResult<&Item> {
        let item = self.item_mut(id)?;
        item.is_complete = is_complete;
        Ok(&*item)
    }

    /// Flips the completion flag of an item.
    pub fn toggle_complete(&mut self, id: &str) -> StoreResult<&Item> {
        let item = self.item_mut(id)?;
        item.is_complete = !item.is_complete;
        Ok(&*item)
    }

    /// Replaces the summary of an item.
    pub fn set_summary(&mut self, id: &str, summary: &str) -> StoreResult<&Item> {
        let item = self.item_mut(id)?;
        item.summary = summary.trim().to_string();
        Ok(&*item)
    }

    /// Removes an item and returns it.
    pub fn remove_item(&mut self, id: &str) -> StoreResult<Item> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StoreError::ItemNotFound { id: id.to_string() })?;
        Ok(self.items.remove(index))
    }

    // ==================== List Actions ====================

    /// Creates a list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidListName` if the name is empty or longer
    /// than 25 characters.
    pub fn add_list(&mut self, name: &str) -> StoreResult<&TodoList> {
        let name = validate_list_name(name)?;
        let list = TodoList::new(Uuid::new_v4().to_string(), name);
        debug!(id = %list.id, name = %list.name, "added list");

        self.lists.push(list);
        let index = self.lists.len() - 1;
        Ok(&self.lists[index])
    }

    /// Renames a list.
    pub fn rename_list(&mut self, id: &str, name: &str) -> StoreResult<&TodoList> {
        let name = validate_list_name(name)?;
        let list = self
            .lists
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::ListNotFound {
                name: id.to_string(),
                suggestion: None,
            })?;
        list.name = name;
        Ok(&*list)
    }

    /// Removes a list and every item in it. Returns the list and the number
    /// of items removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProtectedList` for the inbox.
    pub fn remove_list(&mut self, id: &str) -> StoreResult<(TodoList, usize)> {
        let index = self
            .lists
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| StoreError::ListNotFound {
                name: id.to_string(),
                suggestion: None,
            })?;
        if id == INBOX_LIST_ID {
            return Err(StoreError::ProtectedList {
                name: self.lists[index].name.clone(),
            });
        }

        let before = self.items.len();
        self.items.retain(|i| i.list_id != id);
        let removed = before - self.items.len();

        let list = self.lists.remove(index);
        debug!(id, removed, "removed list");
        Ok((list, removed))
    }

    // ==================== Helpers ====================

    fn require_list(&self, list_id: &str) -> StoreResult<()> {
        if self.lists.iter().any(|l| l.id == list_id) {
            Ok(())
        } else {
            Err(StoreError::ListNotFound {
                name: list_id.to_string(),
                suggestion: None,
            })
        }
    }

    fn item(&self, id: &str) -> StoreResult<&Item> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::ItemNotFound { id: id.to_string() })
    }

    fn item_mut(&mut self, id: &str) -> StoreResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::ItemNotFound { id: id.to_string() })
    }
}
