//! Single selection over a live view.

use crate::ordering::Ranked;

/// Tracks which position of a view is selected, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    /// No selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(index: usize) -> Self {
        Self { index: Some(index) }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Selects the item with `id`. Clears the selection if it is not in the view.
    pub fn select_id<T: Ranked>(&mut self, view: &[T], id: &str) -> bool {
        self.index = view.iter().position(|item| item.id() == id);
        self.index.is_some()
    }

    /// Returns the selected item, if the selection is inside the view.
    pub fn selected<'v, T>(&self, view: &'v [T]) -> Option<&'v T> {
        self.index.and_then(|i| view.get(i))
    }

    /// Moves down one item, stopping at the last one. With nothing
    /// selected, selects the first item.
    pub fn select_next(&mut self, len: usize) {
        let next = self.index.map_or(0, |i| i + 1);
        if next < len {
            self.index = Some(next);
        }
    }

    /// Moves up one item, stopping at the first one.
    pub fn select_previous(&mut self) {
        if let Some(i) = self.index.filter(|&i| i > 0) {
            self.index = Some(i - 1);
        }
    }

    /// Where a new item goes: just after the selection, or at the end.
    pub fn insertion_index(&self, len: usize) -> usize {
        self.index.map_or(len, |i| (i + 1).min(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn test_select_next_from_nothing_selects_first() {
        let mut selection = Selection::new();
        selection.select_next(3);
        assert_eq!(selection.index(), Some(0));
    }

    #[test]
    fn test_select_next_stops_at_end() {
        let mut selection = Selection::at(2);
        selection.select_next(3);
        assert_eq!(selection.index(), Some(2));
    }

    #[test]
    fn test_select_next_in_empty_view() {
        let mut selection = Selection::new();
        selection.select_next(0);
        assert_eq!(selection.index(), None);
    }

    #[test]
    fn test_select_previous_stops_at_start() {
        let mut selection = Selection::at(1);
        selection.select_previous();
        assert_eq!(selection.index(), Some(0));
        selection.select_previous();
        assert_eq!(selection.index(), Some(0));
    }

    #[test]
    fn test_select_previous_without_selection() {
        let mut selection = Selection::new();
        selection.select_previous();
        assert_eq!(selection.index(), None);
    }

    #[test]
    fn test_select_id() {
        let view = vec![Item::new("a", "inbox", "A"), Item::new("b", "inbox", "B")];
        let mut selection = Selection::new();

        assert!(selection.select_id(&view, "b"));
        assert_eq!(selection.selected(&view).map(|i| i.id.as_str()), Some("b"));

        assert!(!selection.select_id(&view, "zzz"));
        assert!(selection.selected(&view).is_none());
    }

    #[test]
    fn test_insertion_index() {
        assert_eq!(Selection::new().insertion_index(4), 4);
        assert_eq!(Selection::at(1).insertion_index(4), 2);
        assert_eq!(Selection::at(9).insertion_index(4), 4);
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::at(3);
        selection.clear();
        assert_eq!(selection, Selection::new());
    }
}
