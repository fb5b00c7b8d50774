//! Local todo list state.
//!
//! The list is replaced wholesale when a load commits; afterwards the only
//! mutation is flipping one item's `completed` flag.

use crate::types::TodoItem;

/// Copy of `items` with the item matching `id` flipped. An unknown `id`
/// yields an identical list.
pub fn toggle_completed(items: &[TodoItem], id: i64) -> Vec<TodoItem> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                TodoItem {
                    completed: !item.completed,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Holder for the list currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Discard the current list and take `items` in its place.
    pub fn replace(&mut self, items: Vec<TodoItem>) {
        self.items = items;
    }

    /// Returns whether an item with `id` exists.
    pub fn toggle_completed(&mut self, id: i64) -> bool {
        let found = self.items.iter().any(|item| item.id == id);
        if found {
            self.items = toggle_completed(&self.items, id);
        }
        found
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
