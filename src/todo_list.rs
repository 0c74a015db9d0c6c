//! Todo List Model
//!
//! Owns the ordered items and every mutation on them. Toggle and delete take
//! an index into the filtered view and resolve it to the id of the item to change.

use crate::models::{Filter, IgnoreReason, Item, ItemId, Outcome, StoredItem};

/// How a filtered index is mapped back onto the full list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexResolution {
    /// Target the exact item shown at that index
    #[default]
    ById,
    /// Target the first item with equal text and completion state.
    /// Items with identical content are indistinguishable in this mode.
    FirstMatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from persisted entries, assigning fresh ids in order
    pub fn from_stored(stored: Vec<StoredItem>) -> Self {
        let mut list = Self::new();
        for entry in stored {
            let id = list.allocate_id();
            list.items.push(Item {
                id,
                text: entry.text,
                completed: entry.completed,
            });
        }
        list
    }

    pub fn to_stored(&self) -> Vec<StoredItem> {
        self.items.iter().map(Item::to_stored).collect()
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

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a new open item. Whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Outcome {
        let text = text.trim();
        if text.is_empty() {
            return Outcome::Ignored(IgnoreReason::EmptyText);
        }
        let id = self.allocate_id();
        self.items.push(Item {
            id,
            text: text.to_string(),
            completed: false,
        });
        Outcome::Applied
    }

    /// Flip the completion flag of the item shown at `filtered_index`
    pub fn toggle(
        &mut self,
        filter: Filter,
        filtered_index: usize,
        mode: IndexResolution,
    ) -> Outcome {
        match self.resolve(filter, filtered_index, mode) {
            Ok(id) => self.toggle_by_id(id),
            Err(reason) => Outcome::Ignored(reason),
        }
    }

    /// Remove the item shown at `filtered_index`
    pub fn delete(
        &mut self,
        filter: Filter,
        filtered_index: usize,
        mode: IndexResolution,
    ) -> Outcome {
        match self.resolve(filter, filtered_index, mode) {
            Ok(id) => self.delete_by_id(id),
            Err(reason) => Outcome::Ignored(reason),
        }
    }

    pub fn toggle_by_id(&mut self, id: ItemId) -> Outcome {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                Outcome::Applied
            }
            None => Outcome::Ignored(IgnoreReason::UnknownItem(id)),
        }
    }

    pub fn delete_by_id(&mut self, id: ItemId) -> Outcome {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() < before {
            Outcome::Applied
        } else {
            Outcome::Ignored(IgnoreReason::UnknownItem(id))
        }
    }

    /// Drop every completed item, keeping the rest in order
    pub fn clear_completed(&mut self) -> Outcome {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        if self.items.len() < before {
            Outcome::Applied
        } else {
            Outcome::Ignored(IgnoreReason::NothingToClear)
        }
    }

    pub fn filtered_view(&self, filter: Filter) -> Vec<&Item> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Map a filtered index to the id of the item to mutate
    fn resolve(
        &self,
        filter: Filter,
        filtered_index: usize,
        mode: IndexResolution,
    ) -> Result<ItemId, IgnoreReason> {
        let target = self
            .filtered_view(filter)
            .get(filtered_index)
            .copied()
            .ok_or(IgnoreReason::IndexOutOfRange(filtered_index))?;

        match mode {
            IndexResolution::ById => Ok(target.id),
            IndexResolution::FirstMatch => self
                .items
                .iter()
                .find(|item| item.same_content(target))
                .map(|item| item.id)
                .ok_or(IgnoreReason::UnknownItem(target.id)),
        }
    }
}
