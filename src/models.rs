//! Frontend Models
//!
//! Todo items, filters and operation outcomes.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned when an item enters the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Same text and completion state, ignoring the id
    pub fn same_content(&self, other: &Item) -> bool {
        self.text == other.text && self.completed == other.completed
    }

    pub fn to_stored(&self) -> StoredItem {
        StoredItem {
            text: self.text.clone(),
            completed: self.completed,
        }
    }
}

/// Persisted shape of an item. Ids are not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    pub text: String,
    /// Entries written without the flag read as not done
    #[serde(default)]
    pub completed: bool,
}

impl StoredItem {
    pub fn new(text: &str, completed: bool) -> Self {
        Self {
            text: text.to_string(),
            completed,
        }
    }
}

/// Which subset of the list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Display order of the filter controls
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}

/// Why an operation left the list untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Text was empty after trimming
    EmptyText,
    /// Filtered index past the end of the filtered view
    IndexOutOfRange(usize),
    /// No item carries this id (or matches its content in compatibility mode)
    UnknownItem(ItemId),
    /// No completed items to remove
    NothingToClear,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::EmptyText => write!(f, "empty text"),
            IgnoreReason::IndexOutOfRange(idx) => write!(f, "filtered index {} out of range", idx),
            IgnoreReason::UnknownItem(id) => write!(f, "no item {}", id),
            IgnoreReason::NothingToClear => write!(f, "no completed items"),
        }
    }
}

/// Result of a list mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}
