//! View Model
//!
//! Pure rendering of list state into rows, placeholder and footer text.
//! Components turn this into DOM; nothing here touches the browser.

use crate::models::{Filter, ItemId};
use crate::todo_list::TodoList;

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Position in the filtered view, passed back on toggle/delete
    pub filtered_index: usize,
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl RowView {
    pub fn text_class(&self) -> &'static str {
        if self.completed { "todo-text completed" } else { "todo-text" }
    }
}

/// Rendered list body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Rows(Vec<RowView>),
    Empty(&'static str),
}

/// Build the list body for `filter` from scratch
pub fn render(list: &TodoList, filter: Filter) -> ListView {
    let rows: Vec<RowView> = list
        .filtered_view(filter)
        .into_iter()
        .enumerate()
        .map(|(filtered_index, item)| RowView {
            filtered_index,
            id: item.id,
            text: item.text.clone(),
            completed: item.completed,
        })
        .collect();

    if rows.is_empty() {
        ListView::Empty(empty_message(filter))
    } else {
        ListView::Rows(rows)
    }
}

pub fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No todos yet",
        Filter::Active => "No active todos",
        Filter::Completed => "No completed todos",
    }
}

/// Footer counter, e.g. "1 item left" / "3 items left"
pub fn items_left_label(remaining: usize) -> String {
    let noun = if remaining == 1 { "item" } else { "items" };
    format!("{} {} left", remaining, noun)
}

pub fn filter_button_class(is_active: bool) -> &'static str {
    if is_active { "filter-btn active" } else { "filter-btn" }
}
