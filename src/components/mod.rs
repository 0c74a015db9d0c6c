//! UI Components
//!
//! Leptos components for the todo widget.

mod new_todo_form;
mod todo_row;
mod todo_list_view;
mod filter_bar;
mod todo_footer;
mod log_panel;

pub use new_todo_form::NewTodoForm;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use filter_bar::FilterBar;
pub use todo_footer::TodoFooter;
pub use log_panel::LogPanel;
