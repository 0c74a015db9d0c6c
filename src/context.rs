//! Application Context
//!
//! Shared todo state provided via Leptos Context API.

use leptos::prelude::*;

use crate::controller::TodoApp;
use crate::models::Filter;
use crate::storage::BrowserStorage;

/// App-wide state handle, cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authoritative list, filter and storage. Every write re-renders its readers.
    pub state: RwSignal<TodoApp<BrowserStorage>>,
}

impl AppContext {
    pub fn new(app: TodoApp<BrowserStorage>) -> Self {
        Self {
            state: RwSignal::new(app),
        }
    }

    pub fn submit(&self, text: &str) {
        self.state.update(|app| {
            app.submit(text);
        });
    }

    /// Toggle the row at `filtered_index` of the current view
    pub fn toggle(&self, filtered_index: usize) {
        self.state.update(|app| {
            app.toggle(filtered_index);
        });
    }

    /// Delete the row at `filtered_index` of the current view
    pub fn delete(&self, filtered_index: usize) {
        self.state.update(|app| {
            app.delete(filtered_index);
        });
    }

    pub fn clear_completed(&self) {
        self.state.update(|app| {
            app.clear_completed();
        });
    }

    pub fn select_filter(&self, filter: Filter) {
        self.state.update(|app| app.select_filter(filter));
    }
}
