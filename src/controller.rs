//! Input Controller
//!
//! Single owner of the list, the active filter and storage. Each handler
//! applies one model operation and persists before returning.

use crate::config::TodoConfig;
use crate::models::{Filter, IgnoreReason, Outcome};
use crate::storage::{KeyValueStore, TodoStorage};
use crate::todo_list::{IndexResolution, TodoList};
use crate::view::{self, ListView};

#[derive(Debug)]
pub struct TodoApp<S> {
    list: TodoList,
    filter: Filter,
    resolution: IndexResolution,
    storage: TodoStorage<S>,
}

impl<S: KeyValueStore> TodoApp<S> {
    /// Load persisted items; must run before the first render
    pub fn load(store: S, config: &TodoConfig) -> Self {
        let storage = TodoStorage::new(store, config.storage_key.clone());
        let list = storage.load();
        Self {
            list,
            filter: Filter::default(),
            resolution: config.resolution,
            storage,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn storage(&self) -> &TodoStorage<S> {
        &self.storage
    }

    pub fn submit(&mut self, text: &str) -> Outcome {
        let outcome = self.list.add(text);
        self.commit("add", outcome)
    }

    pub fn toggle(&mut self, filtered_index: usize) -> Outcome {
        let outcome = self.list.toggle(self.filter, filtered_index, self.resolution);
        self.commit("toggle", outcome)
    }

    pub fn delete(&mut self, filtered_index: usize) -> Outcome {
        let outcome = self.list.delete(self.filter, filtered_index, self.resolution);
        self.commit("delete", outcome)
    }

    pub fn clear_completed(&mut self) -> Outcome {
        let outcome = self.list.clear_completed();
        self.commit("clear completed", outcome)
    }

    /// Filter is UI state only and is not persisted
    pub fn select_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            log::debug!("[APP] Filter {} -> {}", self.filter.as_str(), filter.as_str());
            self.filter = filter;
        }
    }

    pub fn view(&self) -> ListView {
        view::render(&self.list, self.filter)
    }

    pub fn items_left_label(&self) -> String {
        view::items_left_label(self.list.remaining_count())
    }

    fn commit(&mut self, action: &str, outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::Applied => {
                if let Err(e) = self.storage.save(&self.list) {
                    log::error!("[APP] {} applied but not persisted: {}", action, e);
                }
            }
            Outcome::Ignored(
                reason @ (IgnoreReason::EmptyText | IgnoreReason::NothingToClear),
            ) => {
                log::debug!("[APP] {} ignored: {}", action, reason);
            }
            Outcome::Ignored(reason) => {
                log::warn!("[APP] {} ignored: {}", action, reason);
            }
        }
        outcome
    }
}
