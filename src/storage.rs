//! Storage Adapter
//!
//! Persists the todo list as a JSON array under a single key of an
//! origin-scoped key-value store (browser `localStorage`).

use std::cell::RefCell;
use std::collections::HashMap;

use crate::models::StoredItem;
use crate::todo_list::TodoList;

/// Default key holding the serialized list
pub const STORAGE_KEY: &str = "todos";

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No store available (no window, or storage disabled)
    Unavailable(String),
    Read(String),
    Write(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Read error: {}", msg),
            StorageError::Write(msg) => write!(f, "Write error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialize error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// String key-value store the adapter reads and writes through
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves a `TodoList` under one key
#[derive(Debug)]
pub struct TodoStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TodoStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored list. Missing, unreadable or corrupt data yields an empty list.
    pub fn load(&self) -> TodoList {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::info!("[STORAGE] No saved list under '{}'", self.key);
                return TodoList::new();
            }
            Err(e) => {
                log::warn!("[STORAGE] {}; starting empty", e);
                return TodoList::new();
            }
        };

        match serde_json::from_str::<Vec<StoredItem>>(&raw) {
            Ok(stored) => {
                log::info!("[STORAGE] Loaded {} items from '{}'", stored.len(), self.key);
                TodoList::from_stored(stored)
            }
            Err(e) => {
                log::warn!("[STORAGE] Discarding unparsable value under '{}': {}", self.key, e);
                TodoList::new()
            }
        }
    }

    /// Overwrite the stored value with the full list
    pub fn save(&self, list: &TodoList) -> StorageResult<()> {
        let json = serde_json::to_string(&list.to_stored())
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set(&self.key, &json)?;
        log::debug!("[STORAGE] Saved {} items to '{}'", list.len(), self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose every access fails
    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Read("quota".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    fn storage_with(raw: &str) -> TodoStorage<MemoryStorage> {
        TodoStorage::new(MemoryStorage::with_entry(STORAGE_KEY, raw), STORAGE_KEY)
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let storage = TodoStorage::new(MemoryStorage::new(), STORAGE_KEY);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_invalid_data_is_empty() {
        for raw in ["not json", "{\"text\":\"a\"}", "42", "null", "[{\"text\":1}]", ""] {
            assert!(storage_with(raw).load().is_empty(), "expected empty list for {:?}", raw);
        }
    }

    #[test]
    fn test_load_read_error_is_empty() {
        let storage = TodoStorage::new(BrokenStorage, STORAGE_KEY);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_reads_saved_array() {
        let storage =
            storage_with(r#"[{"text":"a","completed":true},{"text":"b","completed":false}]"#);
        let list = storage.load();
        assert_eq!(list.len(), 2);
        assert!(list.items()[0].completed);
        assert_eq!(list.items()[1].text, "b");
    }

    #[test]
    fn test_load_keeps_entries_missing_completed_flag() {
        let storage = storage_with(r#"[{"text":"a","completed":false},{"text":"b"}]"#);
        let list = storage.load();
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[1].text, "b");
        assert!(!list.items()[1].completed);
    }

    #[test]
    fn test_partial_entries_survive_next_save() {
        let storage = storage_with(r#"[{"text":"keep me","completed":false},{"text":"b"}]"#);
        let mut list = storage.load();
        list.add("new");
        storage.save(&list).unwrap();

        let raw = storage.store().get(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            concat!(
                r#"[{"text":"keep me","completed":false},"#,
                r#"{"text":"b","completed":false},"#,
                r#"{"text":"new","completed":false}]"#
            )
        );
    }

    #[test]
    fn test_save_writes_json_array() {
        let storage = TodoStorage::new(MemoryStorage::new(), "custom");
        let mut list = TodoList::new();
        list.add("buy milk");

        storage.save(&list).unwrap();
        let raw = storage.store().get("custom").unwrap().unwrap();
        assert_eq!(raw, r#"[{"text":"buy milk","completed":false}]"#);
        assert_eq!(storage.key(), "custom");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let storage = TodoStorage::new(MemoryStorage::new(), STORAGE_KEY);
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.add("c");
        list.toggle_by_id(list.items()[1].id);

        storage.save(&list).unwrap();
        let reloaded = storage.load();
        assert_eq!(reloaded.to_stored(), list.to_stored());

        storage.save(&reloaded).unwrap();
        assert_eq!(storage.load().to_stored(), list.to_stored());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let storage = storage_with(r#"[{"text":"old","completed":false}]"#);
        storage.save(&TodoList::new()).unwrap();
        assert_eq!(storage.store().get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_save_surfaces_write_error() {
        let storage = TodoStorage::new(BrokenStorage, STORAGE_KEY);
        let err = storage.save(&TodoList::new()).unwrap_err();
        assert_eq!(err, StorageError::Write("quota exceeded".to_string()));
        assert_eq!(err.to_string(), "Write error: quota exceeded");
    }
}
