//! App Configuration
//!
//! Compile-time defaults; the widget reads no environment or files.

use log::LevelFilter;

use crate::storage::STORAGE_KEY;
use crate::todo_list::IndexResolution;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// localStorage key holding the list
    pub storage_key: String,
    /// How row indices map onto list items
    pub resolution: IndexResolution,
    pub log_level: LevelFilter,
    /// Records kept by the rolling logger
    pub log_capacity: usize,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            resolution: IndexResolution::ById,
            log_level: LevelFilter::Info,
            log_capacity: 200,
        }
    }
}

impl TodoConfig {
    /// Reproduce first-match index resolution
    pub fn with_first_match(mut self) -> Self {
        self.resolution = IndexResolution::FirstMatch;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TodoConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.resolution, IndexResolution::ById);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_first_match_override() {
        let config = TodoConfig::default().with_first_match();
        assert_eq!(config.resolution, IndexResolution::FirstMatch);
        assert_eq!(config.storage_key, "todos");
    }
}
