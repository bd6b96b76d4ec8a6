//! In-process content store and history sink.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{CategoryId, ContentError, ContentStore, HistoryRecord, HistorySink, SuggestionRow};
use crate::emotion::Category;

/// Content store backed by a map, seeded at construction
#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: HashMap<String, CategoryId>,
    suggestions: HashMap<CategoryId, Vec<SuggestionRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category with its suggestion rows
    pub fn with_category(mut self, category: Category, rows: Vec<SuggestionRow>) -> Self {
        let id = CategoryId((category.index() + 1).to_string());
        self.categories.insert(category.as_str().to_string(), id.clone());
        self.suggestions.insert(id, rows);
        self
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn lookup_category_id(&self, name: &str) -> Result<Option<CategoryId>, ContentError> {
        Ok(self.categories.get(name).cloned())
    }

    async fn list_suggestions(&self, id: &CategoryId) -> Result<Vec<SuggestionRow>, ContentError> {
        Ok(self.suggestions.get(id).cloned().unwrap_or_default())
    }
}

/// History sink that keeps records in memory
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Mutex<Vec<HistoryRecord>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far
    pub fn records(&self) -> Vec<HistoryRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl HistorySink for MemoryHistory {
    async fn append(&self, record: HistoryRecord) -> Result<(), ContentError> {
        self.records
            .lock()
            .map_err(|_| ContentError::Unavailable("history lock poisoned".to_string()))?
            .push(record);
        Ok(())
    }
}
