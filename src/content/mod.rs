//! Suggestion content and detection history collaborators.
//!
//! The service only reads suggestions and only appends history. Both sides
//! are traits so the Supabase backend can be swapped for the in-memory one
//! in tests and offline runs.

mod memory;
mod supabase;

pub use memory::{MemoryHistory, MemoryStore};
pub use supabase::{SupabaseClient, SupabaseConfig};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::emotion::Category;

/// Errors raised by the content store or the history sink
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Content store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode content store response: {0}")]
    Decode(String),

    #[error("Content store unavailable: {0}")]
    Unavailable(String),
}

/// Identifier of a category row in the content store.
///
/// Stored as text so numeric and UUID keys are handled alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(pub String);

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(CategoryId(s)),
            serde_json::Value::Number(n) => Ok(CategoryId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "unsupported category id: {}",
                other
            ))),
        }
    }
}

/// Kind of content a suggestion row carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Quote,
    Advice,
    Music,
    #[serde(other)]
    Other,
}

/// One row of suggestion content linked to a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRow {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    #[serde(default)]
    pub content: Option<String>,
}

impl SuggestionRow {
    pub fn new(kind: SuggestionKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: Some(content.into()),
        }
    }
}

/// Curated content shown with a detection result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub quote: String,
    pub advice: String,
    pub music: String,
}

impl Suggestion {
    /// First row of each kind wins; kinds with no row stay empty
    pub fn from_rows(rows: &[SuggestionRow]) -> Self {
        let first = |kind: SuggestionKind| {
            rows.iter()
                .find(|row| row.kind == kind)
                .and_then(|row| row.content.clone())
                .unwrap_or_default()
        };

        Self {
            quote: first(SuggestionKind::Quote),
            advice: first(SuggestionKind::Advice),
            music: first(SuggestionKind::Music),
        }
    }
}

/// Channel a request came in on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputChannel {
    Text,
    Voice,
}

impl InputChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputChannel::Text => "text",
            InputChannel::Voice => "voice",
        }
    }

    /// JSON field carrying the input for this channel
    pub fn field(&self) -> &'static str {
        match self {
            InputChannel::Text => "text",
            InputChannel::Voice => "transcript",
        }
    }

    /// Client error message when the input field is missing
    pub fn missing_message(&self) -> &'static str {
        match self {
            InputChannel::Text => "Text input is required",
            InputChannel::Voice => "Transcript is required",
        }
    }
}

/// One detection, as written to the history sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    pub input_type: InputChannel,
    pub input_text: String,
    pub detected_emotion: Category,
    pub confidence: f64,
    pub suggestion_shown: Option<String>,
}

impl HistoryRecord {
    pub fn new(
        channel: InputChannel,
        text: &str,
        emotion: Category,
        confidence: f64,
        suggestion: Option<&Suggestion>,
    ) -> Self {
        Self {
            input_type: channel,
            input_text: text.to_string(),
            detected_emotion: emotion,
            confidence,
            suggestion_shown: suggestion
                .map(|s| s.quote.clone())
                .filter(|quote| !quote.is_empty()),
        }
    }
}

/// Read-only source of suggestion content
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Resolve a category name to its store id, `None` if unknown
    async fn lookup_category_id(&self, name: &str) -> Result<Option<CategoryId>, ContentError>;

    /// All suggestion rows linked to a category
    async fn list_suggestions(&self, id: &CategoryId) -> Result<Vec<SuggestionRow>, ContentError>;
}

/// Append-only record of past detections
#[async_trait]
pub trait HistorySink: Send + Sync {
    async fn append(&self, record: HistoryRecord) -> Result<(), ContentError>;
}

/// Look up the suggestion for a category.
///
/// Unknown categories, categories with no rows and store failures all yield
/// `None`; failures are logged and never surfaced.
pub async fn resolve_suggestion(store: &dyn ContentStore, category: Category) -> Option<Suggestion> {
    match fetch_suggestion(store, category).await {
        Ok(suggestion) => suggestion,
        Err(e) => {
            warn!(
                event = "suggestion_lookup_failed",
                emotion = %category,
                error = %e,
                "Suggestion lookup failed, responding without one"
            );
            None
        }
    }
}

async fn fetch_suggestion(
    store: &dyn ContentStore,
    category: Category,
) -> Result<Option<Suggestion>, ContentError> {
    let Some(id) = store.lookup_category_id(category.as_str()).await? else {
        debug!("No content store entry for category {}", category);
        return Ok(None);
    };

    let rows = store.list_suggestions(&id).await?;
    if rows.is_empty() {
        debug!("No suggestions stored for category {}", category);
        return Ok(None);
    }

    Ok(Some(Suggestion::from_rows(&rows)))
}
