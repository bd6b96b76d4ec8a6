//! Supabase (PostgREST) backed content store and history sink.
//!
//! Tables used:
//! - `emotions (id, name)`
//! - `suggestions (emotion_id, type, content)`
//! - `detection_history (input_type, input_text, detected_emotion, confidence, suggestion_shown)`

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{CategoryId, ContentError, ContentStore, HistoryRecord, HistorySink, SuggestionRow};

/// Longest error body kept when the store rejects a request
const MAX_ERROR_BODY: usize = 200;

/// Connection settings for a Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_key: String,
    pub timeout: Duration,
}

pub struct SupabaseClient {
    client: reqwest::Client,
    rest_url: String,
}

#[derive(Debug, Deserialize)]
struct EmotionRow {
    id: CategoryId,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self, ContentError> {
        if config.url.trim().is_empty() {
            return Err(ContentError::Unavailable("Supabase URL is required".to_string()));
        }
        if config.service_key.trim().is_empty() {
            return Err(ContentError::Unavailable("Supabase service key is required".to_string()));
        }

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.service_key)
            .map_err(|e| ContentError::Unavailable(format!("Invalid service key header: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.service_key))
            .map_err(|e| ContentError::Unavailable(format!("Invalid service key header: {}", e)))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            rest_url: Self::rest_url(&config.url),
        })
    }

    fn rest_url(base: &str) -> String {
        format!("{}/rest/v1", base.trim_end_matches('/'))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    /// Turn a non-success response into a `Status` error with a short body
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ContentError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let truncated: String = body.chars().take(MAX_ERROR_BODY).collect();
        Err(ContentError::Status {
            status: status.as_u16(),
            body: truncated,
        })
    }
}

#[async_trait]
impl ContentStore for SupabaseClient {
    async fn lookup_category_id(&self, name: &str) -> Result<Option<CategoryId>, ContentError> {
        let response = self
            .client
            .get(self.table_url("emotions"))
            .query(&[
                ("select", "id".to_string()),
                ("name", format!("eq.{}", name)),
                ("limit", "1".to_string()),
            ])
            .send()
            .await?;

        let rows: Vec<EmotionRow> = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;

        debug!("Category lookup for {}: {} row(s)", name, rows.len());
        Ok(rows.into_iter().next().map(|row| row.id))
    }

    async fn list_suggestions(&self, id: &CategoryId) -> Result<Vec<SuggestionRow>, ContentError> {
        let response = self
            .client
            .get(self.table_url("suggestions"))
            .query(&[
                ("select", "type,content".to_string()),
                ("emotion_id", format!("eq.{}", id.0)),
            ])
            .send()
            .await?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))
    }
}

#[async_trait]
impl HistorySink for SupabaseClient {
    async fn append(&self, record: HistoryRecord) -> Result<(), ContentError> {
        let response = self
            .client
            .post(self.table_url("detection_history"))
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}
