//! Request handlers for the detection endpoints.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::error::ApiError;
use super::types::{DetectionResponse, HealthResponse};
use super::AppState;
use crate::content::{resolve_suggestion, HistoryRecord, HistorySink, InputChannel};
use crate::emotion::{classify, Category, CategoryProfile};

/// `POST /detect-text-emotion`
pub async fn detect_text_emotion(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<DetectionResponse>, ApiError> {
    detect(state, InputChannel::Text, body?).await
}

/// `POST /detect-voice-emotion`
pub async fn detect_voice_emotion(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<DetectionResponse>, ApiError> {
    detect(state, InputChannel::Voice, body?).await
}

/// `GET /emotions`
pub async fn list_emotions() -> Json<Vec<CategoryProfile>> {
    Json(Category::ALL.iter().map(Category::profile).collect())
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn detect(
    state: AppState,
    channel: InputChannel,
    body: Bytes,
) -> Result<Json<DetectionResponse>, ApiError> {
    let span = info_span!(
        "detect",
        request_id = %Uuid::new_v4(),
        channel = channel.as_str()
    );

    async move {
        let input = extract_input(&body, channel)?;
        let result = classify(&input);
        let suggestion = resolve_suggestion(state.store.as_ref(), result.emotion).await;

        // Input text is never logged
        info!(
            event = "emotion_detected",
            emotion = %result.emotion,
            confidence = result.confidence,
            has_suggestion = suggestion.is_some(),
            "Emotion detected"
        );

        let record = HistoryRecord::new(
            channel,
            &input,
            result.emotion,
            result.confidence,
            suggestion.as_ref(),
        );
        record_history(Arc::clone(&state.history), record);

        Ok(Json(DetectionResponse::new(channel, input, result, suggestion)))
    }
    .instrument(span)
    .await
}

/// Pull the channel's input string out of a JSON body. Anything other than
/// a non-empty string is rejected.
fn extract_input(body: &[u8], channel: InputChannel) -> Result<String, ApiError> {
    let missing = || ApiError::InvalidInput(channel.missing_message());

    let value: Value = serde_json::from_slice(body).map_err(|_| missing())?;
    match value.get(channel.field()) {
        Some(Value::String(input)) if !input.is_empty() => Ok(input.clone()),
        _ => Err(missing()),
    }
}

/// Append to history in the background; failures are logged and dropped
fn record_history(history: Arc<dyn HistorySink>, record: HistoryRecord) {
    tokio::spawn(
        async move {
            if let Err(e) = history.append(record).await {
                warn!(
                    event = "history_write_failed",
                    error = %e,
                    "Failed to record detection history"
                );
            }
        }
        .in_current_span(),
    );
}
