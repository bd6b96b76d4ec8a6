//! Wire types for the detection endpoints.

use serde::Serialize;

use crate::content::{InputChannel, Suggestion};
use crate::emotion::{Category, ClassificationResult};

/// Successful detection response
#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    pub emotion: Category,
    pub confidence: f64,
    pub suggestion: Option<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

impl DetectionResponse {
    pub fn new(
        channel: InputChannel,
        input: String,
        result: ClassificationResult,
        suggestion: Option<Suggestion>,
    ) -> Self {
        Self {
            emotion: result.emotion,
            confidence: result.confidence,
            suggestion,
            transcript: match channel {
                InputChannel::Voice => Some(input),
                InputChannel::Text => None,
            },
        }
    }
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}
