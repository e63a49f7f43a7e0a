use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use thaisent_core::Prediction;

use super::AppState;
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct UsageHint {
    message: &'static str,
    example: UsageExample,
}

#[derive(Debug, Serialize)]
struct UsageExample {
    text: &'static str,
}

/// `POST /predict` — classify one text.
///
/// Body validation (missing or malformed JSON, absent `text` field) is
/// rejected by the `Json` extractor before this handler runs.
pub async fn predict(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(req): Json<PredictRequest>,
) -> Json<Prediction> {
    let prediction = state.model.classify(&req.text);
    tracing::debug!(
        request_id = %req_id.0,
        sentiment = %prediction.sentiment,
        confidence = prediction.confidence,
        chars = req.text.chars().count(),
        "classified text"
    );
    Json(prediction)
}

/// `GET /predict` — usage hint for callers probing the endpoint.
pub async fn usage() -> Json<UsageHint> {
    Json(UsageHint {
        message: "POST a JSON body {\"text\": \"...\"} to this endpoint",
        example: UsageExample { text: "ดีมากเลย" },
    })
}
