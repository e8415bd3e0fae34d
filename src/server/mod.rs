use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::clients::{HfCorrectionClient, HfTranscriptionClient};
use crate::core::pipeline::ScoringPipeline;
use crate::utils::error::ScoreError;
use crate::utils::validation::has_supported_audio_extension;

/// Uploads above this size are rejected before buffering.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub type AppPipeline = ScoringPipeline<HfTranscriptionClient, HfCorrectionClient>;

#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<AppPipeline>,
}

impl AppState {
    pub fn new(pipeline: AppPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/score", post(score))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Serialize)]
struct ScoreResponse {
    filename: String,
    asr_text: String,
    corrected_text: String,
    wer: f64,
    grammar_score_0_100: f64,
}

async fn score(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, audio) = upload.ok_or_else(|| ApiError::bad_request("Missing file field"))?;

    if !has_supported_audio_extension(&filename) {
        return Err(ApiError::bad_request("Upload an audio file"));
    }
    if audio.is_empty() {
        return Err(ApiError::bad_request("Empty file uploaded"));
    }

    let report = state.pipeline.run(&audio).await?;

    Ok(Json(ScoreResponse {
        // Echoed through untouched.
        filename,
        asr_text: report.reference_text,
        corrected_text: report.hypothesis_text,
        wer: round4(report.error_rate),
        grammar_score_0_100: report.score,
    }))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Transport-level error shape: `{"detail": "..."}` with a matching status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }
}

impl From<ScoreError> for ApiError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::InvalidInput { message } => Self::bad_request(message),
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: format!("Processing failed: {other}"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("Request failed: {}", self.detail);
        }
        (
            self.status,
            Json(serde_json::json!({ "detail": self.detail })),
        )
            .into_response()
    }
}
