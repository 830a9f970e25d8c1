//! Request handlers for the classification endpoints.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::SharedState;
use crate::input::parse_texts;
use crate::types::ClassificationRecord;

/// Serve the embedded single-page UI.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

#[derive(Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    text: String,
}

/// Classify a single text.
pub async fn classify(
    State(state): State<SharedState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassificationRecord>, ApiError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("no text provided".to_string()));
    }
    Ok(Json(state.classifier.classify(text).await))
}

#[derive(Deserialize)]
pub struct ClassifyBatchRequest {
    #[serde(default)]
    texts: Vec<String>,
}

#[derive(Serialize)]
pub struct BatchResponse {
    results: Vec<ClassificationRecord>,
    count: usize,
}

/// Classify multiple texts.
pub async fn classify_batch(
    State(state): State<SharedState>,
    Json(request): Json<ClassifyBatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    if request.texts.is_empty() {
        return Err(ApiError::BadRequest("no texts provided".to_string()));
    }
    let max = state.limits.max_batch_size;
    if request.texts.len() > max {
        return Err(ApiError::BadRequest(format!(
            "maximum {max} texts per batch"
        )));
    }
    let results = state.classifier.classify_batch(&request.texts).await;
    let count = results.len();
    Ok(Json(BatchResponse { results, count }))
}

/// Classify texts from an uploaded file.
///
/// Expects a multipart form with a `file` field containing UTF-8 text,
/// either a JSON array or one text per line.
pub async fn classify_file(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<BatchResponse>, ApiError> {
    let mut content = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            content = Some(
                field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {e}")))?,
            );
            break;
        }
    }

    let content = content.ok_or_else(|| ApiError::BadRequest("no file provided".to_string()))?;
    let texts = parse_texts(&content);
    if texts.is_empty() {
        return Err(ApiError::BadRequest(
            "no valid texts found in file".to_string(),
        ));
    }
    let max = state.limits.max_batch_size;
    if texts.len() > max {
        return Err(ApiError::BadRequest(format!("maximum {max} texts per file")));
    }

    let results = state.classifier.classify_batch(&texts).await;
    let count = results.len();
    Ok(Json(BatchResponse { results, count }))
}

#[derive(Serialize)]
pub struct StatusResponse {
    status: &'static str,
    labels: Vec<String>,
    model: String,
}

/// Report classifier status: configured labels and model.
pub async fn status(State(state): State<SharedState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ready",
        labels: state.classifier.labels().as_slice().to_vec(),
        model: state.classifier.model().to_string(),
    })
}

#[derive(Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

/// Echo results back as a downloadable JSON attachment.
pub async fn download_results(
    Json(request): Json<DownloadRequest>,
) -> Result<Response, ApiError> {
    if request.results.is_empty() {
        return Err(ApiError::BadRequest("no results to download".to_string()));
    }
    let body = serde_json::to_string_pretty(&request.results)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"classification_results.json\"",
            ),
        ],
        body,
    )
        .into_response())
}
