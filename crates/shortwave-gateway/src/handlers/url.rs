use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;

use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;

/// `POST /` — plain-text body holding the URL to shorten.
///
/// Empty and whitespace-only bodies are rejected here; the service
/// assumes validated, non-empty input.
pub async fn shorten_text_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Response> {
    let original = body.trim();
    if original.is_empty() {
        return Err(AppError::EmptyUrl);
    }

    let record = state.shortener().shorten_url(original).await?;
    Ok((StatusCode::CREATED, record.short).into_response())
}

/// `POST /api/shorten` — JSON `{"url": ...}` in, JSON `{"result": ...}` out.
pub async fn shorten_json_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    let original = request.url.trim();
    if original.is_empty() {
        return Err(AppError::EmptyUrl);
    }

    let record = state.shortener().shorten_url(original).await?;
    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            result: record.short,
        }),
    ))
}

/// `GET /{id}` — 307 redirect to the original URL.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    match state.shortener().get_original_url(&id).await? {
        Some(original) => Ok(Redirect::temporary(&original).into_response()),
        None => Err(AppError::NotFound),
    }
}
