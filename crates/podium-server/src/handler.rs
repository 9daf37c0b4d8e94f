use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};
use chrono::Utc;

use podium_protocol::{
    decode_submission, ErrorResponse, HealthResponse, ProtocolError, ScoresQuery, SubmitResponse,
};
use podium_types::ScoreRecord;

use crate::error::{ServerError, ServerResult};
use crate::render;
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Decode a masked submission, store it, and report its rank.
pub async fn submit_handler(
    State(state): State<AppState>,
    body: Result<Json<podium_protocol::SubmitEnvelope>, JsonRejection>,
) -> ServerResult<Json<SubmitResponse>> {
    let Json(envelope) = body.map_err(|_| ProtocolError::NoData)?;
    let record = decode_submission(&state.codec, &envelope, Utc::now())?;

    let store = state.store.clone();
    let rank = tokio::task::spawn_blocking(move || store.append_and_retain(record))
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))??;

    tracing::info!(rank, "score submitted");
    Ok(Json(SubmitResponse::ranked(rank)))
}

/// Best records across categories, or within one when `name` is given.
pub async fn scores_handler(
    State(state): State<AppState>,
    Query(query): Query<ScoresQuery>,
) -> Json<Vec<ScoreRecord>> {
    let limit = query.effective_limit(state.default_limit, state.max_limit);
    let store = state.store.clone();
    let records = tokio::task::spawn_blocking(move || match query.name.as_deref() {
        Some(name) => store.top_in_category(name, limit),
        None => store.top(limit),
    })
    .await
    .unwrap_or_else(|e| {
        tracing::error!(error = %e, "scores query task failed");
        Vec::new()
    });
    Json(records)
}

/// HTML leaderboard with one table per category.
pub async fn leaderboard_handler(State(state): State<AppState>) -> Html<String> {
    let store = state.store.clone();
    let rows = state.leaderboard_rows;
    let standings = tokio::task::spawn_blocking(move || store.standings(rows))
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "leaderboard task failed");
            Vec::new()
        });
    Html(render::leaderboard_page(&standings))
}

/// JSON 404 for unknown routes.
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not found")))
}
