use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde_json::json;
use tokio::time::Instant;

use crate::AppState;
use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Honeypot: answer exactly like a real success, on the same schedule, and
    // do nothing else.
    if request.is_spam() {
        tokio::time::sleep(state.latency.decoy_delay()).await;
        return Ok(Json(ContactResponse::success()));
    }

    if let Err(reason) = request.validate() {
        tracing::debug!("Rejected contact submission: {}", reason);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": reason}))
        ));
    }

    let started = Instant::now();
    let outcome = state.forwarder.forward(request).await;
    state.latency.record(started.elapsed());

    match outcome {
        Ok(()) => Ok(Json(ContactResponse::success())),
        Err(e) => {
            tracing::error!("Failed to forward contact submission: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "Failed to deliver message"}))
            ))
        }
    }
}
