use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderMap,
};

use crate::{
    error::{AppError, AppResult},
    line::{events::WebhookPayload, signature},
    response::ApiResponse,
    services::event_service,
    state::AppState,
};

/// LINE webhook endpoint. The signature is checked against the raw body
/// before anything is parsed. Events in the batch are handled in isolation:
/// a failing event is logged and does not affect its siblings or the
/// response status, so the platform does not redeliver the whole batch over
/// one bad event.
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let signature = headers
        .get("x-line-signature")
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::InvalidSignature)?;
    signature::verify(&state.config.channel_secret, signature, &body)?;

    let payload: WebhookPayload = serde_json::from_slice(&body)
        .map_err(|err| AppError::BadRequest(format!("undecodable webhook body: {err}")))?;

    for event in payload.events {
        if let Err(err) = event_service::handle_event(&state, event).await {
            tracing::error!(error = %err, "event handling failed");
        }
    }

    Ok(Json(ApiResponse::success("OK", serde_json::json!({}))))
}
