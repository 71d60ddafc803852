use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ServiceCode;
use crate::state::AppState;

fn default_user() -> String {
    "default".to_string()
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_user")]
    pub user_id: String,
    /// Sent by the web widget when a service tile was clicked; informational only.
    #[serde(default)]
    pub service: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub context: Option<String>,
    pub service: Option<ServiceCode>,
    pub needs_input: bool,
    pub pdf_generated: bool,
    pub pdf_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

fn system_error(message: String, user_id: Option<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ChatResponse {
            success: false,
            response: format!("System error: {message}"),
            context: None,
            service: None,
            needs_input: false,
            pdf_generated: false,
            pdf_file: None,
            user_id,
        }),
    )
        .into_response()
}

// POST /api/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected chat body");
            return system_error(rejection.body_text(), None);
        }
    };

    tracing::info!(
        user_id = %payload.user_id,
        service_hint = payload.service.as_deref(),
        "incoming chat message"
    );

    match state.dialogue.respond(&payload.message, &payload.user_id).await {
        Ok(reply) => {
            let needs_input = reply.needs_input();
            let pdf_file = reply.document.as_ref().map(|d| d.filename.clone());
            Json(ChatResponse {
                success: true,
                response: reply.text,
                context: reply.stage.map(String::from),
                service: reply.service,
                needs_input,
                pdf_generated: pdf_file.is_some(),
                pdf_file,
                user_id: Some(payload.user_id),
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, user_id = %payload.user_id, "chat turn failed");
            system_error(e.to_string(), Some(payload.user_id))
        }
    }
}

#[derive(Deserialize)]
pub struct ResetRequest {
    pub user_id: Option<String>,
}

// POST /api/reset-session
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ResetRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let Some(user_id) = payload.user_id.filter(|id| !id.trim().is_empty()) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"success": false, "message": "User ID required"})),
        )
            .into_response());
    };

    state.dialogue.reset(&user_id).await?;

    Ok(Json(serde_json::json!({"success": true, "message": "Session reset"})).into_response())
}
