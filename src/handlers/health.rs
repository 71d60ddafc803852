use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::models::ServiceCode;
use crate::state::AppState;

// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "status": "online",
        "services": ServiceCode::ALL.len(),
        "intents": state.catalog.len(),
        "timestamp": chrono::Local::now().to_rfc3339(),
    }))
}
