use axum::Json;
use serde::Serialize;

use crate::models::ServiceCode;

#[derive(Serialize)]
pub struct ServiceEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Serialize)]
pub struct ServicesResponse {
    pub success: bool,
    pub services: Vec<ServiceEntry>,
    pub total: usize,
}

// GET /api/services
pub async fn list_services() -> Json<ServicesResponse> {
    let services: Vec<ServiceEntry> = ServiceCode::ALL
        .iter()
        .map(|code| ServiceEntry {
            id: code.as_str(),
            name: code.display_name(),
            icon: code.icon(),
        })
        .collect();

    Json(ServicesResponse {
        success: true,
        total: services.len(),
        services,
    })
}
