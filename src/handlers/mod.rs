pub mod chat;
pub mod download;
pub mod health;
pub mod listing;

use crate::errors::AppError;

pub async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
