use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;
use crate::state::AppState;

/// Only bare file names inside the output directory are served.
fn is_plain_filename(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains("..")
}

// GET /api/download-pdf/:filename
pub async fn download_pdf(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    if !is_plain_filename(&filename) {
        tracing::warn!(file = %filename, "rejected download path");
        return Err(AppError::NotFound("File not found".to_string()));
    }

    let path = state.config.output_dir.join(&filename);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound("File not found".to_string()));
        }
        Err(e) => return Err(anyhow::Error::from(e).context("failed to read quote").into()),
    };

    tracing::info!(file = %filename, size = bytes.len(), "serving quote");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_filename_rules() {
        assert!(is_plain_filename("FastSewa_Quote_1234_20260101_120000.pdf"));
        assert!(!is_plain_filename("../Cargo.toml"));
        assert!(!is_plain_filename("sub/dir.pdf"));
        assert!(!is_plain_filename("..\\secret"));
        assert!(!is_plain_filename(""));
    }
}
