pub mod wkhtmltopdf;

use std::path::Path;

use async_trait::async_trait;

/// Converts rendered quote markup into a paged PDF on disk.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str, output_path: &Path) -> anyhow::Result<()>;
}
