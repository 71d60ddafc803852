use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Local;
use handlebars::Handlebars;
use serde::Serialize;

use crate::models::{Customer, Enquiry};
use crate::services::pdf::PdfRenderer;

pub const SUCCESS_MARKER: &str = "✅ PDF Created Successfully";

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0:#}")]
    Renderer(anyhow::Error),
}

impl DocumentError {
    /// Human-readable status line shown to the customer.
    pub fn status_message(&self) -> String {
        match self {
            DocumentError::TemplateNotFound(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!(
                    "❌ Error: {name} not found. Please ensure template file is in the same directory."
                )
            }
            other => format!(
                "❌ PDF Generation Failed: {other}\n💡 Tip: Check wkhtmltopdf installation and path."
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneratedDocument {
    pub filename: String,
    pub path: PathBuf,
}

impl GeneratedDocument {
    pub fn status_message(&self) -> String {
        format!(
            "{SUCCESS_MARKER}: {}\n📄 Location: {}",
            self.filename,
            self.path.display()
        )
    }
}

#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    async fn generate(
        &self,
        customer: &Customer,
        enquiry: &Enquiry,
    ) -> Result<GeneratedDocument, DocumentError>;
}

/// Ids of the enquiries that did and did not produce a document.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct BatchSummary {
    pub success: Vec<u32>,
    pub failed: Vec<u32>,
}

pub async fn generate_batch(
    generator: &dyn DocumentGenerator,
    items: &[(Customer, Enquiry)],
) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for (customer, enquiry) in items {
        match generator.generate(customer, enquiry).await {
            Ok(_) => summary.success.push(enquiry.id),
            Err(e) => {
                tracing::warn!(enquiry_id = enquiry.id, error = %e, "batch quote failed");
                summary.failed.push(enquiry.id);
            }
        }
    }
    summary
}

/// Renders the quote template and hands the markup to a [`PdfRenderer`].
pub struct QuoteGenerator {
    template_path: PathBuf,
    output_dir: PathBuf,
    renderer: Box<dyn PdfRenderer>,
}

impl QuoteGenerator {
    pub fn new(template_path: PathBuf, output_dir: PathBuf, renderer: Box<dyn PdfRenderer>) -> Self {
        Self {
            template_path,
            output_dir,
            renderer,
        }
    }

    async fn load_template(&self) -> Result<String, DocumentError> {
        match tokio::fs::read_to_string(&self.template_path).await {
            Ok(source) => Ok(source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(DocumentError::TemplateNotFound(self.template_path.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

pub fn quote_filename(enquiry_id: u32, timestamp: &chrono::DateTime<Local>) -> String {
    format!(
        "FastSewa_Quote_{enquiry_id}_{}.pdf",
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

fn template_context(
    customer: &Customer,
    enquiry: &Enquiry,
    now: &chrono::DateTime<Local>,
) -> serde_json::Value {
    let form = |key: &str, fallback: &str| -> String {
        enquiry
            .form_data
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };

    serde_json::json!({
        "customer_name": customer.full_name,
        "customer_phone": customer.phone,
        "customer_address": customer.address,
        "quote_id": enquiry.quote_id(),
        "date": now.format("%d %B %Y").to_string(),
        "time": now.format("%I:%M %p").to_string(),
        "service_category": enquiry.service_type.quote_category(),
        "service_description": form("requirements", "Standard Service Request"),
        "amount": form("budget_range", "Estimate on Request"),
        "total_amount": form("budget_range", "To Be Confirmed"),
        "plot_area": form("plot_area", "N/A"),
        "property_type": form("property_type", "N/A"),
        "guard_count": form("guard_count", "N/A"),
        "symptoms": form("symptoms", "N/A"),
    })
}

#[async_trait]
impl DocumentGenerator for QuoteGenerator {
    async fn generate(
        &self,
        customer: &Customer,
        enquiry: &Enquiry,
    ) -> Result<GeneratedDocument, DocumentError> {
        let template = self.load_template().await?;

        let now = Local::now();
        let context = template_context(customer, enquiry, &now);
        let html = Handlebars::new().render_template(&template, &context)?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let filename = quote_filename(enquiry.id, &now);
        let path = self.output_dir.join(&filename);

        self.renderer
            .render(&html, &path)
            .await
            .map_err(DocumentError::Renderer)?;

        tracing::info!(
            enquiry_id = enquiry.id,
            service = enquiry.service_type.as_str(),
            file = %filename,
            "quote generated"
        );

        Ok(GeneratedDocument { filename, path })
    }
}
