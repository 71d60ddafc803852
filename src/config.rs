use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub intents_path: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub wkhtmltopdf_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            intents_path: env::var("INTENTS_PATH")
                .unwrap_or_else(|_| "data/intents.json".to_string())
                .into(),
            template_path: env::var("TEMPLATE_PATH")
                .unwrap_or_else(|_| "templates/invoice_template.html".to_string())
                .into(),
            output_dir: env::var("PDF_OUTPUT_DIR")
                .unwrap_or_else(|_| "generated_pdfs".to_string())
                .into(),
            wkhtmltopdf_path: env::var("WKHTMLTOPDF_PATH")
                .unwrap_or_else(|_| "wkhtmltopdf".to_string()),
        }
    }
}
