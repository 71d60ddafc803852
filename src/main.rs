use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use fastsewa::config::AppConfig;
use fastsewa::models::ServiceCode;
use fastsewa::services::catalog::IntentCatalog;
use fastsewa::services::dialogue::DialogueEngine;
use fastsewa::services::document::QuoteGenerator;
use fastsewa::services::pdf::wkhtmltopdf::WkhtmltopdfRenderer;
use fastsewa::services::session_store::InMemorySessionStore;
use fastsewa::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let catalog = Arc::new(IntentCatalog::load(&config.intents_path)?);

    tracing::info!(
        renderer = %config.wkhtmltopdf_path,
        template = %config.template_path.display(),
        output_dir = %config.output_dir.display(),
        "using wkhtmltopdf quote renderer"
    );
    let documents = QuoteGenerator::new(
        config.template_path.clone(),
        config.output_dir.clone(),
        Box::new(WkhtmltopdfRenderer::new(config.wkhtmltopdf_path.clone())),
    );

    let dialogue = DialogueEngine::new(
        catalog.clone(),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(documents),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
        dialogue,
    });

    let app = fastsewa::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(services = ServiceCode::ALL.len(), "starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
