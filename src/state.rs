use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::catalog::IntentCatalog;
use crate::services::dialogue::DialogueEngine;

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<IntentCatalog>,
    pub dialogue: DialogueEngine,
}
