use std::path::Path;

use anyhow::Context;
use rand::seq::SliceRandom;

use crate::models::{Intent, IntentFile};

/// Read-only intent catalog, loaded once at startup.
#[derive(Debug, Clone)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
}

impl IntentCatalog {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read intent catalog: {}", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("invalid intent catalog: {}", path.display()))?;

        tracing::info!(intents = catalog.len(), path = %path.display(), "loaded intent catalog");
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let file: IntentFile = serde_json::from_str(raw).context("failed to parse intents JSON")?;

        for intent in &file.intents {
            anyhow::ensure!(
                !intent.responses.is_empty(),
                "intent '{}' has no responses",
                intent.tag
            );
        }

        Ok(Self {
            intents: file.intents,
        })
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// First intent (in catalog order) with a pattern occurring in `message`.
    pub fn find_match(&self, message: &str) -> Option<&Intent> {
        let lower = message.to_lowercase();
        self.intents.iter().find(|intent| intent.matches(&lower))
    }

    /// Uniform random pick from the intent's responses.
    pub fn pick_response(intent: &Intent) -> &str {
        intent
            .responses
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or_default()
    }
}
