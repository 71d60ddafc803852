use serde::{Deserialize, Serialize};

use super::{ServiceCode, Stage};

/// A catalog rule mapping trigger phrases to canned responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub tag: String,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
    #[serde(default)]
    pub context_set: Option<String>,
}

impl Intent {
    pub fn stage(&self) -> Option<Stage> {
        self.context_set.as_deref().map(Stage::parse)
    }

    pub fn service(&self) -> Option<ServiceCode> {
        ServiceCode::from_intent_tag(&self.tag)
    }

    /// Case-insensitive substring test against an already lowercased message.
    pub fn matches(&self, message_lower: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| message_lower.contains(&p.to_lowercase()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentFile {
    pub intents: Vec<Intent>,
}
