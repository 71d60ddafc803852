use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::models::{Customer, Enquiry, ServiceCode, Session, Stage};
use crate::services::catalog::IntentCatalog;
use crate::services::document::{DocumentGenerator, GeneratedDocument};
use crate::services::session_store::SessionStore;
use crate::services::validation;

pub const FALLBACK_REPLY: &str = "🤔 I didn't quite understand that.\n\n\
I can help with:\n\
• Construction quotes\n\
• Security guards\n\
• Medical services\n\
• Legal & GST\n\
• Land verification\n\
• Repair & maintenance\n\n\
Which service do you need?";

/// Outcome of one chat turn, with the session state left behind by it.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    pub stage: Option<Stage>,
    pub service: Option<ServiceCode>,
    pub document: Option<GeneratedDocument>,
}

impl Reply {
    pub fn needs_input(&self) -> bool {
        self.stage.is_some()
    }
}

/// What a form handler decided for the current turn.
enum Step {
    Prompt(String),
    Complete {
        customer: Customer,
        enquiry: Enquiry,
    },
}

pub struct DialogueEngine {
    catalog: Arc<IntentCatalog>,
    sessions: Arc<dyn SessionStore>,
    documents: Arc<dyn DocumentGenerator>,
    user_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl DialogueEngine {
    pub fn new(
        catalog: Arc<IntentCatalog>,
        sessions: Arc<dyn SessionStore>,
        documents: Arc<dyn DocumentGenerator>,
    ) -> Self {
        Self {
            catalog,
            sessions,
            documents,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    fn user_lock(&self, user_id: &str) -> anyhow::Result<Arc<tokio::sync::Mutex<()>>> {
        let mut locks = self
            .user_locks
            .lock()
            .map_err(|_| anyhow::anyhow!("user lock table poisoned"))?;
        Ok(locks.entry(user_id.to_string()).or_default().clone())
    }

    /// Handles one message. Turns for the same user run one at a time.
    pub async fn respond(&self, message: &str, user_id: &str) -> anyhow::Result<Reply> {
        let lock = self.user_lock(user_id)?;
        let reply = {
            let _turn = lock.lock().await;
            self.turn(message, user_id).await?
        };
        if reply.stage.is_none() && reply.service.is_none() {
            self.release_lock(user_id, lock)?;
        }
        Ok(reply)
    }

    async fn turn(&self, message: &str, user_id: &str) -> anyhow::Result<Reply> {
        let mut session = self.sessions.load(user_id).await?;
        let before = session.clone();

        tracing::info!(
            user_id,
            stage = session.stage.as_ref().map(Stage::as_str),
            service = session.service.map(|s| s.as_str()),
            "processing message"
        );

        let mut document = None;
        let text = match form_step(&mut session, message) {
            Some(Step::Prompt(text)) => text,
            Some(Step::Complete { customer, enquiry }) => {
                let service = enquiry.service_type;
                session = Session::default();
                match self.documents.generate(&customer, &enquiry).await {
                    Ok(doc) => {
                        let text = completion_reply(service, &doc.status_message());
                        document = Some(doc);
                        text
                    }
                    Err(e) => {
                        tracing::error!(user_id, enquiry_id = enquiry.id, error = %e, "quote generation failed");
                        failure_reply(service, &e.status_message())
                    }
                }
            }
            None => self.match_intent(&mut session, message),
        };

        if session != before {
            if session.is_idle() {
                self.sessions.reset(user_id).await?;
            } else {
                self.sessions.save(user_id, session.clone()).await?;
            }
        }

        Ok(Reply {
            text,
            stage: session.stage,
            service: session.service,
            document,
        })
    }

    /// Drops the user's lock entry when no other turn holds or awaits it.
    fn release_lock(&self, user_id: &str, lock: Arc<tokio::sync::Mutex<()>>) -> anyhow::Result<()> {
        let mut locks = self
            .user_locks
            .lock()
            .map_err(|_| anyhow::anyhow!("user lock table poisoned"))?;
        // One reference in the table, one held here.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(user_id);
        }
        Ok(())
    }

    pub fn tracked_users(&self) -> usize {
        self.user_locks.lock().map(|locks| locks.len()).unwrap_or_default()
    }

    pub async fn reset(&self, user_id: &str) -> anyhow::Result<()> {
        let lock = self.user_lock(user_id)?;
        {
            let _turn = lock.lock().await;
            self.sessions.reset(user_id).await?;
        }
        self.release_lock(user_id, lock)?;
        tracing::info!(user_id, "session reset");
        Ok(())
    }

    fn match_intent(&self, session: &mut Session, message: &str) -> String {
        let Some(intent) = self.catalog.find_match(message) else {
            return FALLBACK_REPLY.to_string();
        };

        if let Some(stage) = intent.stage() {
            session.stage = Some(stage);
            if let Some(service) = intent.service() {
                session.service = Some(service);
            }
        }

        tracing::debug!(tag = %intent.tag, "intent matched");
        IntentCatalog::pick_response(intent).to_string()
    }
}

/// Advances the guided form for construction, security and medical flows.
/// Returns `None` when no form handler owns the current stage.
fn form_step(session: &mut Session, message: &str) -> Option<Step> {
    let (service, stage) = match (session.service, session.stage.clone()) {
        (Some(service), Some(stage)) => (service, stage),
        _ => return None,
    };

    let step = match (service, stage) {
        (ServiceCode::Build, Stage::WaitingForPlotSize) => match validation::number(message) {
            Err(e) => Step::Prompt(format!("❌ {e} Please try again (e.g., 1500 sqft).")),
            Ok(size) => {
                let reply = format!(
                    "✅ Got it! Plot size: {size} sqft. Now, which city/area is this project in?"
                );
                session.fields.insert("plot_size".to_string(), size);
                session.stage = Some(Stage::WaitingForLocation);
                Step::Prompt(reply)
            }
        },
        (ServiceCode::Build, Stage::WaitingForLocation) => match validation::location(message) {
            Err(e) => Step::Prompt(format!("❌ {e}")),
            Ok(location) => {
                let plot_size = session.field("plot_size").to_string();
                let form = form_data([
                    (
                        "requirements",
                        format!("Construction Project - {plot_size} sqft in {location}"),
                    ),
                    ("budget_range", "As per estimate".to_string()),
                    ("plot_area", plot_size),
                ]);
                Step::Complete {
                    customer: customer_for(session, location),
                    enquiry: Enquiry::new(ServiceCode::Build, form),
                }
            }
        },
        (ServiceCode::Secure, Stage::WaitingForPropertyType) => match validation::text(message) {
            Err(e) => Step::Prompt(format!("❌ {e}")),
            Ok(kind) => {
                let kind = validation::title_case(&kind);
                let reply = format!(
                    "✅ {kind} security noted. How many guards do you need? (e.g., 1, 2, 3)"
                );
                session.fields.insert("property_type".to_string(), kind);
                session.stage = Some(Stage::WaitingForGuardCount);
                Step::Prompt(reply)
            }
        },
        (ServiceCode::Secure, Stage::WaitingForGuardCount) => match validation::number(message) {
            Err(e) => Step::Prompt(format!("❌ {e}")),
            Ok(count) => {
                let reply = format!("✅ {count} guard(s) required. Which city/area?");
                session.fields.insert("guard_count".to_string(), count);
                session.stage = Some(Stage::WaitingForSecurityLocation);
                Step::Prompt(reply)
            }
        },
        (ServiceCode::Secure, Stage::WaitingForSecurityLocation) => {
            match validation::location(message) {
                Err(e) => Step::Prompt(format!("❌ {e}")),
                Ok(location) => {
                    let guards = session.field("guard_count").to_string();
                    let kind = session.field("property_type").to_string();
                    let form = form_data([
                        (
                            "requirements",
                            format!("{guards} guards for {kind} in {location}"),
                        ),
                        ("budget_range", "As per contract".to_string()),
                        ("property_type", kind),
                        ("guard_count", guards),
                    ]);
                    Step::Complete {
                        customer: customer_for(session, location),
                        enquiry: Enquiry::new(ServiceCode::Secure, form),
                    }
                }
            }
        }
        // Symptoms are free text; even a blank answer moves the form on.
        (ServiceCode::Medical, Stage::WaitingForSymptoms) => {
            let symptoms = message.to_string();
            let reply = format!("✅ Noted: {symptoms}. Which location do you need the service?");
            session.fields.insert("symptoms".to_string(), symptoms);
            session.stage = Some(Stage::WaitingForMedicalLocation);
            Step::Prompt(reply)
        }
        (ServiceCode::Medical, Stage::WaitingForMedicalLocation) => {
            match validation::location(message) {
                Err(e) => Step::Prompt(format!("❌ {e}")),
                Ok(location) => {
                    let symptoms = session.field("symptoms").to_string();
                    let form = form_data([
                        ("requirements", format!("Medical assistance for: {symptoms}")),
                        ("budget_range", "Consultation fee applies".to_string()),
                        ("symptoms", symptoms),
                    ]);
                    Step::Complete {
                        customer: customer_for(session, location),
                        enquiry: Enquiry::new(ServiceCode::Medical, form),
                    }
                }
            }
        }
        // Legal, land and repair have no guided form yet.
        _ => return None,
    };

    Some(step)
}

fn form_data<const N: usize>(entries: [(&str, String); N]) -> HashMap<String, String> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn customer_for(session: &Session, address: String) -> Customer {
    let or = |key: &str, fallback: &str| {
        session
            .fields
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };
    Customer {
        full_name: or("name", "Guest User"),
        phone: or("phone", "N/A"),
        address,
    }
}

fn completion_reply(service: ServiceCode, status: &str) -> String {
    match service {
        ServiceCode::Secure => {
            format!("🎉 Security quote generated!\n\n{status}\n\nOur team will reach out soon.")
        }
        ServiceCode::Medical => format!(
            "🎉 Medical service request created!\n\n{status}\n\nDoctor will contact you shortly."
        ),
        _ => format!(
            "🎉 Perfect! Your Construction quote is ready.\n\n{status}\n\n\
             Our team will contact you within 24 hours. Need anything else?"
        ),
    }
}

fn failure_reply(service: ServiceCode, status: &str) -> String {
    let advice = match service {
        ServiceCode::Medical => "Please contact emergency services if urgent.",
        ServiceCode::Secure => "Please try again.",
        _ => "Please try again or contact support.",
    };
    format!("⚠️ {status}\n\n{advice}")
}
