use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ServiceCode;

/// Which follow-up question a user is expected to answer next.
///
/// Stages without a form handler (set by catalog intents for services that
/// have no guided flow) are carried verbatim in `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Stage {
    WaitingForPlotSize,
    WaitingForLocation,
    WaitingForPropertyType,
    WaitingForGuardCount,
    WaitingForSecurityLocation,
    WaitingForSymptoms,
    WaitingForMedicalLocation,
    Other(String),
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::WaitingForPlotSize => "waiting_for_plotsize",
            Stage::WaitingForLocation => "waiting_for_location",
            Stage::WaitingForPropertyType => "waiting_for_property_type",
            Stage::WaitingForGuardCount => "waiting_for_guard_count",
            Stage::WaitingForSecurityLocation => "waiting_for_security_location",
            Stage::WaitingForSymptoms => "waiting_for_symptoms",
            Stage::WaitingForMedicalLocation => "waiting_for_medical_location",
            Stage::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "waiting_for_plotsize" => Stage::WaitingForPlotSize,
            "waiting_for_location" => Stage::WaitingForLocation,
            "waiting_for_property_type" => Stage::WaitingForPropertyType,
            "waiting_for_guard_count" => Stage::WaitingForGuardCount,
            "waiting_for_security_location" => Stage::WaitingForSecurityLocation,
            "waiting_for_symptoms" => Stage::WaitingForSymptoms,
            "waiting_for_medical_location" => Stage::WaitingForMedicalLocation,
            other => Stage::Other(other.to_string()),
        }
    }
}

impl From<String> for Stage {
    fn from(s: String) -> Self {
        Stage::parse(&s)
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.as_str().to_string()
    }
}

/// Per-user dialogue state. A default session is an idle one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub stage: Option<Stage>,
    pub fields: HashMap<String, String>,
    pub service: Option<ServiceCode>,
}

impl Session {
    pub fn is_idle(&self) -> bool {
        self.stage.is_none() && self.fields.is_empty() && self.service.is_none()
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_parse_known_and_unknown() {
        assert_eq!(Stage::parse("waiting_for_plotsize"), Stage::WaitingForPlotSize);
        assert_eq!(
            Stage::parse("waiting_for_legal_details"),
            Stage::Other("waiting_for_legal_details".to_string())
        );
        assert_eq!(Stage::WaitingForGuardCount.as_str(), "waiting_for_guard_count");
    }

    #[test]
    fn test_stage_serializes_as_plain_string() {
        let json = serde_json::to_string(&Stage::WaitingForSymptoms).unwrap();
        assert_eq!(json, "\"waiting_for_symptoms\"");
        let back: Stage = serde_json::from_str("\"waiting_for_land_details\"").unwrap();
        assert_eq!(back.as_str(), "waiting_for_land_details");
    }

    #[test]
    fn test_default_session_is_idle() {
        let mut session = Session::default();
        assert!(session.is_idle());
        session.fields.insert("plot_size".to_string(), "1500".to_string());
        assert!(!session.is_idle());
        assert_eq!(session.field("plot_size"), "1500");
        assert_eq!(session.field("missing"), "");
    }
}
