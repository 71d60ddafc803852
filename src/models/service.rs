use serde::{Deserialize, Serialize};

/// One of the six business service categories offered on the marketplace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServiceCode {
    #[serde(rename = "FS_BUILD")]
    Build,
    #[serde(rename = "FS_SECURE")]
    Secure,
    #[serde(rename = "FS_LEGAL")]
    Legal,
    #[serde(rename = "FS_MEDICAL")]
    Medical,
    #[serde(rename = "FS_LAND")]
    Land,
    #[serde(rename = "FS_REPAIR")]
    Repair,
}

impl ServiceCode {
    /// Listing order used by the services endpoint.
    pub const ALL: [ServiceCode; 6] = [
        ServiceCode::Build,
        ServiceCode::Secure,
        ServiceCode::Legal,
        ServiceCode::Medical,
        ServiceCode::Land,
        ServiceCode::Repair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCode::Build => "FS_BUILD",
            ServiceCode::Secure => "FS_SECURE",
            ServiceCode::Legal => "FS_LEGAL",
            ServiceCode::Medical => "FS_MEDICAL",
            ServiceCode::Land => "FS_LAND",
            ServiceCode::Repair => "FS_REPAIR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FS_BUILD" => Some(ServiceCode::Build),
            "FS_SECURE" => Some(ServiceCode::Secure),
            "FS_LEGAL" => Some(ServiceCode::Legal),
            "FS_MEDICAL" => Some(ServiceCode::Medical),
            "FS_LAND" => Some(ServiceCode::Land),
            "FS_REPAIR" => Some(ServiceCode::Repair),
            _ => None,
        }
    }

    /// Resolves the service an intent activates from its tag. Rules are
    /// checked in order and the first substring hit wins.
    pub fn from_intent_tag(tag: &str) -> Option<Self> {
        const RULES: [(&str, ServiceCode); 6] = [
            ("construction", ServiceCode::Build),
            ("security", ServiceCode::Secure),
            ("medical", ServiceCode::Medical),
            ("legal", ServiceCode::Legal),
            ("land", ServiceCode::Land),
            ("repair", ServiceCode::Repair),
        ];

        RULES
            .iter()
            .find(|(needle, _)| tag.contains(needle))
            .map(|(_, code)| *code)
    }

    /// Short name shown in the chat service listing.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCode::Build => "Construction (BuildNet)",
            ServiceCode::Secure => "Security Guards (SecureForce)",
            ServiceCode::Legal => "Legal & GST (Filings)",
            ServiceCode::Medical => "Medical Services",
            ServiceCode::Land => "Land Verification",
            ServiceCode::Repair => "Repair & Maintenance",
        }
    }

    /// Category name printed on generated quotes.
    pub fn quote_category(&self) -> &'static str {
        match self {
            ServiceCode::Build => "Construction (FastSewa BuildNet)",
            ServiceCode::Secure => "Security Services (SecureForce)",
            ServiceCode::Legal => "Legal & GST Services (Filings)",
            ServiceCode::Medical => "Medical Services",
            ServiceCode::Land => "Land Verification",
            ServiceCode::Repair => "Repair & Maintenance",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ServiceCode::Build => "🏗️",
            ServiceCode::Secure => "🛡️",
            ServiceCode::Legal => "⚖️",
            ServiceCode::Medical => "🏥",
            ServiceCode::Land => "📋",
            ServiceCode::Repair => "🔧",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_rules_first_match_wins() {
        assert_eq!(ServiceCode::from_intent_tag("construction_quote"), Some(ServiceCode::Build));
        assert_eq!(ServiceCode::from_intent_tag("security_service"), Some(ServiceCode::Secure));
        assert_eq!(ServiceCode::from_intent_tag("legal_gst"), Some(ServiceCode::Legal));
        assert_eq!(ServiceCode::from_intent_tag("land_verification"), Some(ServiceCode::Land));
        assert_eq!(ServiceCode::from_intent_tag("home_repair"), Some(ServiceCode::Repair));
        // "security" is checked before "land"
        assert_eq!(ServiceCode::from_intent_tag("land_security"), Some(ServiceCode::Secure));
        assert_eq!(ServiceCode::from_intent_tag("greeting"), None);
    }

    #[test]
    fn test_parse_round_trips_known_codes() {
        for code in ServiceCode::ALL {
            assert_eq!(ServiceCode::parse(code.as_str()), Some(code));
        }
        assert_eq!(ServiceCode::parse("FS_UNKNOWN"), None);
        assert_eq!(ServiceCode::Build.quote_category(), "Construction (FastSewa BuildNet)");
        assert_eq!(ServiceCode::Repair.icon(), "🔧");
    }
}
