use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ServiceCode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub full_name: String,
    pub phone: String,
    pub address: String,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            full_name: "Valued Customer".to_string(),
            phone: "Not Provided".to_string(),
            address: "Not Provided".to_string(),
        }
    }
}

/// A completed service request, built only to feed document generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: u32,
    pub service_type: ServiceCode,
    pub form_data: HashMap<String, String>,
}

impl Enquiry {
    /// Draws a random four-digit id. Collisions are not checked.
    pub fn new(service_type: ServiceCode, form_data: HashMap<String, String>) -> Self {
        use rand::Rng;

        Self {
            id: rand::thread_rng().gen_range(1000..=9999),
            service_type,
            form_data,
        }
    }

    pub fn quote_id(&self) -> String {
        format!("FS-{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enquiry_id_range() {
        for _ in 0..200 {
            let enquiry = Enquiry::new(ServiceCode::Build, HashMap::new());
            assert!((1000..=9999).contains(&enquiry.id));
            assert_eq!(enquiry.quote_id(), format!("FS-{}", enquiry.id));
        }
    }
}
