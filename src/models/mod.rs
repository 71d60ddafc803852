pub mod enquiry;
pub mod intent;
pub mod service;
pub mod session;

pub use enquiry::{Customer, Enquiry};
pub use intent::{Intent, IntentFile};
pub use service::ServiceCode;
pub use session::{Session, Stage};
