pub mod catalog;
pub mod dialogue;
pub mod document;
pub mod pdf;
pub mod session_store;
pub mod validation;
