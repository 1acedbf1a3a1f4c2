//! Key fact extraction from contract text

pub mod key_details;

pub use key_details::{extract_key_details, DEPOSIT_LABEL, RENT_LABEL};
