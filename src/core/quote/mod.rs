//! Quote submission model, validation and bot filtering
//!
//! Everything in this module is free of side effects: it turns a raw JSON
//! payload into either a normalized [`QuoteSubmission`] or a structured
//! [`FieldErrors`] map.

mod honeypot;
mod types;
mod validation;

pub use honeypot::{BotFilter, HONEYPOT_ALIAS};
pub use types::{FieldErrors, QuoteSubmission, ServiceSelection};
pub use validation::validate_submission;
