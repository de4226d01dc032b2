//! Draft types and rendering

use crate::core::notify::format_timestamp;
use crate::core::quote::ServiceSelection;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Draft request body; fields are stored as received
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub services: ServiceSelection,
    #[serde(default)]
    pub details: String,
}

/// Somewhere drafts can be written
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Persist a draft, returning the file name it was stored under
    async fn save(&self, draft: &QuoteDraft, at: DateTime<Utc>) -> Result<String>;
}

/// Subject line for a service combination
pub fn draft_subject(services: ServiceSelection) -> &'static str {
    match (services.landscaping, services.outdoor_construction) {
        (true, true) => "Landscaping & Outdoor Construction",
        (true, false) => "Landscaping Services",
        (false, true) => "Outdoor Construction",
        (false, false) => "General Inquiry",
    }
}

/// `quote-request-<timestamp>.txt` with `:` and `.` replaced so it is a safe file name
pub fn draft_filename(at: DateTime<Utc>) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("quote-request-{}.txt", stamp)
}

/// Plain-text draft document
pub fn render_draft(draft: &QuoteDraft, business_name: &str, at: DateTime<Utc>) -> String {
    let services: String = draft
        .services
        .labels()
        .iter()
        .map(|label| format!("✓ {}\n", label))
        .collect();

    format!(
        "Subject: {subject} Request\n\
         \n\
         Dear {business} Team,\n\
         \n\
         A new quote request has been submitted through the website.\n\
         \n\
         CLIENT INFORMATION:\n\
         {rule}\n\
         Name:         {name}\n\
         Email:        {email}\n\
         Phone:        {phone}\n\
         \n\
         SERVICE REQUESTED:\n\
         {rule}\n\
         {services}\n\
         PROJECT LOCATION:\n\
         {rule}\n\
         {address}\n\
         \n\
         PROJECT DETAILS:\n\
         {rule}\n\
         {details}\n\
         \n\
         {rule}\n\
         \n\
         This request was submitted on: {submitted}\n\
         \n\
         Best regards,\n\
         {business} Website System\n",
        subject = draft_subject(draft.services),
        business = business_name,
        rule = RULE,
        name = draft.name,
        email = draft.email,
        phone = draft.phone,
        services = services,
        address = draft.address,
        details = draft.details,
        submitted = format_timestamp(at),
    )
}
