//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod drafts;
pub mod quote;

use crate::core::quote::FieldErrors;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use serde::Serialize;

/// Register every form endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    quote::configure_routes(cfg);
    drafts::configure_routes(cfg);
}

/// Response body of the quote endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QuoteResponse {
    fn base(ok: bool, error: Option<&'static str>) -> Self {
        Self {
            ok,
            error,
            field_errors: None,
            retry_after_seconds: None,
            message: None,
        }
    }

    pub fn success() -> Self {
        Self::base(true, None)
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            field_errors: Some(errors),
            ..Self::base(false, Some("validation"))
        }
    }

    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self {
            retry_after_seconds: Some(retry_after_secs),
            ..Self::base(false, Some("rate_limited"))
        }
    }

    pub fn email_send_failed() -> Self {
        Self {
            message: Some(
                "Failed to send internal notification. Please try again or contact support."
                    .to_string(),
            ),
            ..Self::base(false, Some("email_send_failed"))
        }
    }
}

/// Response body of the draft endpoint
#[derive(Debug, Clone, Serialize)]
pub struct DraftResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// `405` for any method a resource does not accept
pub fn method_not_allowed(allow: &'static str) -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, allow))
        .json(serde_json::json!({ "error": "Method not allowed" }))
}
