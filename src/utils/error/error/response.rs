//! HTTP response handling for errors

use super::types::QuoteError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

impl ResponseError for QuoteError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    // Every variant collapses to the same opaque body; details stay in the logs.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ServerErrorBody::default())
    }
}

/// Generic error body returned for unexpected failures
#[derive(Debug, Clone, Serialize)]
pub struct ServerErrorBody {
    pub ok: bool,
    pub error: &'static str,
}

impl Default for ServerErrorBody {
    fn default() -> Self {
        Self {
            ok: false,
            error: "server_error",
        }
    }
}
