//! Quote request endpoint

use super::{QuoteResponse, method_not_allowed};
use crate::core::QuoteOutcome;
use crate::server::middleware::client_ip;
use crate::server::state::AppState;
use crate::utils::error::{QuoteError, Result};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;
use tracing::error;

/// Configure quote routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/quote")
            .route(web::post().to(submit_quote))
            .default_service(web::to(|| async { method_not_allowed("POST") })),
    );
}

/// Accept a quote request
///
/// The body is read raw so that malformed JSON surfaces as `server_error`
/// instead of the extractor's default 400.
pub async fn submit_quote(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let client_ip = client_ip(req.headers());

    let payload: Value = serde_json::from_slice(&body).inspect_err(|e| {
        error!(client_ip = %client_ip, error = %e, "Quote request body is not valid JSON")
    })?;

    outcome_response(state.pipeline.submit(&payload, &client_ip).await)
}

/// Map a pipeline outcome to its HTTP response.
///
/// Unexpected failures become a [`QuoteError`] and render as the opaque
/// `server_error` body.
pub fn outcome_response(outcome: QuoteOutcome) -> Result<HttpResponse> {
    let response = match outcome {
        QuoteOutcome::Accepted { .. } | QuoteOutcome::BotAbsorbed => {
            HttpResponse::Ok().json(QuoteResponse::success())
        }
        QuoteOutcome::Invalid(errors) => {
            HttpResponse::BadRequest().json(QuoteResponse::validation(errors))
        }
        QuoteOutcome::RateLimited { retry_after_secs } => HttpResponse::TooManyRequests()
            .insert_header((header::RETRY_AFTER, retry_after_secs.to_string()))
            .json(QuoteResponse::rate_limited(retry_after_secs)),
        QuoteOutcome::DispatchFailed(_) => {
            HttpResponse::InternalServerError().json(QuoteResponse::email_send_failed())
        }
        QuoteOutcome::ServerError => {
            return Err(QuoteError::internal("quote notification could not be dispatched"));
        }
    };
    Ok(response)
}
