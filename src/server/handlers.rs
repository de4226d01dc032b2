//! Service health endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    /// Notifications are redirected to the development address
    pub dev_mode: bool,
    /// Clients currently held by the rate limiter
    pub tracked_clients: usize,
}

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: crate::VERSION,
        dev_mode: state.config().routing.is_dev_mode(),
        tracked_clients: state.pipeline.rate_limiter().tracked_clients().await,
    })
}
