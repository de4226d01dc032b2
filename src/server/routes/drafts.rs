//! Draft save endpoint

use super::{DraftResponse, method_not_allowed};
use crate::server::state::AppState;
use crate::storage::QuoteDraft;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::error;

const SAVED: &str = "Quote request saved successfully";
const FAILED: &str = "Failed to save quote request";

/// Configure draft routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/save-quote")
            .route(web::post().to(save_quote))
            .default_service(web::to(|| async { method_not_allowed("POST") })),
    );
}

/// Save a quote request as a local draft
pub async fn save_quote(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    match store_draft(&state, &body).await {
        Ok(filename) => HttpResponse::Ok().json(DraftResponse {
            success: true,
            message: SAVED,
            filename: Some(filename),
        }),
        Err(e) => {
            error!(error = %e, "Error saving quote");
            HttpResponse::InternalServerError().json(DraftResponse {
                success: false,
                message: FAILED,
                filename: None,
            })
        }
    }
}

async fn store_draft(state: &AppState, body: &[u8]) -> Result<String> {
    let draft: QuoteDraft = serde_json::from_slice(body)?;
    state.drafts.save(&draft, chrono::Utc::now()).await
}
