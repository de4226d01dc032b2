//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::QuotePipeline;
use crate::core::notify::{EmailSender, ResendClient};
use crate::storage::{DraftStore, LocalDraftStore};
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so every worker shares the same rate
/// limiter and collaborators.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Quote submission pipeline
    pub pipeline: Arc<QuotePipeline>,
    /// Draft storage collaborator
    pub drafts: Arc<dyn DraftStore>,
}

impl AppState {
    /// Create a new AppState from explicit collaborators
    pub fn new(config: Config, pipeline: QuotePipeline, drafts: Arc<dyn DraftStore>) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            drafts,
        }
    }

    /// Wire the production collaborators: Resend for email, local files for drafts
    pub fn from_config(config: Config) -> Result<Self> {
        let sender: Arc<dyn EmailSender> = Arc::new(ResendClient::new(&config.email)?);
        Ok(Self::with_sender(config, sender))
    }

    /// Production wiring with a caller-supplied email sender
    pub fn with_sender(config: Config, sender: Arc<dyn EmailSender>) -> Self {
        let pipeline = QuotePipeline::new(&config, sender);
        let drafts: Arc<dyn DraftStore> = Arc::new(LocalDraftStore::new(
            config.intake.draft_dir.clone(),
            config.intake.business_name.clone(),
        ));
        Self::new(config, pipeline, drafts)
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
