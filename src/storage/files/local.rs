//! Local file system draft store

use super::types::{DraftStore, QuoteDraft, draft_filename, render_draft};
use crate::utils::error::{QuoteError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Writes drafts as text files under a base directory
#[derive(Debug, Clone)]
pub struct LocalDraftStore {
    base_path: PathBuf,
    business_name: String,
}

impl LocalDraftStore {
    /// Create a store rooted at `base_path`; the directory is created lazily on first save
    pub fn new(base_path: impl Into<PathBuf>, business_name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            business_name: business_name.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait]
impl DraftStore for LocalDraftStore {
    async fn save(&self, draft: &QuoteDraft, at: DateTime<Utc>) -> Result<String> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            QuoteError::Storage(format!("Failed to create draft directory: {}", e))
        })?;

        let filename = draft_filename(at);
        let path = self.base_path.join(&filename);
        let content = render_draft(draft, &self.business_name, at);

        fs::write(&path, content)
            .await
            .map_err(|e| QuoteError::Storage(format!("Failed to write draft: {}", e)))?;

        debug!("Draft written to {}", path.display());
        info!(filename = %filename, "Quote request draft saved");
        Ok(filename)
    }
}
