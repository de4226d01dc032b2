//! Local draft storage
//!
//! Quote requests can be saved as plain-text drafts instead of being mailed.

mod local;
mod types;

// Re-export public types
pub use local::LocalDraftStore;
pub use types::{DraftStore, QuoteDraft, draft_filename, draft_subject, render_draft};
