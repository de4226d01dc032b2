//! Storage layer for the quote service
//!
//! Nothing is persisted for quote submissions; this only covers saved drafts.

/// Draft file storage module
pub mod files;

pub use files::{DraftStore, LocalDraftStore, QuoteDraft};
