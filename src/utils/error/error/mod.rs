//! Error handling for the quote service
//!
//! This module defines the error types used throughout the service.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::ServerErrorBody;
pub use types::{QuoteError, Result};
