//! # Quote Intake
//!
//! Backend for a landscaping and outdoor construction website's quote form.
//!
//! ## Features
//!
//! - **Bot filtering**: honeypot fields absorb spam without side effects
//! - **Validation**: per-field messages for every offending field at once
//! - **Rate limiting**: per-client sliding window with injectable store and clock
//! - **Routing**: service-specific recipients with fallback and development override
//! - **Notification**: internal notification plus customer confirmation via Resend
//! - **Drafts**: save a request as a local text file instead of mailing it
//!
//! ## Running the service
//!
//! ```rust,no_run
//! use quote_intake::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     config.validate()?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::{QuoteOutcome, QuotePipeline};
pub use utils::error::{QuoteError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
