//! Form intake configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the public form endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Name of the hidden field legitimate users never fill
    #[serde(default = "default_honeypot_field")]
    pub honeypot_field: String,
    /// Business name used in outgoing copy
    #[serde(default = "default_business_name")]
    pub business_name: String,
    /// Directory for locally saved drafts
    #[serde(default = "default_draft_dir")]
    pub draft_dir: PathBuf,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            honeypot_field: default_honeypot_field(),
            business_name: default_business_name(),
            draft_dir: default_draft_dir(),
        }
    }
}
