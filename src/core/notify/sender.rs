//! Email sending seam

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A fully rendered plain-text email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
}

/// Provider acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Provider message id, when returned
    pub id: Option<String>,
}

/// Email sending failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The provider answered and refused the message
    #[error("provider rejected message ({name}): {message}")]
    Rejected {
        status: Option<u16>,
        name: String,
        message: String,
    },

    /// The request never produced a provider answer (network, timeout, bad payload)
    #[error("transport failure: {0}")]
    Transport(String),
}

impl EmailError {
    pub fn rejected<N: Into<String>, M: Into<String>>(
        status: Option<u16>,
        name: N,
        message: M,
    ) -> Self {
        Self::Rejected {
            status,
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Anything that can deliver an [`OutboundEmail`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<Delivery, EmailError>;
}
