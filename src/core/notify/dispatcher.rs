//! Two-step notification dispatch
//!
//! The internal notification is sent first and decides the outcome. The
//! customer confirmation is only attempted after the internal send is
//! accepted, and its rejection never fails the request.

use super::render::{render_confirmation, render_internal};
use super::sender::{Delivery, EmailError, EmailSender, OutboundEmail};
use crate::config::models::email::EmailConfig;
use crate::core::quote::QuoteSubmission;
use crate::core::routing::RoutingDecision;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything needed to render both emails for one submission
#[derive(Debug, Clone, Copy)]
pub struct QuoteNotification<'a> {
    pub submission: &'a QuoteSubmission,
    pub client_ip: &'a str,
    pub submitted_at: DateTime<Utc>,
    pub routing: &'a RoutingDecision,
    /// Contact lines shown in the customer confirmation
    pub contact_lines: &'a [String],
}

/// Result of the customer confirmation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    Sent(Delivery),
    Failed(EmailError),
}

/// Outcome of a dispatch that did not hit a transport failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The provider refused the internal notification; no confirmation was attempted
    NotificationFailed(EmailError),
    /// The internal notification was accepted
    NotificationDelivered {
        delivery: Delivery,
        confirmation: ConfirmationStatus,
    },
}

/// Renders and sends the internal notification and the customer confirmation
#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: Arc<dyn EmailSender>,
    from: String,
    reply_to: Option<String>,
    business_name: String,
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("from", &self.from)
            .field("reply_to", &self.reply_to)
            .field("business_name", &self.business_name)
            .finish()
    }
}

impl NotificationDispatcher {
    pub fn new(sender: Arc<dyn EmailSender>, config: &EmailConfig, business_name: &str) -> Self {
        Self {
            sender,
            from: config.from.clone(),
            reply_to: config.reply_to.clone(),
            business_name: business_name.to_string(),
        }
    }

    /// Send both emails in order.
    ///
    /// `Err` is returned only for transport failures on either step.
    pub async fn dispatch(&self, notification: &QuoteNotification<'_>) -> Result<DispatchOutcome> {
        let internal = self.internal_email(notification);
        debug!(
            recipients = ?internal.to,
            subject = %internal.subject,
            "Sending internal quote notification"
        );

        let delivery = match self.sender.send(&internal).await {
            Ok(delivery) => delivery,
            Err(err) if err.is_rejection() => {
                return Ok(DispatchOutcome::NotificationFailed(err));
            }
            Err(err) => return Err(err.into()),
        };

        let confirmation = self.confirmation_email(notification);
        let confirmation = match self.sender.send(&confirmation).await {
            Ok(delivery) => ConfirmationStatus::Sent(delivery),
            Err(err) if err.is_rejection() => {
                warn!(error = %err, "Customer confirmation was rejected by the provider");
                ConfirmationStatus::Failed(err)
            }
            Err(err) => return Err(err.into()),
        };

        Ok(DispatchOutcome::NotificationDelivered {
            delivery,
            confirmation,
        })
    }

    /// Internal notification addressed to the routed recipients
    pub fn internal_email(&self, notification: &QuoteNotification<'_>) -> OutboundEmail {
        let submission = notification.submission;
        let prefix = if notification.routing.dev_override {
            "[DEV] "
        } else {
            ""
        };

        OutboundEmail {
            from: self.from.clone(),
            to: notification.routing.recipients.clone(),
            reply_to: Some(
                self.reply_to
                    .clone()
                    .unwrap_or_else(|| submission.email.clone()),
            ),
            subject: format!(
                "{}New Quote Request: {}",
                prefix,
                submission.services.summary()
            ),
            text: render_internal(notification, &self.business_name),
        }
    }

    /// Confirmation addressed to the submitter
    pub fn confirmation_email(&self, notification: &QuoteNotification<'_>) -> OutboundEmail {
        OutboundEmail {
            from: self.from.clone(),
            to: vec![notification.submission.email.clone()],
            reply_to: None,
            subject: format!("Quote Request Received - {}", self.business_name),
            text: render_confirmation(notification, &self.business_name),
        }
    }
}
