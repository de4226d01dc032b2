//! Quote submission pipeline
//!
//! Runs a raw payload through bot filter, validator, rate limiter, router and
//! dispatcher, and reduces the result to a single [`QuoteOutcome`].

use crate::config::Config;
use crate::core::notify::{
    ConfirmationStatus, DispatchOutcome, EmailError, EmailSender, NotificationDispatcher,
    QuoteNotification,
};
use crate::core::quote::{BotFilter, FieldErrors, validate_submission};
use crate::core::rate_limiter::RateLimiter;
use crate::core::routing::RecipientRouter;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOutcome {
    /// Notification delivered; the confirmation may or may not have been
    Accepted { submission_id: Uuid },
    /// Honeypot tripped; reported as success with no side effects
    BotAbsorbed,
    /// One or more fields failed validation
    Invalid(FieldErrors),
    /// Client exceeded its quota
    RateLimited { retry_after_secs: u64 },
    /// Provider refused the internal notification
    DispatchFailed(EmailError),
    /// Anything unexpected, including transport failures
    ServerError,
}

impl QuoteOutcome {
    /// Whether the client sees a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted { .. } | Self::BotAbsorbed)
    }
}

/// Stateless stages plus the shared rate limiter
pub struct QuotePipeline {
    bot_filter: BotFilter,
    rate_limiter: Arc<RateLimiter>,
    router: RecipientRouter,
    dispatcher: NotificationDispatcher,
    limit: u32,
}

impl QuotePipeline {
    /// Build every stage from configuration
    pub fn new(config: &Config, sender: Arc<dyn EmailSender>) -> Self {
        Self::with_rate_limiter(
            config,
            sender,
            Arc::new(RateLimiter::new(&config.rate_limit)),
        )
    }

    /// Build with an externally constructed rate limiter
    pub fn with_rate_limiter(
        config: &Config,
        sender: Arc<dyn EmailSender>,
        rate_limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            bot_filter: BotFilter::new(config.intake.honeypot_field.clone()),
            rate_limiter,
            router: RecipientRouter::new(config.routing.clone()),
            dispatcher: NotificationDispatcher::new(
                sender,
                &config.email,
                &config.intake.business_name,
            ),
            limit: config.rate_limit.requests_per_minute,
        }
    }

    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.rate_limiter
    }

    /// Process one submission from `client_ip`
    pub async fn submit(&self, payload: &Value, client_ip: &str) -> QuoteOutcome {
        if self.bot_filter.is_bot(payload) {
            info!(client_ip = %client_ip, "Honeypot field filled, absorbing submission");
            return QuoteOutcome::BotAbsorbed;
        }

        let submission = match validate_submission(payload) {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(
                    client_ip = %client_ip,
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "Quote submission failed validation"
                );
                return QuoteOutcome::Invalid(errors);
            }
        };

        let limit = self
            .rate_limiter
            .check_and_record(client_ip, self.limit)
            .await;
        if !limit.allowed {
            let retry_after_secs = limit.retry_after_secs.unwrap_or(1);
            warn!(
                client_ip = %client_ip,
                retry_after_secs,
                "Quote submission rate limited"
            );
            return QuoteOutcome::RateLimited { retry_after_secs };
        }
        debug!(
            client_ip = %client_ip,
            remaining = limit.remaining(),
            "Quote submission within rate limit"
        );

        let submission_id = Uuid::new_v4();
        let routing = self.router.route(submission.services);
        let contact_lines = self.router.contact_lines(submission.services);
        let notification = QuoteNotification {
            submission: &submission,
            client_ip,
            submitted_at: Utc::now(),
            routing: &routing,
            contact_lines: &contact_lines,
        };

        info!(
            submission_id = %submission_id,
            client_ip = %client_ip,
            services = %submission.services.summary(),
            recipients = ?routing.recipients,
            dev_override = routing.dev_override,
            "Dispatching quote notification"
        );

        match self.dispatcher.dispatch(&notification).await {
            Ok(DispatchOutcome::NotificationDelivered { confirmation, .. }) => {
                match confirmation {
                    ConfirmationStatus::Sent(_) => {
                        info!(submission_id = %submission_id, "Quote request delivered")
                    }
                    ConfirmationStatus::Failed(err) => warn!(
                        submission_id = %submission_id,
                        error = %err,
                        "Quote request delivered, confirmation email failed"
                    ),
                }
                QuoteOutcome::Accepted { submission_id }
            }
            Ok(DispatchOutcome::NotificationFailed(err)) => {
                error!(
                    submission_id = %submission_id,
                    error = %err,
                    "Internal quote notification rejected"
                );
                QuoteOutcome::DispatchFailed(err)
            }
            Err(err) => {
                error!(
                    submission_id = %submission_id,
                    error = %err,
                    "Quote notification dispatch failed"
                );
                QuoteOutcome::ServerError
            }
        }
    }
}
