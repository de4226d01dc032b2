//! Resend HTTP API client

use super::sender::{Delivery, EmailError, EmailSender, OutboundEmail};
use crate::config::models::email::EmailConfig;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Request body for `POST /emails`
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Error body returned on non-2xx responses
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderError {
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// [`EmailSender`] backed by the Resend REST API
#[derive(Debug, Clone)]
pub struct ResendClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ResendClient {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/emails", config.api_base.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: &OutboundEmail) -> std::result::Result<Delivery, EmailError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(EmailError::rejected(
                None,
                "missing_api_key",
                "RESEND_API_KEY is not configured",
            ));
        };

        let payload = SendRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            text: &email.text,
            reply_to: email.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| EmailError::transport(format!("Failed to reach email provider: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let parsed: ProviderError = serde_json::from_str(&body).unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Email provider rejected message");

            return Err(EmailError::rejected(
                parsed.status_code.or(Some(status.as_u16())),
                parsed.name.unwrap_or_else(|| "http_error".to_string()),
                parsed
                    .message
                    .unwrap_or_else(|| format!("Email provider returned status: {}", status)),
            ));
        }

        let body: SendResponse = response
            .json()
            .await
            .map_err(|e| EmailError::transport(format!("Invalid provider response: {}", e)))?;
        debug!(id = ?body.id, "Email accepted by provider");

        Ok(Delivery { id: body.id })
    }
}
