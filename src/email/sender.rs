//! Outbound email transport

use crate::sanitize::sanitize_email;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmailError {
    #[error("email service not configured")]
    NotConfigured,
    #[error("network error: {0}")]
    Transport(String),
    #[error("email provider returned {status}: {message}")]
    Provider { status: u16, message: String },
}

/// A rendered message ready to send
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

impl OutgoingEmail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html: String) -> Self {
        Self {
            to: vec![to.into()],
            subject: subject.into(),
            html,
            reply_to: None,
        }
    }

    /// Set Reply-To, ignoring anything that is not a usable address
    pub fn reply_to(mut self, address: &str) -> Self {
        let address = sanitize_email(address);
        if !address.is_empty() {
            self.reply_to = Some(address);
        }
        self
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a message, returning the provider's message id
    async fn send(&self, email: OutgoingEmail) -> Result<String, EmailError>;
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ResendResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Sends through the Resend HTTP API
#[derive(Debug)]
pub struct ResendSender {
    http: Client,
    api_key: SecretString,
    from: String,
    endpoint: String,
}

impl ResendSender {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new(api_key: SecretString, from: impl Into<String>) -> Result<Self, EmailError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(concat!("pawsnclaws-intake/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            from: from.into(),
            endpoint: RESEND_API_URL.to_string(),
        })
    }

    /// Point at a different endpoint, used by tests
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl EmailSender for ResendSender {
    async fn send(&self, email: OutgoingEmail) -> Result<String, EmailError> {
        let request = ResendRequest {
            from: &self.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
            reply_to: email.reply_to.as_deref(),
        };

        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        let status = res.status();
        let body: ResendResponse = res
            .json()
            .await
            .unwrap_or(ResendResponse { id: None, message: None });

        if !status.is_success() {
            return Err(EmailError::Provider {
                status: status.as_u16(),
                message: body
                    .message
                    .unwrap_or_else(|| "Failed to send email".to_string()),
            });
        }

        tracing::info!(subject = %email.subject, to = ?email.to, "Email sent");
        Ok(body.id.unwrap_or_default())
    }
}

/// Used when no API key is configured. Logs and refuses every message.
#[derive(Debug, Clone, Default)]
pub struct DisabledSender;

#[async_trait]
impl EmailSender for DisabledSender {
    async fn send(&self, email: OutgoingEmail) -> Result<String, EmailError> {
        tracing::info!(
            subject = %email.subject,
            to = ?email.to,
            "RESEND_API_KEY not configured, email not sent"
        );
        Err(EmailError::NotConfigured)
    }
}
