//! HTTP client for the intake API routes

use super::error::SubmitError;
use super::routes::ApiRoute;
use super::traits::{IntakeApi, SubmitReceipt};
use crate::validation::ErrorMap;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Default API address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Error body shape shared by every route
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<ErrorMap>,
}

/// Client for posting intake forms to the API
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: Client,
    base_url: String,
}

impl HttpApiClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: impl Into<String>) -> Result<Self, SubmitError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(concat!("pawsnclaws-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, route: ApiRoute) -> String {
        format!("{}{}", self.base_url, route.path())
    }
}

#[async_trait]
impl IntakeApi for HttpApiClient {
    async fn submit(
        &self,
        route: ApiRoute,
        body: serde_json::Value,
    ) -> Result<SubmitReceipt, SubmitError> {
        let url = self.url_for(route);
        tracing::info!(%route, "Submitting form");

        let res = self.http.post(&url).json(&body).send().await.map_err(|e| {
            tracing::error!(%route, error = %e, "Request failed");
            SubmitError::Network(e.to_string())
        })?;

        let status = res.status().as_u16();
        let text = res.text().await.map_err(|e| {
            tracing::error!(%route, error = %e, "Failed to read response body");
            SubmitError::Network(e.to_string())
        })?;

        let result = interpret_response(status, &text);
        if let Err(ref err) = result {
            tracing::warn!(%route, status, error = ?err, "Submission rejected");
        }
        result
    }
}

/// Map a status code and body to a receipt or an error.
/// Any non-2xx status is a failure, whatever the body says.
pub fn interpret_response(status: u16, body: &str) -> Result<SubmitReceipt, SubmitError> {
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            return Ok(SubmitReceipt::default());
        }
        return serde_json::from_str::<SubmitReceipt>(body).map_err(|e| {
            SubmitError::Unexpected {
                status,
                detail: e.to_string(),
            }
        });
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(message),
            errors,
        }) if !message.trim().is_empty() => Err(SubmitError::Rejected {
            status,
            message,
            field_errors: errors.unwrap_or_default(),
        }),
        _ => Err(SubmitError::Unexpected {
            status,
            detail: body.chars().take(200).collect(),
        }),
    }
}
