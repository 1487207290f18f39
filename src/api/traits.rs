//! Trait abstraction for the intake API to enable mocking in tests

use super::error::SubmitError;
use super::routes::ApiRoute;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Successful response body of an intake route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub message: Option<String>,
    /// Checkout redirect for donation routes
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntakeApi: Send + Sync {
    /// POST a JSON body to an intake route
    async fn submit(
        &self,
        route: ApiRoute,
        body: serde_json::Value,
    ) -> Result<SubmitReceipt, SubmitError>;
}
