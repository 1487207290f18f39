//! Stripe Checkout sessions for one-time and recurring donations

use crate::city::CityConfig;
use crate::forms::payload::{Donation, TributeDonation};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const STRIPE_CHECKOUT_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

/// Stripe caps metadata values at 500 characters
const MAX_METADATA_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("stripe returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("stripe response had no checkout url")]
    MissingUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Month,
    Year,
}

impl Interval {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "month" => Some(Interval::Month),
            "year" => Some(Interval::Year),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }
}

/// Everything needed to open a checkout session
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub amount_cents: i64,
    /// `Some` makes a subscription, `None` a one-time payment
    pub interval: Option<Interval>,
    pub customer_email: String,
    pub product_name: String,
    pub product_description: String,
    pub metadata: Vec<(String, String)>,
    pub success_url: String,
    pub cancel_url: String,
}

fn to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

fn clip(value: &str) -> String {
    value.chars().take(MAX_METADATA_LEN).collect()
}

impl CheckoutRequest {
    fn links(app_url: &str) -> (String, String) {
        (
            format!("{app_url}/donate/thank-you?session_id={{CHECKOUT_SESSION_ID}}"),
            format!("{app_url}/donate"),
        )
    }

    pub fn for_donation(donation: &Donation, city: &CityConfig, app_url: &str) -> Self {
        let interval = if donation.is_recurring {
            Interval::parse(&donation.interval)
        } else {
            None
        };
        let (success_url, cancel_url) = Self::links(app_url);

        let donor = if donation.is_anonymous || donation.name.trim().is_empty() {
            "Anonymous"
        } else {
            donation.name.as_str()
        };
        let mut metadata = vec![
            ("donor_name".to_string(), clip(donor)),
            ("cover_fees".to_string(), donation.cover_fees.to_string()),
            (
                "donation_type".to_string(),
                match interval {
                    Some(Interval::Month) => "monthly",
                    Some(Interval::Year) => "yearly",
                    None => "one-time",
                }
                .to_string(),
            ),
            ("city".to_string(), city.slug.to_string()),
        ];
        if !donation.message.trim().is_empty() {
            metadata.push(("message".to_string(), clip(&donation.message)));
        }
        if !donation.campaign_id.trim().is_empty() {
            metadata.push(("campaign_id".to_string(), clip(&donation.campaign_id)));
        }

        let (product_name, product_description) = match interval {
            Some(Interval::Month) => (
                format!("Monthly Donation to {}", city.org_name_short),
                format!("Recurring monthly support for {}'s animals", city.city),
            ),
            Some(Interval::Year) => (
                format!("Yearly Donation to {}", city.org_name_short),
                format!("Recurring yearly support for {}'s animals", city.city),
            ),
            None => (
                format!("Donation to {}", city.org_name_short),
                format!("One-time donation to help {}'s animals", city.city),
            ),
        };

        Self {
            amount_cents: to_cents(donation.amount),
            interval,
            customer_email: donation.email.clone(),
            product_name,
            product_description,
            metadata,
            success_url,
            cancel_url,
        }
    }

    pub fn for_tribute(tribute: &TributeDonation, city: &CityConfig, app_url: &str) -> Self {
        let (success_url, cancel_url) = Self::links(app_url);
        let prefix = if tribute.tribute_type == "memorial" {
            "In memory of"
        } else {
            "In honor of"
        };
        let donor = if tribute.is_anonymous {
            "Anonymous"
        } else {
            tribute.donor_name.as_str()
        };

        let mut metadata = vec![
            ("donor_name".to_string(), clip(donor)),
            ("donation_type".to_string(), "tribute".to_string()),
            ("tribute_type".to_string(), tribute.tribute_type.clone()),
            ("honoree_type".to_string(), tribute.honoree_type.clone()),
            ("honoree_name".to_string(), clip(&tribute.honoree_name)),
            ("notify_recipient".to_string(), tribute.notify_recipient.to_string()),
            ("city".to_string(), city.slug.to_string()),
        ];
        if tribute.notify_recipient {
            metadata.push(("recipient_name".to_string(), clip(&tribute.recipient_name)));
            metadata.push(("recipient_email".to_string(), clip(&tribute.recipient_email)));
        }
        if !tribute.message.trim().is_empty() {
            metadata.push(("message".to_string(), clip(&tribute.message)));
        }

        Self {
            amount_cents: to_cents(tribute.amount),
            interval: None,
            customer_email: tribute.donor_email.clone(),
            product_name: format!("Tribute Donation to {}", city.org_name_short),
            product_description: format!("{prefix} {}", tribute.honoree_name),
            metadata,
            success_url,
            cancel_url,
        }
    }

    /// Form-encoded parameters for the Checkout Sessions endpoint
    pub fn form_params(&self) -> Vec<(String, String)> {
        let mode = if self.interval.is_some() {
            "subscription"
        } else {
            "payment"
        };
        let price = "line_items[0][price_data]";
        let mut params = vec![
            ("mode".to_string(), mode.to_string()),
            ("payment_method_types[0]".to_string(), "card".to_string()),
            ("customer_email".to_string(), self.customer_email.clone()),
            (format!("{price}[currency]"), "usd".to_string()),
            (
                format!("{price}[product_data][name]"),
                self.product_name.clone(),
            ),
            (
                format!("{price}[product_data][description]"),
                self.product_description.clone(),
            ),
            (format!("{price}[unit_amount]"), self.amount_cents.to_string()),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("success_url".to_string(), self.success_url.clone()),
            ("cancel_url".to_string(), self.cancel_url.clone()),
        ];
        if let Some(interval) = self.interval {
            params.push((
                format!("{price}[recurring][interval]"),
                interval.as_str().to_string(),
            ));
        }
        for (key, value) in &self.metadata {
            params.push((format!("metadata[{key}]"), value.clone()));
            if self.interval.is_some() {
                params.push((format!("subscription_data[metadata][{key}]"), value.clone()));
            }
        }
        params
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Create a session and return the URL to redirect the donor to
    async fn create_session(&self, request: CheckoutRequest) -> Result<String, CheckoutError>;
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Talks to Stripe's REST API directly
#[derive(Debug)]
pub struct StripeCheckout {
    http: Client,
    secret_key: SecretString,
    endpoint: String,
}

impl StripeCheckout {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

    pub fn new(secret_key: SecretString) -> Result<Self, CheckoutError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(concat!("pawsnclaws-intake/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CheckoutError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            secret_key,
            endpoint: STRIPE_CHECKOUT_URL.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl CheckoutGateway for StripeCheckout {
    async fn create_session(&self, request: CheckoutRequest) -> Result<String, CheckoutError> {
        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.secret_key.expose_secret())
            .form(&request.form_params())
            .send()
            .await
            .map_err(|e| CheckoutError::Transport(e.to_string()))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| CheckoutError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<StripeErrorBody>(&text)
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| status.to_string());
            return Err(CheckoutError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let session: SessionResponse =
            serde_json::from_str(&text).map_err(|_| CheckoutError::MissingUrl)?;
        let url = session.url.ok_or(CheckoutError::MissingUrl)?;
        tracing::info!(
            amount_cents = request.amount_cents,
            recurring = request.interval.is_some(),
            "Checkout session created"
        );
        Ok(url)
    }
}
