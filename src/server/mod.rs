//! Intake API server
//!
//! Validates submissions with the same schemas the client uses, logs them with
//! a reference id and sends chapter-branded emails. Storage belongs to the
//! external database and is not handled here.

pub mod checkout;
pub mod error;
pub mod routes;
pub mod settings;

use crate::city::CityConfig;
use crate::email::{DisabledSender, EmailSender, Mailer, ResendSender};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use checkout::{CheckoutError, CheckoutGateway, CheckoutRequest, StripeCheckout};
pub use error::ApiError;
pub use settings::ServerSettings;

/// Shared handler state
#[derive(Clone)]
pub struct ServerState {
    pub mailer: Mailer,
    pub checkout: Option<Arc<dyn CheckoutGateway>>,
    pub default_city: &'static CityConfig,
    pub app_url: String,
}

impl ServerState {
    pub fn new(
        mailer: Mailer,
        checkout: Option<Arc<dyn CheckoutGateway>>,
        app_url: impl Into<String>,
    ) -> Self {
        Self {
            default_city: mailer.city(),
            mailer,
            checkout,
            app_url: app_url.into(),
        }
    }

    /// Wire up Resend and Stripe when their keys are present
    pub fn from_settings(settings: ServerSettings) -> Result<Self> {
        let sender: Arc<dyn EmailSender> = match settings.resend_api_key {
            Some(key) => Arc::new(
                ResendSender::new(key, settings.email_from.clone())
                    .context("Failed to build email client")?,
            ),
            None => {
                tracing::warn!("RESEND_API_KEY not set, emails will be logged only");
                Arc::new(DisabledSender)
            }
        };

        let checkout: Option<Arc<dyn CheckoutGateway>> = match settings.stripe_secret_key {
            Some(key) => Some(Arc::new(
                StripeCheckout::new(key).context("Failed to build Stripe client")?,
            )),
            None => {
                tracing::warn!("STRIPE_SECRET_KEY not set, online donations disabled");
                None
            }
        };

        let mailer = Mailer::new(sender, settings.city, settings.admin_email);
        Ok(Self::new(mailer, checkout, settings.app_url))
    }
}

pub fn router(state: ServerState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(settings: ServerSettings) -> Result<()> {
    let bind = settings.bind;
    let city = settings.city.slug;
    let state = ServerState::from_settings(settings)?;

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    tracing::info!(%bind, city, "Intake server listening");

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;
    Ok(())
}
