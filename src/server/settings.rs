//! Server settings read from the environment

use crate::city::CityConfig;
use crate::config::{ConfigError, CITY_ENV};
use secrecy::SecretString;
use std::net::SocketAddr;

pub const BIND_ENV: &str = "PAWSNCLAWS_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@pawsnclaws.org";
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

#[derive(Debug)]
pub struct ServerSettings {
    pub bind: SocketAddr,
    /// Chapter used when a request names no known city
    pub city: &'static CityConfig,
    pub admin_email: String,
    pub email_from: String,
    pub resend_api_key: Option<SecretString>,
    pub stripe_secret_key: Option<SecretString>,
    /// Base for Stripe success and cancel links
    pub app_url: String,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_raw = read(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: BIND_ENV,
            message: format!("'{bind_raw}' is not a socket address"),
        })?;

        let city = CityConfig::resolve(read(CITY_ENV).as_deref());
        let email_from = read("EMAIL_FROM")
            .unwrap_or_else(|| format!("{} <noreply@pawsnclaws.org>", city.org_name_short));

        Ok(Self {
            bind,
            city,
            admin_email: read("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            email_from,
            resend_api_key: read("RESEND_API_KEY").map(SecretString::from),
            stripe_secret_key: read("STRIPE_SECRET_KEY").map(SecretString::from),
            app_url: read("APP_URL")
                .unwrap_or_else(|| DEFAULT_APP_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}
