//! Transactional email for intake submissions

pub mod sender;
pub mod templates;

use crate::city::CityConfig;
use crate::forms::payload::{ColonySubmission, ContactMessage, LostFoundReport};
use crate::sanitize::{sanitize_phone, strip_html};
use crate::validation::{FormValues, InputKind, Schema};
use std::sync::Arc;

pub use sender::{DisabledSender, EmailError, EmailSender, OutgoingEmail, ResendSender};

#[cfg(test)]
pub use sender::MockEmailSender;

/// Composes chapter-branded messages and hands them to an [`EmailSender`]
#[derive(Clone)]
pub struct Mailer {
    sender: Arc<dyn EmailSender>,
    city: &'static CityConfig,
    admin_email: String,
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("city", &self.city.slug)
            .field("admin_email", &self.admin_email)
            .finish_non_exhaustive()
    }
}

impl Mailer {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        city: &'static CityConfig,
        admin_email: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            city,
            admin_email: admin_email.into(),
        }
    }

    pub fn city(&self) -> &'static CityConfig {
        self.city
    }

    /// Same sender and admin address, different chapter branding
    pub fn for_city(&self, city: &'static CityConfig) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
            city,
            admin_email: self.admin_email.clone(),
        }
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Send one message. Failures are logged and reported as `false`,
    /// so a submission never fails because email is down.
    pub async fn deliver(&self, email: OutgoingEmail) -> bool {
        let subject = email.subject.clone();
        match self.sender.send(email).await {
            Ok(id) => {
                tracing::debug!(%subject, id, "Email delivered");
                true
            }
            Err(EmailError::NotConfigured) => false,
            Err(e) => {
                tracing::warn!(%subject, error = %e, "Failed to send email");
                false
            }
        }
    }

    /// Deliver each message in order, returning how many went out
    pub async fn deliver_all(&self, emails: Vec<OutgoingEmail>) -> usize {
        let mut sent = 0;
        for email in emails {
            if self.deliver(email).await {
                sent += 1;
            }
        }
        sent
    }

    pub fn contact_confirmation(&self, to: &str, name: &str) -> OutgoingEmail {
        OutgoingEmail::new(
            to,
            format!("We received your message - {}", self.city.org_name_short),
            templates::contact_confirmation(self.city, name),
        )
    }

    pub fn contact_notification(&self, message: &ContactMessage) -> OutgoingEmail {
        let subject = if message.reason.trim().is_empty() {
            "General Inquiry"
        } else {
            message.reason.as_str()
        };
        OutgoingEmail::new(
            &self.admin_email,
            strip_html(&format!("[Contact] {} - from {}", subject, message.name)),
            templates::contact_notification(self.city, message, subject),
        )
        .reply_to(&message.email)
    }

    pub fn volunteer_welcome(&self, to: &str, name: &str, roles: &[String]) -> OutgoingEmail {
        OutgoingEmail::new(
            to,
            format!("Welcome to {} Volunteers!", self.city.org_name_short),
            templates::volunteer_welcome(self.city, name, roles),
        )
    }

    pub fn foster_welcome(&self, to: &str, name: &str, foster_type: &str) -> OutgoingEmail {
        OutgoingEmail::new(
            to,
            format!("Foster Application Received - {}", self.city.org_name_short),
            templates::foster_welcome(self.city, name, foster_type),
        )
    }

    pub fn deposit_confirmation(&self, to: &str, name: &str, amount: f64) -> OutgoingEmail {
        OutgoingEmail::new(
            to,
            "Deposit Assistance Application Received",
            templates::deposit_confirmation(self.city, name, amount),
        )
    }

    pub fn vet_fund_confirmation(&self, to: &str, name: &str, pet_name: &str) -> OutgoingEmail {
        OutgoingEmail::new(
            to,
            "Emergency Vet Fund Application Received",
            templates::vet_fund_confirmation(self.city, name, pet_name),
        )
    }

    pub fn sponsor_confirmation(&self, to: &str, company_name: &str) -> OutgoingEmail {
        OutgoingEmail::new(
            to,
            format!("Partnership Inquiry Received - {}", self.city.org_name_short),
            templates::sponsor_confirmation(self.city, company_name),
        )
    }

    pub fn colony_notification(&self, colony: &ColonySubmission) -> OutgoingEmail {
        let name = if colony.colony_name.trim().is_empty() {
            "Unnamed colony"
        } else {
            colony.colony_name.as_str()
        };
        OutgoingEmail::new(
            &self.admin_email,
            format!(
                "[Colony] New submission - {} ({} cats)",
                name,
                crate::validation::format_number(colony.estimated_cats)
            ),
            templates::colony_notification(self.city, colony),
        )
        .reply_to(&colony.submitter_email)
    }

    pub fn lost_pet_alert(&self, report: &LostFoundReport) -> OutgoingEmail {
        let kind = if report.is_lost() { "Lost" } else { "Found" };
        OutgoingEmail::new(
            &self.admin_email,
            strip_html(&format!("[{kind} Pet] {} - {}", report.species, report.location)),
            templates::lost_pet_alert(self.city, report),
        )
        .reply_to(&report.contact_email)
    }

    /// Admin copy of any submission as a label/value table
    pub fn submission_notice(
        &self,
        title: &str,
        schema: &Schema,
        values: &FormValues,
        reply_to: Option<&str>,
    ) -> OutgoingEmail {
        let email = OutgoingEmail::new(
            &self.admin_email,
            format!("[{title}] New submission - {}", self.city.org_name_short),
            templates::submission_summary(self.city, title, &summary_rows(schema, values)),
        );
        match reply_to.filter(|r| !r.is_empty()) {
            Some(address) => email.reply_to(address),
            None => email,
        }
    }
}

/// Label/value rows for every non-blank field, in declaration order
pub fn summary_rows(schema: &Schema, values: &FormValues) -> Vec<(String, String)> {
    schema
        .fields()
        .iter()
        .filter_map(|field| {
            let value = values.get(field.name)?;
            if value.is_blank() {
                return None;
            }
            let shown = match field.input {
                InputKind::Phone => sanitize_phone(&value.display_value()),
                _ => value.display_value(),
            };
            Some((field.label.to_string(), shown))
        })
        .collect()
}
