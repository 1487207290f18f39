//! POST handlers for every intake route

use super::checkout::CheckoutRequest;
use super::error::ApiError;
use super::ServerState;
use crate::api::ApiRoute;
use crate::city::CityConfig;
use crate::email::Mailer;
use crate::forms::payload::{
    self, ColonySubmission, ContactMessage, DepositAssistanceRequest, Donation, FosterApplication,
    LostFoundReport, SponsorInquiry, SurrenderPreventionRequest, TributeDonation,
    VetFundApplication, VolunteerApplication,
};
use crate::forms::FormKind;
use crate::sanitize;
use crate::validation::FormValues;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

const LOG_SUMMARY_LEN: usize = 80;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accepted {
    pub success: bool,
    pub message: &'static str,
    pub reference: String,
    pub received_at: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutCreated {
    pub success: bool,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub city: &'static str,
}

/// Message returned when a request fails after validation
fn failure_message(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Contact => "Failed to send message",
        FormKind::Volunteer => "Failed to process signup",
        FormKind::ColonySubmission => "Failed to submit colony",
        FormKind::SurrenderPrevention => "Failed to submit case",
        FormKind::LostFound => "Failed to submit report",
        FormKind::SponsorInquiry => "Failed to submit inquiry",
        FormKind::Donation | FormKind::TributeDonation => "Failed to create checkout session",
        FormKind::Foster | FormKind::DepositAssistance | FormKind::VetFund => {
            "Failed to submit application"
        }
    }
}

/// A request body that passed validation
struct Submission {
    kind: FormKind,
    city: &'static CityConfig,
    values: FormValues,
    reference: Uuid,
    received_at: DateTime<Utc>,
}

impl Submission {
    fn parse_body(body: &[u8]) -> Result<serde_json::Value, ApiError> {
        let json: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
        if !json.is_object() {
            return Err(ApiError::InvalidBody("expected a JSON object".to_string()));
        }
        Ok(json)
    }

    fn accept(kind: FormKind, state: &ServerState, json: &serde_json::Value) -> Result<Self, ApiError> {
        let city = json
            .get("city")
            .and_then(|c| c.as_str())
            .and_then(CityConfig::by_slug)
            .unwrap_or(state.default_city);

        let schema = kind.schema();
        let raw = FormValues::from_json(json);
        let errors = schema.validate(&raw);
        if !errors.is_empty() {
            tracing::debug!(form = ?kind, error_count = errors.len(), "Submission failed validation");
            return Err(ApiError::Validation(errors));
        }

        Ok(Self {
            kind,
            city,
            values: schema.normalize(&raw),
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        })
    }

    fn payload<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        payload::from_values(&self.values).map_err(|e| ApiError::Internal {
            public: failure_message(self.kind),
            detail: e.to_string(),
        })
    }

    fn mailer(&self, state: &ServerState) -> Mailer {
        state.mailer.for_city(self.city)
    }

    fn log_accepted(&self, summary: &str) {
        let summary = sanitize::truncate(summary, LOG_SUMMARY_LEN);
        tracing::info!(
            form = ?self.kind,
            city = self.city.slug,
            reference = %self.reference,
            received_at = %self.received_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            summary = %summary,
            "Submission accepted"
        );
    }

    fn accepted(&self, message: &'static str) -> Json<Accepted> {
        Json(Accepted {
            success: true,
            message,
            reference: self.reference.to_string(),
            received_at: self.received_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}

fn accept(kind: FormKind, state: &ServerState, body: &[u8]) -> Result<Submission, ApiError> {
    let json = Submission::parse_body(body)?;
    Submission::accept(kind, state, &json)
}

/// POST /api/contact
pub async fn contact(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Accepted>, ApiError> {
    let form = accept(FormKind::Contact, &state, &body)?;
    let message: ContactMessage = form.payload()?;
    form.log_accepted(&message.reason);

    let mailer = form.mailer(&state);
    mailer
        .deliver_all(vec![
            mailer.contact_notification(&message),
            mailer.contact_confirmation(&message.email, &message.name),
        ])
        .await;

    Ok(form.accepted("Message received"))
}

/// POST /api/volunteer
pub async fn volunteer(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Accepted>, ApiError> {
    let form = accept(FormKind::Volunteer, &state, &body)?;
    let application: VolunteerApplication = form.payload()?;
    form.log_accepted(&application.roles.join(","));

    let mailer = form.mailer(&state);
    mailer
        .deliver_all(vec![
            mailer.volunteer_welcome(&application.email, &application.name, &application.roles),
            mailer.submission_notice(
                "Volunteer",
                &form.kind.schema(),
                &form.values,
                Some(&application.email),
            ),
        ])
        .await;

    Ok(form.accepted("Volunteer signup received"))
}

/// POST /api/foster
pub async fn foster(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Accepted>, ApiError> {
    let form = accept(FormKind::Foster, &state, &body)?;
    let application: FosterApplication = form.payload()?;
    let foster_types = application.foster_types.join(", ");
    form.log_accepted(&foster_types);

    let mailer = form.mailer(&state);
    mailer
        .deliver_all(vec![
            mailer.foster_welcome(&application.email, &application.name, &foster_types),
            mailer.submission_notice(
                "Foster",
                &form.kind.schema(),
                &form.values,
                Some(&application.email),
            ),
        ])
        .await;

    Ok(form.accepted("Foster application received"))
}

/// POST /api/colonies/submit
pub async fn colony_submit(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Accepted>, ApiError> {
    let form = accept(FormKind::ColonySubmission, &state, &body)?;
    let colony: ColonySubmission = form.payload()?;
    form.log_accepted(&colony.location_description);

    let mailer = form.mailer(&state);
    mailer.deliver(mailer.colony_notification(&colony)).await;

    Ok(form.accepted("Colony submitted for review"))
}

/// POST /api/help/deposit-assistance
pub async fn deposit_assistance(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Accepted>, ApiError> {
    let form = accept(FormKind::DepositAssistance, &state, &body)?;
    let request: DepositAssistanceRequest = form.payload()?;
    form.log_accepted(&request.pet_species);

    let mailer = form.mailer(&state);
    mailer
        .deliver_all(vec![
            mailer.deposit_confirmation(&request.email, &request.name, request.deposit_amount),
            mailer.submission_notice(
                "Deposit Assistance",
                &form.kind.schema(),
                &form.values,
                Some(&request.email),
            ),
        ])
        .await;

    Ok(form.accepted("Application received"))
}

/// POST /api/help/surrender-prevention
pub async fn surrender_prevention(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Accepted>, ApiError> {
    let form = accept(FormKind::SurrenderPrevention, &state, &body)?;
    let request: SurrenderPreventionRequest = form.payload()?;
    form.log_accepted(&request.timeline);

    let title = if request.timeline == "urgent" {
        "URGENT Surrender Prevention"
    } else {
        "Surrender Prevention"
    };
    let mailer = form.mailer(&state);
    mailer
        .deliver(mailer.submission_notice(
            title,
            &form.kind.schema(),
            &form.values,
            Some(&request.email),
        ))
        .await;

    Ok(form.accepted("Case submitted"))
}

/// POST /api/help/vet-fund
pub async fn vet_fund(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Accepted>, ApiError> {
    let form = accept(FormKind::VetFund, &state, &body)?;
    let application: VetFundApplication = form.payload()?;
    form.log_accepted(&application.pet_species);

    let mailer = form.mailer(&state);
    mailer
        .deliver_all(vec![
            mailer.vet_fund_confirmation(
                &application.email,
                &application.name,
                &application.pet_name,
            ),
            mailer.submission_notice(
                "Emergency Vet Fund",
                &form.kind.schema(),
                &form.values,
                Some(&application.email),
            ),
        ])
        .await;

    Ok(form.accepted("Application received"))
}

/// POST /api/lost-found
pub async fn lost_found(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Accepted>, ApiError> {
    let form = accept(FormKind::LostFound, &state, &body)?;
    let report: LostFoundReport = form.payload()?;
    form.log_accepted(&report.location);

    let mailer = form.mailer(&state);
    mailer.deliver(mailer.lost_pet_alert(&report)).await;

    Ok(form.accepted("Report submitted"))
}

/// POST /api/sponsors/inquiry
pub async fn sponsor_inquiry(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Accepted>, ApiError> {
    let form = accept(FormKind::SponsorInquiry, &state, &body)?;
    let inquiry: SponsorInquiry = form.payload()?;
    form.log_accepted(&inquiry.company_name);

    let mailer = form.mailer(&state);
    mailer
        .deliver_all(vec![
            mailer.sponsor_confirmation(&inquiry.contact_email, &inquiry.company_name),
            mailer.submission_notice(
                "Sponsor Inquiry",
                &form.kind.schema(),
                &form.values,
                Some(&inquiry.contact_email),
            ),
        ])
        .await;

    Ok(form.accepted("Inquiry received"))
}

/// POST /api/donations/create-checkout
///
/// Bodies carrying `tributeType` are tribute gifts, everything else is a
/// regular donation.
pub async fn create_checkout(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<CheckoutCreated>, ApiError> {
    let json = Submission::parse_body(&body)?;
    let kind = if json.get("tributeType").is_some() {
        FormKind::TributeDonation
    } else {
        FormKind::Donation
    };
    let form = Submission::accept(kind, &state, &json)?;

    let Some(gateway) = state.checkout.as_ref() else {
        tracing::warn!("STRIPE_SECRET_KEY not configured, refusing checkout");
        return Err(ApiError::CheckoutUnavailable);
    };

    let request = match kind {
        FormKind::TributeDonation => {
            let tribute: TributeDonation = form.payload()?;
            CheckoutRequest::for_tribute(&tribute, form.city, &state.app_url)
        }
        _ => {
            let donation: Donation = form.payload()?;
            CheckoutRequest::for_donation(&donation, form.city, &state.app_url)
        }
    };
    form.log_accepted(&request.amount_cents.to_string());

    let url = gateway.create_session(request).await?;
    Ok(Json(CheckoutCreated { success: true, url }))
}

/// GET /api/health
pub async fn health(State(state): State<ServerState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        city: state.default_city.slug,
    })
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/health", get(health))
        .route(ApiRoute::Contact.path(), post(contact))
        .route(ApiRoute::Volunteer.path(), post(volunteer))
        .route(ApiRoute::Foster.path(), post(foster))
        .route(ApiRoute::ColonySubmit.path(), post(colony_submit))
        .route(ApiRoute::DepositAssistance.path(), post(deposit_assistance))
        .route(ApiRoute::SurrenderPrevention.path(), post(surrender_prevention))
        .route(ApiRoute::VetFund.path(), post(vet_fund))
        .route(ApiRoute::LostFound.path(), post(lost_found))
        .route(ApiRoute::SponsorInquiry.path(), post(sponsor_inquiry))
        .route(ApiRoute::CreateCheckout.path(), post(create_checkout))
}
