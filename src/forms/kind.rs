//! The intake forms offered by a chapter

use crate::api::ApiRoute;
use crate::city::Features;
use crate::validation::{schemas, Schema};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    Contact,
    Volunteer,
    Foster,
    ColonySubmission,
    DepositAssistance,
    SurrenderPrevention,
    VetFund,
    LostFound,
    Donation,
    TributeDonation,
    SponsorInquiry,
}

impl FormKind {
    pub const ALL: [FormKind; 11] = [
        FormKind::Contact,
        FormKind::Volunteer,
        FormKind::Foster,
        FormKind::ColonySubmission,
        FormKind::DepositAssistance,
        FormKind::SurrenderPrevention,
        FormKind::VetFund,
        FormKind::LostFound,
        FormKind::Donation,
        FormKind::TributeDonation,
        FormKind::SponsorInquiry,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Contact => "Contact Us",
            FormKind::Volunteer => "Volunteer",
            FormKind::Foster => "Foster Application",
            FormKind::ColonySubmission => "Report a Colony",
            FormKind::DepositAssistance => "Pet Deposit Assistance",
            FormKind::SurrenderPrevention => "Surrender Prevention",
            FormKind::VetFund => "Emergency Vet Fund",
            FormKind::LostFound => "Lost & Found",
            FormKind::Donation => "Donate",
            FormKind::TributeDonation => "Tribute Donation",
            FormKind::SponsorInquiry => "Become a Sponsor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FormKind::Contact => "Send a message to the chapter team",
            FormKind::Volunteer => "Sign up to feed, trap, transport or help at events",
            FormKind::Foster => "Open your home to cats in need",
            FormKind::ColonySubmission => "Tell us about a community cat colony",
            FormKind::DepositAssistance => "Help paying a pet deposit for new housing",
            FormKind::SurrenderPrevention => "Support to keep your pet at home",
            FormKind::VetFund => "Help with emergency veterinary costs",
            FormKind::LostFound => "Report a lost or found pet",
            FormKind::Donation => "Support the chapter with a gift",
            FormKind::TributeDonation => "Give in memory or honor of someone",
            FormKind::SponsorInquiry => "Partner with us as a business",
        }
    }

    pub fn route(&self) -> ApiRoute {
        match self {
            FormKind::Contact => ApiRoute::Contact,
            FormKind::Volunteer => ApiRoute::Volunteer,
            FormKind::Foster => ApiRoute::Foster,
            FormKind::ColonySubmission => ApiRoute::ColonySubmit,
            FormKind::DepositAssistance => ApiRoute::DepositAssistance,
            FormKind::SurrenderPrevention => ApiRoute::SurrenderPrevention,
            FormKind::VetFund => ApiRoute::VetFund,
            FormKind::LostFound => ApiRoute::LostFound,
            FormKind::Donation | FormKind::TributeDonation => ApiRoute::CreateCheckout,
            FormKind::SponsorInquiry => ApiRoute::SponsorInquiry,
        }
    }

    pub fn schema(&self) -> Arc<Schema> {
        let schema = match self {
            FormKind::Contact => &schemas::CONTACT,
            FormKind::Volunteer => &schemas::VOLUNTEER,
            FormKind::Foster => &schemas::FOSTER,
            FormKind::ColonySubmission => &schemas::COLONY_SUBMISSION,
            FormKind::DepositAssistance => &schemas::DEPOSIT_ASSISTANCE,
            FormKind::SurrenderPrevention => &schemas::SURRENDER_PREVENTION,
            FormKind::VetFund => &schemas::VET_FUND,
            FormKind::LostFound => &schemas::LOST_FOUND,
            FormKind::Donation => &schemas::DONATION,
            FormKind::TributeDonation => &schemas::TRIBUTE_DONATION,
            FormKind::SponsorInquiry => &schemas::SPONSOR_INQUIRY,
        };
        Arc::clone(&**schema)
    }

    /// Whether the form is split into wizard steps
    pub fn is_wizard(&self) -> bool {
        matches!(self, FormKind::VetFund)
    }

    /// Contact and volunteer forms are always offered
    pub fn is_enabled(&self, features: &Features) -> bool {
        match self {
            FormKind::Contact | FormKind::Volunteer => true,
            FormKind::Foster => features.fostering,
            FormKind::ColonySubmission => features.colony_map,
            FormKind::DepositAssistance => features.deposit_assistance,
            FormKind::SurrenderPrevention => features.surrender_prevention,
            FormKind::VetFund => features.vet_fund,
            FormKind::LostFound => features.lost_and_found,
            FormKind::Donation | FormKind::TributeDonation => features.donations,
            FormKind::SponsorInquiry => features.corporate,
        }
    }

    /// Forms available for a chapter, in menu order
    pub fn enabled(features: &Features) -> Vec<FormKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| kind.is_enabled(features))
            .collect()
    }
}
