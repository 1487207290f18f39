//! Typed records for each intake form
//!
//! The server deserializes validated `FormValues` into these, so handlers work
//! with named fields instead of string keys.

use crate::validation::FormValues;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Decode a validated record into its typed payload
pub fn from_values<T: DeserializeOwned>(values: &FormValues) -> serde_json::Result<T> {
    serde_json::from_value(values.to_json())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub reason: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerApplication {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub roles: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub has_vehicle: bool,
    #[serde(default)]
    pub can_foster: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub how_heard: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FosterApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub foster_types: Vec<String>,
    #[serde(default)]
    pub has_other_pets: String,
    #[serde(default)]
    pub has_kids: String,
    #[serde(default)]
    pub housing_type: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub why_foster: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColonySubmission {
    #[serde(default)]
    pub colony_name: String,
    pub location_description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub estimated_cats: f64,
    #[serde(default)]
    pub tnr_status: String,
    #[serde(default)]
    pub has_caretaker: bool,
    #[serde(default)]
    pub caretaker_contact: String,
    #[serde(default)]
    pub feeding_schedule: String,
    #[serde(default)]
    pub urgent_needs: Vec<String>,
    #[serde(default)]
    pub additional_info: String,
    pub submitter_name: String,
    pub submitter_email: String,
    #[serde(default)]
    pub submitter_phone: String,
    #[serde(default)]
    pub submitter_relation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAssistanceRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pet_name: String,
    pub pet_species: String,
    pub landlord_name: String,
    pub deposit_amount: f64,
    #[serde(default)]
    pub monthly_income: Option<f64>,
    pub situation: String,
    #[serde(default)]
    pub can_repay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurrenderPreventionRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub pet_info: String,
    pub reasons: Vec<String>,
    #[serde(default)]
    pub other_reason: String,
    pub timeline: String,
    #[serde(default)]
    pub what_would_help: String,
    #[serde(default)]
    pub tried_options: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetFundApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pet_name: String,
    pub pet_species: String,
    #[serde(default)]
    pub pet_age: String,
    pub vet_clinic: String,
    pub diagnosis: String,
    pub estimated_cost: f64,
    #[serde(default)]
    pub is_emergency: bool,
    pub situation: String,
    #[serde(default)]
    pub has_applied_elsewhere: bool,
    #[serde(default)]
    pub other_funding: String,
    #[serde(default)]
    pub proof_of_income: bool,
    #[serde(default)]
    pub agreed_to_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostFoundReport {
    #[serde(rename = "type")]
    pub report_type: String,
    pub species: String,
    #[serde(default)]
    pub breed: String,
    pub color: String,
    #[serde(default)]
    pub name: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    #[serde(default)]
    pub microchip_id: String,
}

impl LostFoundReport {
    pub fn is_lost(&self) -> bool {
        self.report_type == "lost"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub amount: f64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub cover_fees: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub campaign_id: String,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub interval: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TributeDonation {
    pub tribute_type: String,
    pub honoree_type: String,
    pub honoree_name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub notify_recipient: bool,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_email: String,
    pub donor_name: String,
    pub donor_email: String,
    pub amount: f64,
    #[serde(default)]
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorInquiry {
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::schemas;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deposit_payload_from_values() {
        let mut values = schemas::DEPOSIT_ASSISTANCE.defaults();
        values.set("name", "Sam Rivera");
        values.set("email", "sam@example.com");
        values.set("phone", "512-555-0100");
        values.set("petName", "Biscuit");
        values.set("petSpecies", "dog");
        values.set("landlordName", "Oak Street Apartments");
        values.set("depositAmount", 300);
        values.set("situation", "Moving and need help with the deposit.");

        let request: DepositAssistanceRequest = from_values(&values).unwrap();
        assert_eq!(request.deposit_amount, 300.0);
        assert_eq!(request.monthly_income, None);
        assert_eq!(request.pet_species, "dog");
        assert!(!request.can_repay);
    }

    #[test]
    fn test_lost_found_type_rename() {
        let values: FormValues = [
            ("type", "lost"),
            ("species", "cat"),
            ("color", "Orange tabby"),
            ("description", "Very friendly, wearing a blue collar."),
            ("location", "Zilker Park"),
            ("date", "2026-10-01"),
            ("contactName", "Jane Doe"),
            ("contactPhone", "512-555-0100"),
            ("contactEmail", "jane@example.com"),
        ]
        .into_iter()
        .collect();

        let report: LostFoundReport = from_values(&values).unwrap();
        assert!(report.is_lost());
        assert_eq!(report.breed, "");
    }

    #[test]
    fn test_missing_required_key_fails_to_decode() {
        let values: FormValues = [("name", "Jane Doe")].into_iter().collect();
        assert!(from_values::<ContactMessage>(&values).is_err());
    }
}
