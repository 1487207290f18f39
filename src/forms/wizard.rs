//! Multi-step form state machine layered on a `FormController`

use super::controller::FormController;
use crate::validation::{FieldValue, FormValues};
use std::fmt;

/// A named step of a multi-step form
pub trait WizardStep: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    fn first() -> Self;
    fn next(self) -> Option<Self>;
    fn prev(self) -> Option<Self>;
    fn title(self) -> &'static str;
    /// 1-based position of the step
    fn position(self) -> usize;
    fn count() -> usize;
    /// Fields that must be error-free before leaving this step
    fn guard_fields(self) -> &'static [&'static str];
    /// Fields shown on this step
    fn fields(self) -> &'static [&'static str];
    /// Checkboxes that must be ticked before the final submit
    fn consent_fields() -> &'static [&'static str] {
        &[]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("{step} is incomplete: {}", .fields.join(", "))]
    StepBlocked {
        step: &'static str,
        fields: Vec<&'static str>,
    },
    #[error("already on the last step")]
    AtLastStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard<S: WizardStep> {
    current: S,
}

impl<S: WizardStep> Default for Wizard<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WizardStep> Wizard<S> {
    pub fn new() -> Self {
        Self { current: S::first() }
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn is_last(&self) -> bool {
        self.current.next().is_none()
    }

    pub fn is_first(&self) -> bool {
        self.current.prev().is_none()
    }

    /// Touch the current step's guard fields and move forward if none of them
    /// has an error.
    pub fn advance(&mut self, controller: &mut FormController) -> Result<S, WizardError> {
        let step = self.current;
        for field in step.guard_fields() {
            controller.set_touched(field);
        }

        let blocked: Vec<&'static str> = step
            .guard_fields()
            .iter()
            .copied()
            .filter(|field| controller.errors().contains(field))
            .collect();
        if !blocked.is_empty() {
            return Err(WizardError::StepBlocked {
                step: step.title(),
                fields: blocked,
            });
        }

        let next = step.next().ok_or(WizardError::AtLastStep)?;
        tracing::debug!(from = step.title(), to = next.title(), "Wizard advanced");
        self.current = next;
        Ok(next)
    }

    /// Move to the previous step without validating. Returns false on the first step.
    pub fn back(&mut self) -> bool {
        match self.current.prev() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Final submit is allowed only on the last step with every consent ticked
    pub fn can_submit(&self, values: &FormValues) -> bool {
        self.is_last()
            && S::consent_fields()
                .iter()
                .all(|field| values.get(field) == Some(&FieldValue::Bool(true)))
    }

    pub fn reset(&mut self) {
        self.current = S::first();
    }
}

/// Steps of the emergency vet fund application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VetFundStep {
    ContactInfo,
    PetInfo,
    SituationAndSubmit,
}

impl WizardStep for VetFundStep {
    fn first() -> Self {
        VetFundStep::ContactInfo
    }

    fn next(self) -> Option<Self> {
        match self {
            VetFundStep::ContactInfo => Some(VetFundStep::PetInfo),
            VetFundStep::PetInfo => Some(VetFundStep::SituationAndSubmit),
            VetFundStep::SituationAndSubmit => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            VetFundStep::ContactInfo => None,
            VetFundStep::PetInfo => Some(VetFundStep::ContactInfo),
            VetFundStep::SituationAndSubmit => Some(VetFundStep::PetInfo),
        }
    }

    fn title(self) -> &'static str {
        match self {
            VetFundStep::ContactInfo => "Contact Info",
            VetFundStep::PetInfo => "Pet & Vet Info",
            VetFundStep::SituationAndSubmit => "Situation & Submit",
        }
    }

    fn position(self) -> usize {
        match self {
            VetFundStep::ContactInfo => 1,
            VetFundStep::PetInfo => 2,
            VetFundStep::SituationAndSubmit => 3,
        }
    }

    fn count() -> usize {
        3
    }

    fn guard_fields(self) -> &'static [&'static str] {
        match self {
            VetFundStep::ContactInfo => &["name", "email", "phone"],
            VetFundStep::PetInfo => &[
                "petName",
                "petSpecies",
                "vetClinic",
                "diagnosis",
                "estimatedCost",
            ],
            VetFundStep::SituationAndSubmit => &["situation"],
        }
    }

    fn fields(self) -> &'static [&'static str] {
        match self {
            VetFundStep::ContactInfo => &["name", "email", "phone"],
            VetFundStep::PetInfo => &[
                "petName",
                "petSpecies",
                "petAge",
                "vetClinic",
                "diagnosis",
                "estimatedCost",
                "isEmergency",
            ],
            VetFundStep::SituationAndSubmit => &["situation", "proofOfIncome", "agreedToTerms"],
        }
    }

    fn consent_fields() -> &'static [&'static str] {
        &["agreedToTerms"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::controller::{SubmitBlocked, SubmitOutcome};
    use crate::validation::schemas;
    use pretty_assertions::assert_eq;

    fn vet_fund() -> (Wizard<VetFundStep>, FormController) {
        (Wizard::new(), FormController::new(schemas::VET_FUND.clone()))
    }

    fn fill_contact(form: &mut FormController) {
        form.set_value("name", "Jane Doe");
        form.set_value("email", "jane@example.com");
        form.set_value("phone", "512-555-0100");
    }

    fn fill_pet(form: &mut FormController) {
        form.set_value("petName", "Whiskers");
        form.set_value("vetClinic", "Emancipet");
        form.set_value("diagnosis", "Broken leg");
        form.set_value("estimatedCost", 300);
    }

    mod steps {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_step_order() {
            assert_eq!(VetFundStep::first(), VetFundStep::ContactInfo);
            assert_eq!(VetFundStep::ContactInfo.next(), Some(VetFundStep::PetInfo));
            assert_eq!(VetFundStep::SituationAndSubmit.next(), None);
            assert_eq!(VetFundStep::ContactInfo.prev(), None);
            assert_eq!(VetFundStep::SituationAndSubmit.position(), VetFundStep::count());
        }

        #[test]
        fn test_guard_fields_are_declared_in_schema() {
            let mut step = Some(VetFundStep::first());
            while let Some(s) = step {
                for field in s.guard_fields().iter().chain(s.fields()) {
                    assert!(
                        schemas::VET_FUND.get_field(field).is_some(),
                        "{field} is not in the vet fund schema"
                    );
                }
                step = s.next();
            }
        }
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_contact_step_blocks_until_all_fields_pass() {
            let (mut wizard, mut form) = vet_fund();
            form.set_value("name", "Jane Doe");

            let err = wizard.advance(&mut form).unwrap_err();
            assert_eq!(
                err,
                WizardError::StepBlocked {
                    step: "Contact Info",
                    fields: vec!["email", "phone"],
                }
            );
            assert_eq!(wizard.current(), VetFundStep::ContactInfo);
            assert_eq!(form.field_error("email"), Some("Email is required"));
            assert_eq!(form.field_error("petName"), None);
        }

        #[test]
        fn test_advance_ignores_fields_of_later_steps() {
            let (mut wizard, mut form) = vet_fund();
            fill_contact(&mut form);
            assert_eq!(wizard.advance(&mut form), Ok(VetFundStep::PetInfo));
            assert!(!form.is_touched("petName"));
        }

        #[test]
        fn test_back_never_validates() {
            let (mut wizard, mut form) = vet_fund();
            fill_contact(&mut form);
            wizard.advance(&mut form).ok();
            form.set_value("email", "");
            assert!(wizard.back());
            assert_eq!(wizard.current(), VetFundStep::ContactInfo);
            assert!(!wizard.back());
        }

        #[test]
        fn test_advance_on_last_step() {
            let (mut wizard, mut form) = vet_fund();
            fill_contact(&mut form);
            fill_pet(&mut form);
            form.set_value("situation", "Lost my job last month and cannot cover surgery.");
            wizard.advance(&mut form).ok();
            wizard.advance(&mut form).ok();
            assert_eq!(wizard.advance(&mut form), Err(WizardError::AtLastStep));
        }
    }

    #[tokio::test]
    async fn test_vet_fund_application_flow() {
        let (mut wizard, mut form) = vet_fund();

        fill_contact(&mut form);
        assert_eq!(wizard.advance(&mut form), Ok(VetFundStep::PetInfo));

        fill_pet(&mut form);
        assert_eq!(wizard.advance(&mut form), Ok(VetFundStep::SituationAndSubmit));

        form.set_value("situation", "Lost my job last month and cannot cover surgery.");
        assert!(form.is_valid());
        assert!(!wizard.can_submit(form.values()));

        form.set_value("agreedToTerms", true);
        assert!(wizard.can_submit(form.values()));

        let outcome = form.handle_submit(|_| async { Ok::<_, String>(()) }).await;
        assert_eq!(outcome, SubmitOutcome::Succeeded(()));
    }

    #[test]
    fn test_can_submit_requires_last_step() {
        let (wizard, mut form) = vet_fund();
        form.set_value("agreedToTerms", true);
        assert!(!wizard.can_submit(form.values()));
    }

    #[test]
    fn test_consent_gate_is_independent_of_schema() {
        let (mut wizard, mut form) = vet_fund();
        fill_contact(&mut form);
        wizard.advance(&mut form).ok();
        fill_pet(&mut form);
        wizard.advance(&mut form).ok();
        form.set_value("agreedToTerms", true);

        // Consent alone does not make an incomplete record submittable
        assert!(wizard.can_submit(form.values()));
        assert_eq!(
            form.begin_submit(),
            Err(SubmitBlocked::Invalid { error_count: 1 })
        );
    }

    #[test]
    fn test_schema_accepts_record_without_consent() {
        let (mut wizard, mut form) = vet_fund();
        fill_contact(&mut form);
        wizard.advance(&mut form).ok();
        fill_pet(&mut form);
        wizard.advance(&mut form).ok();
        form.set_value(
            "situation",
            "Lost my job last month and cannot cover surgery.",
        );

        // Only the wizard holds back a record whose terms box is unchecked
        assert!(form.is_valid());
        assert!(!wizard.can_submit(form.values()));
    }
}
