//! Form controller, wizard steps and per-form records

pub mod controller;
pub mod kind;
pub mod payload;
pub mod wizard;

pub use controller::{
    FormController, SubmissionState, SubmitBlocked, SubmitOutcome, GENERIC_SUBMIT_FAILURE,
};
pub use kind::FormKind;
pub use wizard::{VetFundStep, Wizard, WizardError, WizardStep};
