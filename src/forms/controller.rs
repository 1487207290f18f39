//! Form state controller: values, touched set, errors and submission lifecycle

use crate::validation::{ErrorMap, FieldValue, FormValues, InputKind, Schema};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Fallback banner text when a failure carries no message
pub const GENERIC_SUBMIT_FAILURE: &str = "Something went wrong. Please try again.";

/// Lifecycle of a single submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed { message: String },
}

/// Why a submit request did not reach the network
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("this form was already submitted")]
    AlreadySubmitted,
    #[error("{error_count} field(s) need attention")]
    Invalid { error_count: usize },
}

/// Result of `FormController::handle_submit`
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    Blocked(SubmitBlocked),
    Succeeded(T),
    Failed(String),
}

/// Owns one form instance's values, touched set, errors and submission state
#[derive(Debug, Clone)]
pub struct FormController {
    schema: Arc<Schema>,
    defaults: FormValues,
    values: FormValues,
    /// Raw text typed into fields whose stored value is parsed (numbers)
    drafts: BTreeMap<String, String>,
    touched: BTreeSet<String>,
    errors: ErrorMap,
    submission: SubmissionState,
}

impl FormController {
    pub fn new(schema: Arc<Schema>) -> Self {
        let defaults = schema.defaults();
        Self::from_defaults(schema, defaults)
    }

    /// Start from the schema defaults overlaid with `initial`
    pub fn with_values(schema: Arc<Schema>, initial: FormValues) -> Self {
        let mut defaults = schema.defaults();
        for (field, value) in initial.iter() {
            defaults.set(field, schema.coerce(field, value.clone()));
        }
        Self::from_defaults(schema, defaults)
    }

    fn from_defaults(schema: Arc<Schema>, defaults: FormValues) -> Self {
        let errors = schema.validate(&defaults);
        Self {
            schema,
            values: defaults.clone(),
            defaults,
            drafts: BTreeMap::new(),
            touched: BTreeSet::new(),
            errors,
            submission: SubmissionState::Idle,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Every current error, whether or not its field is touched
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.submission == SubmissionState::Succeeded
    }

    /// Banner message while the last submission is failed
    pub fn submit_error(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Store a value and re-validate the whole record.
    /// The touched set is left alone, so no new error becomes visible.
    pub fn set_value(&mut self, field: &str, value: impl Into<FieldValue>) {
        let value = self.schema.coerce(field, value.into());
        self.drafts.remove(field);
        self.values.set(field, value);
        self.revalidate();
    }

    pub fn set_values(&mut self, partial: FormValues) {
        for (field, value) in partial.iter() {
            let value = self.schema.coerce(field, value.clone());
            self.drafts.remove(field);
            self.values.set(field, value);
        }
        self.revalidate();
    }

    /// Apply raw input text, parsed according to the field's input kind
    pub fn handle_change(&mut self, field: &str, raw: &str) {
        let input = self.schema.get_field(field).map(|f| f.input);
        let value = match input {
            Some(InputKind::Checkbox) => FieldValue::Bool(matches!(raw, "true" | "on")),
            Some(InputKind::MultiSelect(_)) => FieldValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => FieldValue::Text(raw.to_string()),
        };
        self.set_value(field, value);
        if input == Some(InputKind::Number) {
            self.drafts.insert(field.to_string(), raw.to_string());
        }
    }

    /// Text the user sees in the field's input box
    pub fn input_text(&self, field: &str) -> String {
        match self.drafts.get(field) {
            Some(raw) => raw.clone(),
            None => self
                .values
                .get(field)
                .map(FieldValue::display_value)
                .unwrap_or_default(),
        }
    }

    pub fn toggle(&mut self, field: &str) {
        let current = self.values.flag(field);
        self.set_value(field, !current);
    }

    pub fn toggle_option(&mut self, field: &str, option: &str) {
        let mut items = self.values.list(field).to_vec();
        if let Some(pos) = items.iter().position(|item| item == option) {
            items.remove(pos);
        } else {
            items.push(option.to_string());
        }
        self.set_value(field, items);
    }

    /// Mark a field touched. Does not re-validate.
    pub fn set_touched(&mut self, field: &str) {
        self.touched.insert(field.to_string());
    }

    pub fn handle_blur(&mut self, field: &str) {
        self.set_touched(field);
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// The field's error, only once the field has been touched
    pub fn field_error(&self, field: &str) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_error(field).is_some()
    }

    /// Validated fresh on every call
    pub fn is_valid(&self) -> bool {
        self.schema.validate(&self.values).is_empty()
    }

    /// Touch every declared field and every present key, then re-validate.
    /// On success the state becomes `Submitting` and the values to send are returned.
    pub fn begin_submit(&mut self) -> Result<FormValues, SubmitBlocked> {
        match self.submission {
            SubmissionState::Submitting => return Err(SubmitBlocked::InFlight),
            SubmissionState::Succeeded => return Err(SubmitBlocked::AlreadySubmitted),
            SubmissionState::Failed { .. } => self.submission = SubmissionState::Idle,
            SubmissionState::Idle => {}
        }

        let names: Vec<String> = self
            .schema
            .field_names()
            .map(str::to_string)
            .chain(self.values.keys().map(str::to_string))
            .collect();
        self.touched.extend(names);
        self.revalidate();

        if !self.errors.is_empty() {
            tracing::debug!(error_count = self.errors.len(), "Submit blocked by validation");
            return Err(SubmitBlocked::Invalid {
                error_count: self.errors.len(),
            });
        }

        self.submission = SubmissionState::Submitting;
        Ok(self.schema.normalize(&self.values))
    }

    /// Settle an in-flight submission with the handler's result
    pub fn complete_submit<T, E: fmt::Display>(&mut self, result: Result<T, E>) -> SubmitOutcome<T> {
        match result {
            Ok(value) => {
                self.submission = SubmissionState::Succeeded;
                SubmitOutcome::Succeeded(value)
            }
            Err(err) => {
                let mut message = err.to_string();
                if message.trim().is_empty() {
                    message = GENERIC_SUBMIT_FAILURE.to_string();
                }
                tracing::warn!(error = %message, "Submission failed");
                self.submission = SubmissionState::Failed {
                    message: message.clone(),
                };
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Validate, then run `on_submit` with the values. The handler is never
    /// called when the submit is blocked.
    pub async fn handle_submit<F, Fut, T, E>(&mut self, on_submit: F) -> SubmitOutcome<T>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let values = match self.begin_submit() {
            Ok(values) => values,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };
        let result = on_submit(values).await;
        self.complete_submit(result)
    }

    /// Return from `Failed` to `Idle`, keeping every entered value
    pub fn dismiss_error(&mut self) {
        if matches!(self.submission, SubmissionState::Failed { .. }) {
            self.submission = SubmissionState::Idle;
        }
    }

    pub fn clear_submit_error(&mut self) {
        self.dismiss_error();
    }

    /// Restore defaults and clear touched, errors and submission state
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.drafts.clear();
        self.touched.clear();
        self.submission = SubmissionState::Idle;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = self.schema.validate(&self.values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::schemas;
    use std::cell::Cell;

    fn contact() -> FormController {
        FormController::new(schemas::CONTACT.clone())
    }

    fn filled_contact() -> FormController {
        let mut form = contact();
        form.set_value("name", "Jane Doe");
        form.set_value("email", "jane@example.com");
        form.set_value("message", "I found a colony near my office.");
        form
    }

    mod values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_uses_schema_defaults() {
            let form = contact();
            assert_eq!(form.values().text("name"), "");
            assert_eq!(form.submission(), &SubmissionState::Idle);
            assert!(!form.is_valid());
        }

        #[test]
        fn test_with_values_overlays_defaults() {
            let initial: FormValues = [("name", "Jane Doe")].into_iter().collect();
            let form = FormController::with_values(schemas::CONTACT.clone(), initial);
            assert_eq!(form.values().text("name"), "Jane Doe");
            assert_eq!(form.values().text("email"), "");
        }

        #[test]
        fn test_set_value_revalidates_without_touching() {
            let mut form = contact();
            form.set_value("email", "not-an-email");
            assert_eq!(form.errors().get("email"), Some("Please enter a valid email address"));
            assert!(!form.is_touched("email"));
            assert_eq!(form.field_error("email"), None);
        }

        #[test]
        fn test_handle_change_parses_numbers() {
            let mut form = FormController::new(schemas::COLONY_SUBMISSION.clone());
            form.handle_change("estimatedCats", "12");
            assert_eq!(form.value("estimatedCats"), Some(&FieldValue::Number(12.0)));

            form.handle_change("estimatedCats", "");
            assert_eq!(form.value("estimatedCats"), Some(&FieldValue::Null));
        }

        #[test]
        fn test_number_draft_keeps_typed_text() {
            let mut form = FormController::new(schemas::DEPOSIT_ASSISTANCE.clone());
            form.handle_change("depositAmount", "12.");
            assert_eq!(form.input_text("depositAmount"), "12.");
            assert_eq!(form.value("depositAmount"), Some(&FieldValue::Number(12.0)));

            form.set_value("depositAmount", 300);
            assert_eq!(form.input_text("depositAmount"), "300");
        }

        #[test]
        fn test_toggle_and_toggle_option() {
            let mut form = FormController::new(schemas::VOLUNTEER.clone());
            form.toggle("hasVehicle");
            assert!(form.values().flag("hasVehicle"));
            form.toggle("hasVehicle");
            assert!(!form.values().flag("hasVehicle"));

            form.toggle_option("roles", "transport");
            form.toggle_option("roles", "events");
            assert_eq!(form.values().list("roles"), ["transport", "events"]);
            form.toggle_option("roles", "transport");
            assert_eq!(form.values().list("roles"), ["events"]);
        }

        #[test]
        fn test_set_values_applies_all() {
            let mut form = contact();
            let partial: FormValues = [("name", "Jane Doe"), ("email", "jane@example.com")]
                .into_iter()
                .collect();
            form.set_values(partial);
            assert!(!form.errors().contains("name"));
            assert!(!form.errors().contains("email"));
        }
    }

    mod touched_gating {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_error_hidden_until_touched() {
            let mut form = contact();
            assert!(form.errors().contains("name"));
            assert_eq!(form.field_error("name"), None);
            assert!(!form.has_field_error("name"));

            form.handle_blur("name");
            assert_eq!(form.field_error("name"), Some("Name is required"));
            assert!(form.has_field_error("name"));
        }

        #[test]
        fn test_blur_does_not_change_values() {
            let mut form = filled_contact();
            let before = form.values().clone();
            form.set_touched("message");
            assert_eq!(form.values(), &before);
        }

        #[test]
        fn test_is_valid_is_fresh_after_change() {
            let mut form = filled_contact();
            assert!(form.is_valid());
            form.set_value("email", "");
            assert!(!form.is_valid());
            form.set_value("email", "jane@example.com");
            assert!(form.is_valid());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_submit_never_calls_handler() {
            let mut form = contact();
            let called = Cell::new(false);

            let outcome = form
                .handle_submit(|_| {
                    called.set(true);
                    async { Ok::<_, String>(()) }
                })
                .await;

            assert!(!called.get());
            assert_eq!(
                outcome,
                SubmitOutcome::Blocked(SubmitBlocked::Invalid { error_count: 3 })
            );
            assert_eq!(form.submission(), &SubmissionState::Idle);
            assert!(form.is_touched("name"));
            assert!(form.is_touched("reason"));
            assert_eq!(form.field_error("email"), Some("Email is required"));
        }

        #[tokio::test]
        async fn test_successful_submit_keeps_values() {
            let mut form = filled_contact();
            let outcome = form
                .handle_submit(|values| async move {
                    Ok::<_, String>(values.text("name").to_string())
                })
                .await;

            assert_eq!(outcome, SubmitOutcome::Succeeded("Jane Doe".to_string()));
            assert_eq!(form.submission(), &SubmissionState::Succeeded);
            assert_eq!(form.values().text("name"), "Jane Doe");
            assert_eq!(form.values().text("email"), "jane@example.com");
        }

        #[tokio::test]
        async fn test_failed_submit_then_dismiss_keeps_values() {
            let mut form = filled_contact();
            let outcome = form
                .handle_submit(|_| async { Err::<(), _>("Failed to send message") })
                .await;

            assert_eq!(outcome, SubmitOutcome::Failed("Failed to send message".to_string()));
            assert_eq!(form.submit_error(), Some("Failed to send message"));

            form.dismiss_error();
            assert_eq!(form.submission(), &SubmissionState::Idle);
            assert_eq!(form.values().text("name"), "Jane Doe");
        }

        #[tokio::test]
        async fn test_empty_error_message_falls_back() {
            let mut form = filled_contact();
            form.handle_submit(|_| async { Err::<(), _>("") }).await;
            assert_eq!(form.submit_error(), Some(GENERIC_SUBMIT_FAILURE));
        }

        #[tokio::test]
        async fn test_retry_after_failure_clears_banner() {
            let mut form = filled_contact();
            form.handle_submit(|_| async { Err::<(), _>("down") }).await;
            let outcome = form.handle_submit(|_| async { Ok::<_, String>(()) }).await;
            assert_eq!(outcome, SubmitOutcome::Succeeded(()));
        }

        #[test]
        fn test_begin_submit_refuses_while_in_flight() {
            let mut form = filled_contact();
            assert!(form.begin_submit().is_ok());
            assert!(form.is_submitting());
            assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
        }

        #[test]
        fn test_begin_submit_refuses_after_success() {
            let mut form = filled_contact();
            form.begin_submit().ok();
            form.complete_submit(Ok::<_, String>(()));
            assert!(form.is_succeeded());
            assert_eq!(form.begin_submit(), Err(SubmitBlocked::AlreadySubmitted));
        }

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = filled_contact();
            form.begin_submit().ok();
            form.complete_submit(Ok::<_, String>(()));

            form.reset();
            assert_eq!(form.values(), &schemas::CONTACT.defaults());
            assert!(!form.is_touched("name"));
            assert_eq!(form.submission(), &SubmissionState::Idle);
            assert_eq!(form.field_error("name"), None);
        }
    }
}
