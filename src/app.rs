//! Application state and core logic

use crate::api::{IntakeApi, SubmitReceipt};
use crate::checklist::{ChecklistProgress, ChecklistStore, PetType};
use crate::city::CityConfig;
use crate::forms::{
    FormKind, SubmitBlocked, SubmitOutcome, VetFundStep, WizardError, WizardStep,
};
use crate::validation::FormValues;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{AppState, ChecklistView, MenuEntry, Receipt, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you! Your submission was received.";

/// Main application struct
pub struct App<A: IntakeApi> {
    /// Current application state
    pub state: AppState,
    /// Intake API client
    pub api: A,
    /// Where checklist progress is saved, if a data directory exists
    checklist_store: Option<ChecklistStore>,
    /// Values accepted by `begin_submit`, sent after the next draw
    pending_submit: Option<FormValues>,
    /// Whether the app should quit
    quit: bool,
}

impl<A: IntakeApi> App<A> {
    pub fn new(api: A, city: &'static CityConfig, checklist_store: Option<ChecklistStore>) -> Self {
        let progress = match &checklist_store {
            Some(store) => store.load(PetType::Cat),
            None => ChecklistProgress::new(PetType::Cat),
        };
        tracing::info!(city = city.slug, "Starting intake client");

        Self {
            state: AppState::new(city, progress),
            api,
            checklist_store,
            pending_submit: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submit is waiting for [`App::send_pending_submit`]
    pub fn has_pending_submit(&self) -> bool {
        self.pending_submit.is_some()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Menu => self.handle_menu_key(key),
            View::Form => self.handle_form_key(key),
            View::Success => self.handle_success_key(key),
            View::Checklist => self.handle_checklist_key(key),
            View::CityInfo => self.handle_city_info_key(key),
        }

        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.menu_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.menu_next(),
            KeyCode::Enter => {
                let Some(entry) = self.state.selected_entry() else {
                    return;
                };
                match entry {
                    MenuEntry::Form(kind) => self.state.open_form(kind),
                    MenuEntry::Checklist => self.state.current_view = View::Checklist,
                    MenuEntry::CityInfo => self.state.current_view = View::CityInfo,
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(session) = self.state.form.as_mut() else {
            self.state.current_view = View::Menu;
            return;
        };

        // A failed submit shows a banner until dismissed
        if session.controller.submit_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                session.controller.dismiss_error();
            }
            return;
        }

        // Nothing is editable while a request is out
        if session.controller.is_submitting() {
            return;
        }

        let shortcut = key.modifiers.contains(SHORTCUT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s') if shortcut => self.submit_or_continue(),
            KeyCode::Char('r') if shortcut => {
                session.reset();
                self.state.status_message = Some("Form cleared".to_string());
            }
            KeyCode::Esc => {
                self.state.close_form();
            }
            KeyCode::Tab => session.next_field(),
            KeyCode::BackTab => session.prev_field(),
            KeyCode::PageUp => {
                session.back();
            }
            KeyCode::Up => {
                if !session.move_option_cursor(false) {
                    session.prev_field();
                }
            }
            KeyCode::Down => {
                if !session.move_option_cursor(true) {
                    session.next_field();
                }
            }
            KeyCode::Left => {
                session.cycle_choice(false);
            }
            KeyCode::Right => {
                session.cycle_choice(true);
            }
            KeyCode::Enter => {
                if !session.newline() && !session.toggle_active() && !session.cycle_choice(true)
                {
                    session.next_field();
                }
            }
            KeyCode::Char(' ') => {
                if !session.toggle_active() {
                    session.input_char(' ');
                }
            }
            KeyCode::Char(c) if !shortcut => session.input_char(c),
            KeyCode::Backspace => session.backspace(),
            _ => {}
        }
    }

    /// Ctrl+S: next step on a wizard, submit on the last step or a single-page form.
    /// An accepted submit only marks the form as submitting; the request goes
    /// out from [`App::send_pending_submit`] once that state has been drawn.
    fn submit_or_continue(&mut self) {
        let Some(session) = self.state.form.as_mut() else {
            return;
        };

        if !session.is_final_step() {
            match session.advance() {
                Ok(()) => {
                    let step = session.wizard.map(|w| w.current().title()).unwrap_or_default();
                    self.state.status_message = Some(format!("Step: {step}"));
                }
                Err(WizardError::StepBlocked { fields, .. }) => {
                    self.state.status_message =
                        Some(format!("Please complete: {}", labels(session, &fields)));
                }
                Err(WizardError::AtLastStep) => {}
            }
            return;
        }

        if !session.can_submit() {
            for field in VetFundStep::consent_fields() {
                session.controller.set_touched(field);
            }
            self.state.status_message =
                Some("Please agree to the terms before submitting".to_string());
            return;
        }

        match session.controller.begin_submit() {
            Ok(values) => {
                self.pending_submit = Some(values);
                self.state.status_message = None;
            }
            Err(SubmitBlocked::Invalid { error_count }) => {
                focus_first_error(session);
                self.state.status_message = Some(format!(
                    "Please fix {error_count} field{} before submitting",
                    if error_count == 1 { "" } else { "s" }
                ));
            }
            Err(blocked) => {
                self.state.status_message = Some(blocked.to_string());
            }
        }
    }

    /// Send the values accepted by the last submit and record the outcome
    pub async fn send_pending_submit(&mut self) {
        let Some(values) = self.pending_submit.take() else {
            return;
        };
        let Some(session) = self.state.form.as_mut() else {
            return;
        };

        let kind = session.kind;
        let mut body = values.to_json();
        if let Some(object) = body.as_object_mut() {
            object.insert(
                "city".to_string(),
                serde_json::Value::from(self.state.city.slug),
            );
        }
        let result = self.api.submit(kind.route(), body).await;
        if let Err(err) = &result {
            tracing::debug!(form = ?kind, status = ?err.status(), "Intake API refused the submission");
            if let Some(errors) = err.field_errors() {
                let fields: Vec<&str> = errors.fields().collect();
                self.state.status_message =
                    Some(format!("Server flagged: {}", labels(session, &fields)));
            }
        }

        match session.controller.complete_submit(result) {
            SubmitOutcome::Succeeded(receipt) => {
                tracing::info!(form = ?kind, reference = ?receipt.reference, "Form submitted");
                self.state.receipt = Some(receipt_for(kind, receipt));
                self.state.current_view = View::Success;
            }
            SubmitOutcome::Failed(_) | SubmitOutcome::Blocked(_) => {}
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.receipt = None;
                self.state.close_form();
            }
            KeyCode::Char('n') => {
                if let Some(kind) = self.state.form.as_ref().map(|f| f.kind) {
                    self.state.open_form(kind);
                }
            }
            _ => {}
        }
    }

    fn handle_checklist_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.state.current_view = View::Menu,
            KeyCode::Up | KeyCode::Char('k') => self.state.checklist.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.checklist.select_next(),
            KeyCode::Tab => {
                let pet = self.state.checklist.pet().toggled();
                let progress = match &self.checklist_store {
                    Some(store) => store.load(pet),
                    None => ChecklistProgress::new(pet),
                };
                self.state.checklist = ChecklistView::new(progress);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let Some(item) = self.state.checklist.selected_item() else {
                    return;
                };
                self.state.checklist.progress.toggle(item.id);
                if let Some(store) = &self.checklist_store {
                    if let Err(e) = store.save(&self.state.checklist.progress) {
                        tracing::error!(error = %e, "Failed to save checklist");
                        self.push_error(format!("Could not save checklist: {e}"));
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_city_info_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            self.state.current_view = View::Menu;
        }
    }
}

fn receipt_for(kind: FormKind, receipt: SubmitReceipt) -> Receipt {
    Receipt {
        title: kind.title().to_string(),
        message: receipt
            .message
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        reference: receipt.reference,
        checkout_url: receipt.url,
    }
}

fn labels(session: &crate::state::FormSession, fields: &[&str]) -> String {
    fields
        .iter()
        .map(|name| {
            session
                .controller
                .schema()
                .get_field(name)
                .map_or(*name, |f| f.label)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Move the cursor to the first visible field with an error
fn focus_first_error(session: &mut crate::state::FormSession) {
    let first = session
        .visible_fields()
        .iter()
        .position(|name| session.controller.field_error(name).is_some());
    if let Some(index) = first {
        session.active_field = index;
        session.option_cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiRoute, MockIntakeApi, SubmitError};
    use crate::city::{AUSTIN, DENVER};
    use crate::forms::SubmissionState;
    use crate::validation::ErrorMap;
    use serde_json::json;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app(api: MockIntakeApi) -> App<MockIntakeApi> {
        App::new(api, &AUSTIN, None)
    }

    /// Ctrl+S followed by the send the event loop does after drawing
    async fn press_submit(app: &mut App<MockIntakeApi>) {
        app.handle_key(ctrl('s')).await.unwrap();
        app.send_pending_submit().await;
    }

    async fn type_text(app: &mut App<MockIntakeApi>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    fn fill_contact(app: &mut App<MockIntakeApi>) {
        let session = app.state.form.as_mut().unwrap();
        session.controller.set_value("name", "Jane Doe");
        session.controller.set_value("email", "jane@example.com");
        session
            .controller
            .set_value("message", "Is there a colony near Zilker Park?");
    }

    mod app_basic_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            let app = app(MockIntakeApi::new());
            assert!(!app.should_quit());
            assert_eq!(app.state.current_view, View::Menu);
        }

        #[test]
        fn test_menu_navigation_outside_runtime() {
            let mut app = app(MockIntakeApi::new());
            tokio_test::block_on(app.handle_key(key(KeyCode::Char('j')))).unwrap();
            tokio_test::block_on(app.handle_key(key(KeyCode::Char('j')))).unwrap();
            tokio_test::block_on(app.handle_key(key(KeyCode::Char('k')))).unwrap();
            assert_eq!(app.state.menu_selected, 1);
        }

        #[tokio::test]
        async fn test_q_quits_from_menu() {
            let mut app = app(MockIntakeApi::new());
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_error_dialog_is_modal() {
            let mut app = app(MockIntakeApi::new());
            app.push_error("Could not save checklist");
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_enter_opens_selected_form() {
            let mut app = app(MockIntakeApi::new());
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(
                app.state.form.as_ref().map(|f| f.kind),
                Some(FormKind::Volunteer)
            );
        }
    }

    mod form_editing_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_and_tab_marks_touched() {
            let mut app = app(MockIntakeApi::new());
            app.state.open_form(FormKind::Contact);
            type_text(&mut app, "J").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();

            let controller = &app.state.form.as_ref().unwrap().controller;
            assert_eq!(controller.values().text("name"), "J");
            assert_eq!(
                controller.field_error("name"),
                Some("Name must be at least 2 characters")
            );
        }

        #[tokio::test]
        async fn test_esc_discards_form() {
            let mut app = app(MockIntakeApi::new());
            app.state.open_form(FormKind::Contact);
            type_text(&mut app, "Jane").await;
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Menu);
            assert!(app.state.form.is_none());
        }

        #[tokio::test]
        async fn test_ctrl_r_resets_values() {
            let mut app = app(MockIntakeApi::new());
            app.state.open_form(FormKind::Contact);
            type_text(&mut app, "Jane").await;
            app.handle_key(ctrl('r')).await.unwrap();
            let controller = &app.state.form.as_ref().unwrap().controller;
            assert_eq!(controller.values().text("name"), "");
            assert!(!controller.is_touched("name"));
        }
    }

    mod submission_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_posts_values_with_city() {
            let mut api = MockIntakeApi::new();
            api.expect_submit()
                .withf(|route, body| {
                    *route == ApiRoute::Contact
                        && body["city"] == json!("austin")
                        && body["email"] == json!("jane@example.com")
                })
                .times(1)
                .returning(|_, _| {
                    Ok(SubmitReceipt {
                        message: Some("Message received".to_string()),
                        url: None,
                        reference: Some("ref-1".to_string()),
                    })
                });

            let mut app = app(api);
            app.state.open_form(FormKind::Contact);
            fill_contact(&mut app);
            press_submit(&mut app).await;

            assert_eq!(app.state.current_view, View::Success);
            assert_eq!(
                app.state.receipt,
                Some(Receipt {
                    title: "Contact Us".to_string(),
                    message: "Message received".to_string(),
                    reference: Some("ref-1".to_string()),
                    checkout_url: None,
                })
            );
        }

        #[tokio::test]
        async fn test_chapter_slug_follows_selected_city() {
            let mut api = MockIntakeApi::new();
            api.expect_submit()
                .withf(|_, body| body["city"] == json!("denver"))
                .times(1)
                .returning(|_, _| Ok(SubmitReceipt::default()));

            let mut app = App::new(api, &DENVER, None);
            app.state.open_form(FormKind::Contact);
            fill_contact(&mut app);
            press_submit(&mut app).await;
            assert_eq!(
                app.state.receipt.as_ref().map(|r| r.message.as_str()),
                Some(DEFAULT_SUCCESS_MESSAGE)
            );
        }

        #[tokio::test]
        async fn test_submitting_state_is_drawn_before_the_request() {
            let mut api = MockIntakeApi::new();
            api.expect_submit()
                .times(1)
                .returning(|_, _| Ok(SubmitReceipt::default()));

            let mut app = app(api);
            app.state.open_form(FormKind::Contact);
            fill_contact(&mut app);
            app.handle_key(ctrl('s')).await.unwrap();

            assert!(app.has_pending_submit());
            let session = app.state.form.as_ref().unwrap();
            assert_eq!(session.controller.submission(), &SubmissionState::Submitting);

            // Keys are ignored until the request settles
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            app.handle_key(ctrl('s')).await.unwrap();
            let session = app.state.form.as_ref().unwrap();
            assert_eq!(session.controller.values().text("name"), "Jane Doe");

            app.send_pending_submit().await;
            assert!(!app.has_pending_submit());
            assert_eq!(app.state.current_view, View::Success);
        }

        #[tokio::test]
        async fn test_invalid_form_is_not_sent() {
            let mut api = MockIntakeApi::new();
            api.expect_submit().times(0);

            let mut app = app(api);
            app.state.open_form(FormKind::Contact);
            app.state
                .form
                .as_mut()
                .unwrap()
                .controller
                .set_value("name", "Jane Doe");
            app.state.form.as_mut().unwrap().active_field = 3;
            press_submit(&mut app).await;

            let session = app.state.form.as_ref().unwrap();
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(session.active_field_name(), Some("email"));
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Please fix 2 fields before submitting")
            );
        }

        #[tokio::test]
        async fn test_failure_banner_keeps_values() {
            let mut api = MockIntakeApi::new();
            api.expect_submit().times(1).returning(|_, _| {
                Err(SubmitError::Rejected {
                    status: 500,
                    message: "Failed to send message".to_string(),
                    field_errors: ErrorMap::new(),
                })
            });

            let mut app = app(api);
            app.state.open_form(FormKind::Contact);
            fill_contact(&mut app);
            press_submit(&mut app).await;

            let controller = &app.state.form.as_ref().unwrap().controller;
            assert_eq!(controller.submit_error(), Some("Failed to send message"));

            // Typing is swallowed while the banner is up
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            let controller = &app.state.form.as_ref().unwrap().controller;
            assert_eq!(controller.submission(), &SubmissionState::Idle);
            assert_eq!(controller.values().text("name"), "Jane Doe");
        }

        #[tokio::test]
        async fn test_server_field_errors_are_listed() {
            let mut api = MockIntakeApi::new();
            api.expect_submit().times(1).returning(|_, _| {
                let mut field_errors = ErrorMap::new();
                field_errors.insert("email", "Invalid email address");
                Err(SubmitError::Rejected {
                    status: 400,
                    message: "Please fix the highlighted fields".to_string(),
                    field_errors,
                })
            });

            let mut app = app(api);
            app.state.open_form(FormKind::Contact);
            fill_contact(&mut app);
            press_submit(&mut app).await;

            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Server flagged: Email")
            );
            let controller = &app.state.form.as_ref().unwrap().controller;
            assert_eq!(
                controller.submit_error(),
                Some("Please fix the highlighted fields")
            );
        }

        #[tokio::test]
        async fn test_success_then_submit_another() {
            let mut api = MockIntakeApi::new();
            api.expect_submit()
                .returning(|_, _| Ok(SubmitReceipt::default()));

            let mut app = app(api);
            app.state.open_form(FormKind::Contact);
            fill_contact(&mut app);
            press_submit(&mut app).await;
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();

            assert_eq!(app.state.current_view, View::Form);
            let controller = &app.state.form.as_ref().unwrap().controller;
            assert_eq!(controller.values().text("name"), "");
        }
    }

    mod wizard_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        fn fill_all_steps(app: &mut App<MockIntakeApi>) {
            let controller = &mut app.state.form.as_mut().unwrap().controller;
            controller.set_value("name", "Jane Doe");
            controller.set_value("email", "jane@example.com");
            controller.set_value("phone", "512-555-0100");
            controller.set_value("petName", "Whiskers");
            controller.set_value("vetClinic", "Emancipet");
            controller.set_value("diagnosis", "Broken leg");
            controller.set_value("estimatedCost", 300);
            controller.set_value(
                "situation",
                "Lost my job last month and cannot cover surgery.",
            );
        }

        #[tokio::test]
        async fn test_blocked_step_lists_fields() {
            let mut app = app(MockIntakeApi::new());
            app.state.open_form(FormKind::VetFund);
            press_submit(&mut app).await;

            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Please complete: Name, Email, Phone")
            );
        }

        #[tokio::test]
        async fn test_consent_required_on_last_step() {
            let mut api = MockIntakeApi::new();
            api.expect_submit()
                .withf(|route, body| {
                    *route == ApiRoute::VetFund && body["agreedToTerms"] == json!(true)
                })
                .times(1)
                .returning(|_, _| Ok(SubmitReceipt::default()));

            let mut app = app(api);
            app.state.open_form(FormKind::VetFund);
            fill_all_steps(&mut app);
            press_submit(&mut app).await;
            press_submit(&mut app).await;
            assert_eq!(
                app.state.form.as_ref().and_then(|f| f.wizard).map(|w| w.current()),
                Some(VetFundStep::SituationAndSubmit)
            );

            press_submit(&mut app).await;
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Please agree to the terms before submitting")
            );

            app.state
                .form
                .as_mut()
                .unwrap()
                .controller
                .set_value("agreedToTerms", true);
            press_submit(&mut app).await;
            assert_eq!(app.state.current_view, View::Success);
        }

        #[tokio::test]
        async fn test_page_up_goes_back() {
            let mut app = app(MockIntakeApi::new());
            app.state.open_form(FormKind::VetFund);
            fill_all_steps(&mut app);
            press_submit(&mut app).await;
            app.handle_key(key(KeyCode::PageUp)).await.unwrap();
            assert_eq!(
                app.state.form.as_ref().and_then(|f| f.wizard).map(|w| w.current()),
                Some(VetFundStep::ContactInfo)
            );
        }
    }

    mod checklist_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_space_toggles_and_saves() {
            let dir = tempfile::tempdir().unwrap();
            let store = ChecklistStore::new(dir.path());
            let mut app = App::new(MockIntakeApi::new(), &AUSTIN, Some(store.clone()));
            app.state.current_view = View::Checklist;

            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(app.state.checklist.progress.checked_count(), 1);
            assert_eq!(store.load(PetType::Cat).checked_count(), 1);
        }

        #[tokio::test]
        async fn test_tab_switches_pet() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = App::new(
                MockIntakeApi::new(),
                &AUSTIN,
                Some(ChecklistStore::new(dir.path())),
            );
            app.state.current_view = View::Checklist;
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();

            assert_eq!(app.state.checklist.pet(), PetType::Dog);
            assert_eq!(app.state.checklist.selected, 0);
        }

        #[tokio::test]
        async fn test_esc_returns_to_menu() {
            let mut app = app(MockIntakeApi::new());
            app.state.current_view = View::Checklist;
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Menu);
        }
    }
}
