//! Editing state for the form currently on screen

use crate::forms::{FormController, FormKind, VetFundStep, Wizard, WizardError, WizardStep};
use crate::validation::{Field, FieldValue, InputKind};

/// A form being filled in. Wraps the controller with cursor state.
#[derive(Debug, Clone)]
pub struct FormSession {
    pub kind: FormKind,
    pub controller: FormController,
    /// Present for multi-step forms
    pub wizard: Option<Wizard<VetFundStep>>,
    /// Index into `visible_fields()`
    pub active_field: usize,
    /// Highlighted option of a multi-select field
    pub option_cursor: usize,
}

impl FormSession {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            controller: FormController::new(kind.schema()),
            wizard: kind.is_wizard().then(Wizard::new),
            active_field: 0,
            option_cursor: 0,
        }
    }

    /// Fields shown for the current step, or the whole form
    pub fn visible_fields(&self) -> Vec<&'static str> {
        match &self.wizard {
            Some(wizard) => wizard.current().fields().to_vec(),
            None => self.controller.schema().field_names().collect(),
        }
    }

    pub fn active_field_name(&self) -> Option<&'static str> {
        self.visible_fields().get(self.active_field).copied()
    }

    pub fn active_field_def(&self) -> Option<&Field> {
        let name = self.active_field_name()?;
        self.controller.schema().get_field(name)
    }

    fn active_input(&self) -> Option<InputKind> {
        self.active_field_def().map(|f| f.input)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_input().is_some_and(|input| input.is_multiline())
    }

    /// Leaving a field marks it touched
    fn blur_active(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.controller.handle_blur(name);
        }
    }

    pub fn next_field(&mut self) {
        let count = self.visible_fields().len();
        if count == 0 {
            return;
        }
        self.blur_active();
        self.active_field = (self.active_field + 1) % count;
        self.option_cursor = 0;
    }

    pub fn prev_field(&mut self) {
        let count = self.visible_fields().len();
        if count == 0 {
            return;
        }
        self.blur_active();
        self.active_field = if self.active_field == 0 {
            count - 1
        } else {
            self.active_field - 1
        };
        self.option_cursor = 0;
    }

    fn accepts_text(&self) -> bool {
        matches!(
            self.active_input(),
            Some(
                InputKind::Text
                    | InputKind::TextArea
                    | InputKind::Email
                    | InputKind::Phone
                    | InputKind::Number
            )
        )
    }

    pub fn input_char(&mut self, c: char) {
        if !self.accepts_text() {
            return;
        }
        if let Some(name) = self.active_field_name() {
            let mut text = self.controller.input_text(name);
            text.push(c);
            self.controller.handle_change(name, &text);
        }
    }

    pub fn backspace(&mut self) {
        if !self.accepts_text() {
            return;
        }
        if let Some(name) = self.active_field_name() {
            let mut text = self.controller.input_text(name);
            text.pop();
            self.controller.handle_change(name, &text);
        }
    }

    /// Newline in a textarea. Returns false for other inputs.
    pub fn newline(&mut self) -> bool {
        if !self.is_active_field_multiline() {
            return false;
        }
        self.input_char('\n');
        true
    }

    /// Space on a checkbox or on the highlighted multi-select option
    pub fn toggle_active(&mut self) -> bool {
        let Some(name) = self.active_field_name() else {
            return false;
        };
        match self.active_input() {
            Some(InputKind::Checkbox) => {
                self.controller.toggle(name);
                true
            }
            Some(InputKind::MultiSelect(choices)) => {
                if let Some((value, _)) = choices.get(self.option_cursor) {
                    self.controller.toggle_option(name, value);
                }
                true
            }
            _ => false,
        }
    }

    /// Step a select or radio field to the next/previous option
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        let Some(name) = self.active_field_name() else {
            return false;
        };
        let choices = match self.active_input() {
            Some(InputKind::Select(choices) | InputKind::Radio(choices)) => choices,
            _ => return false,
        };
        if choices.is_empty() {
            return false;
        }

        let current = self.controller.values().text(name);
        let position = choices.iter().position(|(value, _)| *value == current);
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => choices.len() - 1,
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(0), false) => choices.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.controller
            .set_value(name, FieldValue::Text(choices[next].0.to_string()));
        true
    }

    /// Move the multi-select highlight. Returns false when the active field has no options.
    pub fn move_option_cursor(&mut self, down: bool) -> bool {
        let Some(InputKind::MultiSelect(choices)) = self.active_input() else {
            return false;
        };
        if choices.is_empty() {
            return false;
        }
        self.option_cursor = if down {
            (self.option_cursor + 1).min(choices.len() - 1)
        } else {
            self.option_cursor.saturating_sub(1)
        };
        true
    }

    pub fn is_final_step(&self) -> bool {
        self.wizard.as_ref().is_none_or(|w| w.is_last())
    }

    /// Continue to the next wizard step
    pub fn advance(&mut self) -> Result<(), WizardError> {
        let Some(wizard) = self.wizard.as_mut() else {
            return Err(WizardError::AtLastStep);
        };
        wizard.advance(&mut self.controller)?;
        self.active_field = 0;
        self.option_cursor = 0;
        Ok(())
    }

    pub fn back(&mut self) -> bool {
        let moved = self.wizard.as_mut().is_some_and(|w| w.back());
        if moved {
            self.active_field = 0;
            self.option_cursor = 0;
        }
        moved
    }

    /// Consent gate of multi-step forms. Always true for single-page forms.
    pub fn can_submit(&self) -> bool {
        self.wizard
            .as_ref()
            .is_none_or(|w| w.can_submit(self.controller.values()))
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.reset();
        }
        self.active_field = 0;
        self.option_cursor = 0;
    }
}
