//! Top-level application state

use super::form_session::FormSession;
use crate::checklist::{self, ChecklistItem, ChecklistProgress, PetType};
use crate::city::CityConfig;
use crate::forms::FormKind;
use std::collections::VecDeque;

/// The screen being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Menu,
    Form,
    /// Confirmation after a successful submit
    Success,
    Checklist,
    CityInfo,
}

/// One row of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Form(FormKind),
    Checklist,
    CityInfo,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Form(kind) => kind.title(),
            MenuEntry::Checklist => "New Pet Checklist",
            MenuEntry::CityInfo => "Chapter Info",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuEntry::Form(kind) => kind.description(),
            MenuEntry::Checklist => "Track supplies and vet visits for a new cat or dog",
            MenuEntry::CityInfo => "Contact details and local resources",
        }
    }
}

/// What the server said about an accepted submission
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Receipt {
    pub title: String,
    pub message: String,
    pub reference: Option<String>,
    /// Payment page to open for donations
    pub checkout_url: Option<String>,
}

/// Checklist screen: loaded progress plus the highlighted row
#[derive(Debug, Clone)]
pub struct ChecklistView {
    pub progress: ChecklistProgress,
    pub selected: usize,
}

impl ChecklistView {
    pub fn new(progress: ChecklistProgress) -> Self {
        Self {
            progress,
            selected: 0,
        }
    }

    pub fn pet(&self) -> PetType {
        self.progress.pet()
    }

    pub fn selected_item(&self) -> Option<&'static ChecklistItem> {
        checklist::items(self.pet()).nth(self.selected)
    }

    pub fn select_next(&mut self) {
        let count = self.progress.total();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub city: &'static CityConfig,
    pub menu: Vec<MenuEntry>,
    pub menu_selected: usize,
    pub form: Option<FormSession>,
    pub receipt: Option<Receipt>,
    pub checklist: ChecklistView,
    pub status_message: Option<String>,
    /// Modal errors, shown one at a time
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(city: &'static CityConfig, checklist: ChecklistProgress) -> Self {
        let mut menu: Vec<MenuEntry> = FormKind::enabled(&city.features)
            .into_iter()
            .map(MenuEntry::Form)
            .collect();
        menu.push(MenuEntry::Checklist);
        menu.push(MenuEntry::CityInfo);

        Self {
            current_view: View::Menu,
            city,
            menu,
            menu_selected: 0,
            form: None,
            receipt: None,
            checklist: ChecklistView::new(checklist),
            status_message: None,
            errors: VecDeque::new(),
        }
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn selected_entry(&self) -> Option<MenuEntry> {
        self.menu.get(self.menu_selected).copied()
    }

    pub fn menu_next(&mut self) {
        if self.menu_selected + 1 < self.menu.len() {
            self.menu_selected += 1;
        }
    }

    pub fn menu_prev(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    pub fn open_form(&mut self, kind: FormKind) {
        tracing::debug!(form = ?kind, "Opening form");
        self.form = Some(FormSession::new(kind));
        self.receipt = None;
        self.status_message = None;
        self.current_view = View::Form;
    }

    /// Leave the form and discard what was entered
    pub fn close_form(&mut self) {
        self.form = None;
        self.current_view = View::Menu;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::{AUSTIN, CHARLOTTE};
    use pretty_assertions::assert_eq;

    fn state(city: &'static CityConfig) -> AppState {
        AppState::new(city, ChecklistProgress::new(PetType::Cat))
    }

    #[test]
    fn test_menu_lists_enabled_forms_then_tools() {
        let state = state(&AUSTIN);
        assert_eq!(state.menu.len(), FormKind::ALL.len() + 2);
        assert_eq!(state.menu[0], MenuEntry::Form(FormKind::Contact));
        assert_eq!(state.menu.last(), Some(&MenuEntry::CityInfo));
    }

    #[test]
    fn test_disabled_programs_are_hidden() {
        let state = state(&CHARLOTTE);
        let forms: Vec<FormKind> = state
            .menu
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Form(kind) => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(forms, FormKind::enabled(&CHARLOTTE.features));
    }

    #[test]
    fn test_menu_selection_is_clamped() {
        let mut state = state(&AUSTIN);
        state.menu_prev();
        assert_eq!(state.menu_selected, 0);
        for _ in 0..50 {
            state.menu_next();
        }
        assert_eq!(state.menu_selected, state.menu.len() - 1);
    }

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = state(&AUSTIN);
        assert!(!state.has_errors());
        state.push_error("first");
        state.push_error("second");
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_open_and_close_form() {
        let mut state = state(&AUSTIN);
        state.open_form(FormKind::Foster);
        assert_eq!(state.current_view, View::Form);
        assert_eq!(state.form.as_ref().map(|f| f.kind), Some(FormKind::Foster));
        state.close_form();
        assert_eq!(state.current_view, View::Menu);
        assert!(state.form.is_none());
    }

    #[test]
    fn test_checklist_cursor_bounds() {
        let mut view = ChecklistView::new(ChecklistProgress::new(PetType::Dog));
        view.select_prev();
        assert_eq!(view.selected, 0);
        for _ in 0..100 {
            view.select_next();
        }
        assert_eq!(view.selected, view.progress.total() - 1);
        assert!(view.selected_item().is_some());
    }
}
