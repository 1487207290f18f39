//! UI module for rendering the TUI

mod checklist_view;
mod city_panel;
pub mod components;
pub mod forms;
mod layout;
mod menu;
mod success;

use crate::api::IntakeApi;
use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw<A: IntakeApi>(frame: &mut Frame, app: &App<A>) {
    let state = &app.state;
    let (sidebar_area, main_area) = layout::create_layout(frame.area());

    layout::draw_sidebar(frame, sidebar_area, state);

    match state.current_view {
        View::Menu => menu::draw(frame, main_area, state),
        View::Form => forms::draw_form(frame, main_area, state),
        View::Success => success::draw(frame, main_area, state),
        View::Checklist => checklist_view::draw(frame, main_area, state),
        View::CityInfo => city_panel::draw(frame, main_area, state.city),
    }

    layout::draw_status_bar(frame, state);

    // Modal errors sit on top of everything
    if let Some(error) = state.current_error() {
        render_error_dialog(frame, error);
    }
}
