//! Application state module

mod app_state;
mod form_session;

pub use app_state::*;
pub use form_session::*;
