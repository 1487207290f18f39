//! Form rendering module
//!
//! - `field_renderer`: one widget per input kind
//! - `form_view`: the form screen
//! - `wizard_view`: step indicator for multi-step forms

pub mod field_renderer;
pub mod form_view;
pub mod wizard_view;

pub use form_view::draw_form;
