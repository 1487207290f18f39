//! Schema-driven validation of form records

pub mod rules;
pub mod schema;
pub mod schemas;
pub mod value;

pub use rules::{is_email, is_phone, CrossFieldRule, Rule};
pub use schema::{Choice, ErrorMap, Field, InputKind, Schema, ValueKind};
pub use value::{format_number, FieldValue, FormValues};
