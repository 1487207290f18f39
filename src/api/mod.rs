//! Submission transport for the intake forms

pub mod client;
pub mod error;
pub mod routes;
pub mod traits;

pub use client::{HttpApiClient, DEFAULT_BASE_URL};
pub use error::SubmitError;
pub use routes::ApiRoute;
#[cfg(test)]
pub use traits::MockIntakeApi;
pub use traits::{IntakeApi, SubmitReceipt};
