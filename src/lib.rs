//! PawsNClaws intake
//!
//! Shared form validation, submission and email code for the chapter intake
//! client (`pawsnclaws-tui`) and the intake API server
//! (`pawsnclaws-intake-server`).

pub mod api;
pub mod app;
pub mod checklist;
pub mod city;
pub mod config;
pub mod email;
pub mod forms;
pub mod platform;
pub mod sanitize;
pub mod server;
pub mod state;
pub mod ui;
pub mod validation;
