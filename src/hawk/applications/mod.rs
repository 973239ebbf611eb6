//! Application module

mod api;
mod commands;
mod models;

pub use commands::run_app_command;
pub use models::{Application, ApplicationsResponse};
