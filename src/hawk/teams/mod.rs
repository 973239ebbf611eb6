//! Team module

mod api;
mod commands;
mod models;

pub use commands::run_team_command;
pub use models::{Team, TeamApplication, TeamsResponse};
