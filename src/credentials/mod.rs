//! Local credentials module
//!
//! Persists the API key, default organization and cached JWT in a single
//! owner-only JSON file.

mod commands;
mod models;
mod store;

pub use commands::{run_init_command, run_status_command};
pub use models::{Credentials, Token};
pub use store::CredentialStore;
