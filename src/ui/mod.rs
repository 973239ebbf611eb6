//! UI utilities for terminal output
//!
//! Progress spinners for API calls and the prompts used by `hawkop init`.

mod prompt;
mod spinner;

pub use prompt::{prompt_secret, prompt_text};
pub use spinner::{create_spinner, finish_spinner};
