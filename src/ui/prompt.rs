//! Interactive prompts for `hawkop init`

use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::error::{HawkError, Result};

/// Prompt for a secret without echoing it. An empty answer is allowed.
pub fn prompt_secret(prompt: &str) -> Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map(|s| s.trim().to_string())
        .map_err(|e| HawkError::Config(format!("Failed to read input: {}", e)))
}

/// Prompt for a plain value. An empty answer is allowed.
pub fn prompt_text(prompt: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(|e| HawkError::Config(format!("Failed to read input: {}", e)))
}
