use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use crate::errors::TrackerError;

/// Prompt the user for free-form text input.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, TrackerError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(TrackerError::from)
}

/// Prompt for text where an empty answer is meaningful.
pub fn prompt_optional_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, TrackerError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(TrackerError::from)
}

/// Prompt for a password without echoing it.
pub fn prompt_password(theme: &ColorfulTheme, prompt: &str) -> Result<String, TrackerError> {
    Password::with_theme(theme)
        .with_prompt(prompt)
        .interact()
        .map_err(TrackerError::from)
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, TrackerError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(TrackerError::from)
}

/// Present a list of choices and return the selected index.
pub fn select_action(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[&str],
) -> Result<usize, TrackerError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(TrackerError::from)
}
