//! User input and interaction handling.
//!
//! Thin wrappers around the dialoguer prompts the configuration resolver
//! asks with. Every wrapper maps straight onto one prompt kind so callers
//! never touch dialoguer types directly.

use crate::error::Result;
use dialoguer::{Confirm, Input, Select};

/// Prompt for a line of text, offering `default` when the user answers
/// with an empty line.
pub fn input_with_default(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?)
}

/// Prompt for a line of text that may be left empty.
pub fn input_allow_empty(prompt: &str) -> Result<String> {
    Ok(Input::new().with_prompt(prompt).allow_empty(true).interact_text()?)
}

/// Prompt for a line of text and re-ask until `validator` accepts it.
///
/// # Arguments
/// * `prompt` - Question shown to the user
/// * `default` - Value used when the user answers with an empty line
/// * `validator` - Returns the rejection reason for unacceptable input
pub fn validated_input<F>(prompt: &str, default: &str, validator: F) -> Result<String>
where
    F: FnMut(&String) -> std::result::Result<(), String>,
{
    Ok(Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(validator)
        .interact_text()?)
}

/// Ask a yes/no question.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
}

/// Ask the user to pick one of `items`; returns the chosen index.
pub fn select<T: ToString + std::fmt::Display>(prompt: &str, items: &[T], default: usize) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()?)
}
