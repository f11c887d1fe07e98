//! Project name validation against package naming rules.
//!
//! A generated project's name ends up verbatim in its manifest, so it must
//! be acceptable to the package registry: lowercase, URL-safe, optionally
//! scoped, at most 214 characters.

use log::warn;
use regex::Regex;

/// Pattern a publishable package name must match, scope included
const NAME_PATTERN: &str = r"^(@[a-z0-9\-~][a-z0-9\-._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$";

/// Registry limit on the full name length, scope included
const MAX_NAME_LENGTH: usize = 214;

/// Checks a candidate project name against package naming rules.
///
/// # Arguments
/// * `name` - The candidate name, exactly as the user supplied it
///
/// # Returns
/// * `Ok(())` when the name is acceptable for a new package
/// * `Err(reason)` describing the first violated rule
pub fn validate_project_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if name.trim() != name {
        return Err("name cannot contain leading or trailing spaces".to_string());
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(format!("name cannot contain more than {MAX_NAME_LENGTH} characters"));
    }
    if name.starts_with('.') {
        return Err("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        return Err("name cannot start with an underscore".to_string());
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("name cannot contain capital letters".to_string());
    }

    match Regex::new(NAME_PATTERN) {
        Ok(re) if re.is_match(name) => Ok(()),
        Ok(_) => Err("name can only contain URL-friendly characters".to_string()),
        Err(err) => {
            // A broken built-in pattern is a programming error; reject the
            // name rather than let an unvalidated one through.
            warn!("Invalid name pattern '{NAME_PATTERN}': {err}");
            Err("name could not be validated".to_string())
        }
    }
}
