//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Validate nickname
pub fn validate_nickname(nickname: &str) -> Result<(), String> {
    if nickname.len() < 3 {
        return Err("Nickname must be at least 3 characters long".to_string());
    }

    static NICKNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = NICKNAME_REGEX
        .get_or_init(|| Regex::new(r"^[\w-]+$").expect("Failed to compile nickname regex"));

    if !regex.is_match(nickname) {
        return Err("Nickname can only contain word characters and hyphens".to_string());
    }

    Ok(())
}

/// Validate a profile URL
///
/// Optional fields skip this entirely when absent; a present value must
/// match the pattern. No network check, no normalization of the value.
pub fn validate_url(url: &str) -> Result<(), String> {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = URL_REGEX.get_or_init(|| {
        Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("Failed to compile URL regex")
    });

    if !regex.is_match(url) {
        return Err("Invalid URL format".to_string());
    }

    Ok(())
}
