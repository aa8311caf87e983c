//! Recipient validation
//!
//! Each channel accepts its own recipient format. The patterns are kept
//! separate per channel even where they look alike: Telegram handles reject
//! dots while Facebook/Instagram handles accept them.

use notiflow_types::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Optional `+`, then 10 to 15 digits
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").expect("phone pattern is valid"));

/// `@` followed by at least 3 word characters
static TELEGRAM_HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[\w\d_]{3,}$").expect("telegram pattern is valid"));

/// Optional `@`, then at least 3 word characters or dots
static SOCIAL_HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?[\w\.]{3,}$").expect("social handle pattern is valid"));

const PHONE_EXPECTED: &str = "a phone number of 10-15 digits with optional leading '+'";
const TELEGRAM_EXPECTED: &str =
    "an @handle of at least 3 word characters or a phone number of 10-15 digits";
const SOCIAL_EXPECTED: &str = "a handle of at least 3 letters, digits, underscores or dots";

fn invalid(channel: &'static str, expected: &'static str, recipient: &str) -> ValidationError {
    ValidationError::InvalidRecipient {
        channel,
        expected,
        recipient: recipient.to_string(),
    }
}

pub(crate) fn validate_phone(
    channel: &'static str,
    recipient: &str,
) -> Result<String, ValidationError> {
    if PHONE_RE.is_match(recipient) {
        Ok(recipient.to_string())
    } else {
        Err(invalid(channel, PHONE_EXPECTED, recipient))
    }
}

pub(crate) fn validate_telegram(
    channel: &'static str,
    recipient: &str,
) -> Result<String, ValidationError> {
    if TELEGRAM_HANDLE_RE.is_match(recipient) || PHONE_RE.is_match(recipient) {
        Ok(recipient.to_string())
    } else {
        Err(invalid(channel, TELEGRAM_EXPECTED, recipient))
    }
}

/// Validate a Facebook/Instagram handle and return it with a leading `@`
pub(crate) fn validate_social_handle(
    channel: &'static str,
    recipient: &str,
) -> Result<String, ValidationError> {
    if !SOCIAL_HANDLE_RE.is_match(recipient) {
        return Err(invalid(channel, SOCIAL_EXPECTED, recipient));
    }

    if recipient.starts_with('@') {
        Ok(recipient.to_string())
    } else {
        Ok(format!("@{}", recipient))
    }
}
