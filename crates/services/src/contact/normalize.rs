//! Canonicalization of raw form fields prior to validation.
//!
//! Every normalizer is idempotent: applying it to its own output returns
//! the same value.

/// Maximum length of a normalized phone number, including the leading `+`
pub const MAX_PHONE_LENGTH: usize = 16;

/// Messages longer than this are cut, not rejected
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Trim surrounding whitespace
pub fn sanitize_text(value: &str) -> String {
    value.trim().to_string()
}

/// Best-effort phone canonicalization: a single leading `+` followed by the
/// digits (and any interior `+`) of the input, capped at [`MAX_PHONE_LENGTH`].
///
/// This is not E.164 validation; `"90-12-34"` becomes `"+901234"`.
pub fn normalize_phone(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    let mut phone = String::with_capacity(kept.len() + 1);
    phone.push('+');
    phone.push_str(kept.trim_start_matches('+'));

    // only ASCII remains, so byte truncation is char-safe
    phone.truncate(MAX_PHONE_LENGTH);
    phone
}

/// Emails (containing both `@` and `.`) pass through unchanged; anything
/// else is treated as a messenger handle with exactly one leading `@`.
pub fn normalize_contact(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    if value.contains('@') && value.contains('.') {
        return value.to_string();
    }

    if value.starts_with('@') {
        return value.to_string();
    }

    format!("@{}", value.replace('@', ""))
}

/// Trim and cut to [`MAX_MESSAGE_LENGTH`] characters
pub fn normalize_message(raw: &str) -> String {
    raw.trim().chars().take(MAX_MESSAGE_LENGTH).collect()
}
