use super::models::ContactSubmission;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;
pub const PHONE_MIN_LENGTH: usize = 7;
pub const MESSAGE_MAX_LENGTH: usize = 1000;

pub const INVALID_NAME: &str = "Ism noto'g'ri";
pub const INVALID_PHONE: &str = "Telefon noto'g'ri";
pub const CONTACT_REQUIRED: &str = "Kontakt kerak";
pub const MESSAGE_TOO_LONG: &str = "Xabar juda uzun";

/// Check a normalized submission and collect every rule violation.
///
/// Rules are independent; an empty result means the submission is valid.
/// Lengths are counted in characters.
pub fn validate(submission: &ContactSubmission) -> Vec<String> {
    let mut errors = Vec::new();

    let name_length = submission.name.chars().count();
    if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&name_length) {
        errors.push(INVALID_NAME.to_string());
    }

    if submission.phone.chars().count() < PHONE_MIN_LENGTH {
        errors.push(INVALID_PHONE.to_string());
    }

    if submission.contact.is_empty() {
        errors.push(CONTACT_REQUIRED.to_string());
    }

    if submission.message.chars().count() > MESSAGE_MAX_LENGTH {
        errors.push(MESSAGE_TOO_LONG.to_string());
    }

    errors
}
