use serde::{Deserialize, Serialize};

use super::normalize::{normalize_contact, normalize_message, normalize_phone, sanitize_text};

/// Raw contact form fields as received; missing fields are empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub contact: String,
    pub message: String,
}

/// A normalized submission, ready for validation and delivery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub contact: String,
    pub message: String,
}

impl ContactForm {
    /// Apply the field normalizers
    pub fn normalize(&self) -> ContactSubmission {
        ContactSubmission {
            name: sanitize_text(&self.name),
            phone: normalize_phone(&self.phone),
            contact: normalize_contact(&self.contact),
            message: normalize_message(&self.message),
        }
    }
}

impl From<ContactForm> for ContactSubmission {
    fn from(form: ContactForm) -> Self {
        form.normalize()
    }
}
