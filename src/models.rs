use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// Contact form payload - one form covers the contact page and the footer
// newsletter opt-in
#[derive(Deserialize, Serialize, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub newsletter: bool,
}

impl ContactForm {
    /// Check the payload and return the message-catalog key of the first
    /// violation, so the handler can answer in the request's locale.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("contact.form.nameRequired");
        }
        if !email_looks_valid(self.email.trim()) {
            return Err("contact.form.invalidEmail");
        }
        if self.message.trim().is_empty() {
            return Err("contact.form.messageRequired");
        }
        Ok(())
    }
}

// Acknowledgement returned for an accepted submission
#[derive(Deserialize, Serialize, Clone)]
pub struct ContactResponse {
    pub reference: String,
    pub message: String,
    pub newsletter: bool,
}

// Plausibility check only - delivery bounces handle the rest
fn email_looks_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

// Create a submission reference (hash of sender + receipt time)
pub fn submission_reference(email: &str, received_at: &DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email);
    hasher.update(received_at.to_rfc3339());
    let digest = format!("{:x}", hasher.finalize());
    digest[..12].to_string()
}
