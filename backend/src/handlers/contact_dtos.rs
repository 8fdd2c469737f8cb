use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`. Every field defaults to empty so a partial
/// payload still reaches the honeypot check.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden honeypot input. Humans never see it, so anything here came from a bot.
    pub company: String,
}

impl ContactRequest {
    pub fn is_spam(&self) -> bool {
        !self.company.is_empty()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        if !self.email.contains('@') {
            return Err("Email address is invalid");
        }
        if self.message.trim().is_empty() {
            return Err("Message is required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub status: String,
}

impl ContactResponse {
    /// Same body for real and honeypot submissions.
    pub fn success() -> Self {
        Self { status: "success".to_string() }
    }
}
