use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company: String,
}

/// Kept apart only for logging. The form treats every variant the same way.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for ContactError {
    fn from(e: gloo_net::Error) -> Self {
        ContactError::Network(e.to_string())
    }
}

pub fn contact_url() -> String {
    format!("{}/api/contact", config::get_backend_url())
}

pub async fn send_contact(request: &ContactRequest) -> Result<(), ContactError> {
    let response = Request::post(&contact_url())
        .json(request)?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_all_four_fields() {
        let request = ContactRequest {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            message: "Hello".to_string(),
            company: String::new(),
        };
        let value = serde_json::to_value(&request).expect("json");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Jo",
                "email": "jo@x.com",
                "message": "Hello",
                "company": ""
            })
        );
    }

    #[test]
    fn contact_url_targets_api_path() {
        assert!(contact_url().ends_with("/api/contact"));
    }
}
