use futures::future::{BoxFuture, FutureExt};
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::settings::SmtpConfig;
use crate::handlers::contact_dtos::ContactRequest;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build email: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Where genuine contact submissions end up.
pub trait ContactSink: Send + Sync {
    fn forward(&self, request: ContactRequest) -> BoxFuture<'_, Result<(), ForwardError>>;
}

/// Writes the submission to the log and nothing else.
pub struct LogForwarder;

impl ContactSink for LogForwarder {
    fn forward(&self, request: ContactRequest) -> BoxFuture<'_, Result<(), ForwardError>> {
        async move {
            tracing::info!(
                name = %request.name,
                email = %request.email,
                message = %request.message,
                "Contact form submission"
            );
            Ok(())
        }
        .boxed()
    }
}

/// Emails each submission to the site owner, with Reply-To set to the sender.
pub struct SmtpForwarder {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpForwarder {
    pub fn new(config: &SmtpConfig) -> Result<Self, ForwardError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(config.username.clone(), config.password.clone()))
            .build();
        Ok(Self {
            transport,
            from: config.from.parse()?,
            to: config.to.parse()?,
        })
    }

    fn compose(&self, request: &ContactRequest) -> Result<Message, ForwardError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(format!("Website enquiry from {}", request.name.trim()))
            .header(ContentType::TEXT_PLAIN);

        // A malformed sender address still gets delivered, just without Reply-To.
        match request.email.trim().parse::<Mailbox>() {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(e) => tracing::warn!("Not setting Reply-To for {:?}: {}", request.email, e),
        }

        let body = format!(
            "Name: {}\nEmail: {}\n\n{}\n",
            request.name.trim(),
            request.email.trim(),
            request.message
        );
        Ok(builder.body(body)?)
    }
}

impl ContactSink for SmtpForwarder {
    fn forward(&self, request: ContactRequest) -> BoxFuture<'_, Result<(), ForwardError>> {
        async move {
            let email = self.compose(&request)?;
            self.transport.send(email).await?;
            tracing::info!("Forwarded contact submission from {}", request.email);
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            username: "user".to_string(),
            password: "secret".to_string(),
            from: "site@example.com".to_string(),
            to: "finn@example.com".to_string(),
        }
    }

    fn request(email: &str) -> ContactRequest {
        ContactRequest {
            name: " Jo ".to_string(),
            email: email.to_string(),
            message: "Hello".to_string(),
            company: String::new(),
        }
    }

    #[tokio::test]
    async fn composes_plain_text_email_with_reply_to() {
        let forwarder = SmtpForwarder::new(&smtp_config()).expect("forwarder");
        let email = forwarder.compose(&request("jo@x.com")).expect("email");
        let raw = String::from_utf8(email.formatted()).expect("utf8");
        assert!(raw.contains("Subject: Website enquiry from Jo"));
        assert!(raw.contains("Reply-To: jo@x.com"));
        assert!(raw.contains("To: finn@example.com"));
        assert!(raw.contains("Hello"));
    }

    #[tokio::test]
    async fn malformed_sender_skips_reply_to() {
        let forwarder = SmtpForwarder::new(&smtp_config()).expect("forwarder");
        let email = forwarder.compose(&request("jo@@")).expect("email");
        let raw = String::from_utf8(email.formatted()).expect("utf8");
        assert!(!raw.contains("Reply-To"));
    }

    #[tokio::test]
    async fn rejects_invalid_owner_address() {
        let mut config = smtp_config();
        config.to = "not an address".to_string();
        assert!(matches!(
            SmtpForwarder::new(&config),
            Err(ForwardError::Address(_))
        ));
    }

    #[tokio::test]
    async fn log_forwarder_always_succeeds() {
        assert!(LogForwarder.forward(request("jo@x.com")).await.is_ok());
    }
}
