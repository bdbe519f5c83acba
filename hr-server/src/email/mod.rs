//! Contact form relay
//!
//! Sends contact messages through AWS SES when a recipient is configured,
//! otherwise only logs them.

use aws_sdk_sesv2::Client as SesClient;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use shared::models::ContactRequest;

use crate::BoxError;
use crate::core::Config;

#[derive(Clone)]
enum Relay {
    Ses { client: SesClient, to: String },
    Log,
}

/// Outbound email for the contact form
#[derive(Clone)]
pub struct EmailService {
    relay: Relay,
    from: String,
}

impl EmailService {
    /// SES relay when `CONTACT_EMAIL_TO` is set, log-only otherwise
    pub async fn from_config(config: &Config) -> Self {
        let Some(to) = config.contact_email_to.clone() else {
            return Self::log_only(&config.contact_email_from);
        };

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = match &config.ses_region {
            Some(region) => {
                let ses_config = aws_config
                    .to_builder()
                    .region(aws_config::Region::new(region.clone()))
                    .build();
                SesClient::new(&ses_config)
            }
            None => SesClient::new(&aws_config),
        };

        tracing::info!(to = %to, "Contact relay: SES");
        Self {
            relay: Relay::Ses { client, to },
            from: config.contact_email_from.clone(),
        }
    }

    pub fn log_only(from: &str) -> Self {
        Self {
            relay: Relay::Log,
            from: from.to_string(),
        }
    }

    pub fn is_log_only(&self) -> bool {
        matches!(self.relay, Relay::Log)
    }

    pub async fn send_contact(&self, req: &ContactRequest) -> Result<(), BoxError> {
        let (client, to) = match &self.relay {
            Relay::Ses { client, to } => (client, to),
            Relay::Log => {
                tracing::info!(
                    name = %req.name,
                    email = %req.email,
                    subject = %req.subject,
                    "Contact message received (log-only relay)"
                );
                return Ok(());
            }
        };

        let subject = Content::builder()
            .data(format!("Contact form: {}", req.subject))
            .build()?;
        let body = Body::builder()
            .text(Content::builder().data(contact_body(req)).build()?)
            .build();
        let message = Message::builder().subject(subject).body(body).build();

        client
            .send_email()
            .from_email_address(&self.from)
            .reply_to_addresses(&req.email)
            .destination(Destination::builder().to_addresses(to).build())
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await?;

        tracing::info!(to = %to, subject = %req.subject, "Contact message relayed");
        Ok(())
    }
}

fn contact_body(req: &ContactRequest) -> String {
    format!(
        "Name: {}\nEmail: {}\nSubject: {}\n\n{}",
        req.name, req.email, req.subject, req.message
    )
}
