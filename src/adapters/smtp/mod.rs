//! SMTP mailer built on lettre
//!
//! Dry runs assemble the complete message (so address and header errors
//! still surface) and log it instead of sending.

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use log::{debug, info};

use crate::config::SmtpConfig;
use crate::core::error::DeliveryError;
use crate::core::models::OutgoingMail;
use crate::core::ports::Mailer;

/// Mailer that talks to an SMTP relay
pub struct SmtpMailer {
    transport: Option<SmtpTransport>,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("configured", &self.transport.is_some())
            .finish()
    }
}

impl SmtpMailer {
    /// Mailer without a transport; only dry runs succeed
    #[must_use]
    pub const fn offline() -> Self {
        Self { transport: None }
    }

    /// Connect settings for a relay
    ///
    /// The password is read from the environment variable named in the
    /// config, never from the config file itself. A login name without that
    /// variable set is an error.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, DeliveryError> {
        let relay = if config.starttls {
            SmtpTransport::starttls_relay(&config.host)
        } else {
            SmtpTransport::relay(&config.host)
        };

        let mut builder =
            relay.map_err(|e| DeliveryError::Transport(e.to_string()))?.port(config.port);
        if let Some(username) = &config.username {
            let password = std::env::var(&config.password_env)
                .map_err(|_| DeliveryError::MissingPassword(config.password_env.clone()))?;
            builder = builder.credentials(Credentials::new(username.clone(), password));
        }

        Ok(Self {
            transport: Some(builder.build()),
        })
    }

    /// Assemble the lettre message
    pub fn build_message(mail: &OutgoingMail) -> Result<Message, DeliveryError> {
        let mut builder = Message::builder().from(parse_mailbox(&mail.from)?).subject(&mail.subject);
        for to in &mail.to {
            builder = builder.to(parse_mailbox(to)?);
        }
        for cc in &mail.cc {
            builder = builder.cc(parse_mailbox(cc)?);
        }

        builder
            .header(ContentType::TEXT_HTML)
            .body(mail.body_html.clone())
            .map_err(|e| DeliveryError::Build(e.to_string()))
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, mail: &OutgoingMail, dryrun: bool) -> Result<(), DeliveryError> {
        let message = Self::build_message(mail)?;

        if dryrun {
            info!("[dry-run] would send \"{}\" to {}", mail.subject, mail.to.join(", "));
            debug!("[dry-run] cc: {}\n{}", mail.cc.join(", "), mail.body_html);
            return Ok(());
        }

        let transport = self.transport.as_ref().ok_or(DeliveryError::NotConfigured)?;
        transport.send(&message).map_err(|e| DeliveryError::Transport(e.to_string()))?;
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address.parse().map_err(|e: lettre::address::AddressError| DeliveryError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}
