//! Delivery orchestration
//!
//! Wraps each prepared message in the common envelope, adds the escalation
//! target to the copy list and hands it to the mailer.

use std::collections::BTreeSet;

use log::info;

use crate::core::error::{NagError, TemplateError};
use crate::core::models::{OutgoingMail, PreparedMessage};
use crate::core::ports::{EnvelopeContext, Mailer, TemplateRenderer};

/// Default sender address
pub const DEFAULT_FROM: &str = "release-mgmt@mozilla.com";

/// Shared delivery settings, constant for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySettings {
    /// Sender address
    pub from: String,
    /// Addresses copied on every message
    pub cc: BTreeSet<String>,
    /// Master switch; when false nothing is rendered or sent
    pub send: bool,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM.to_string(),
            cc: BTreeSet::new(),
            send: true,
        }
    }
}

impl DeliverySettings {
    /// Copy list for one message: shared defaults plus the escalation target
    #[must_use]
    pub fn cc_for(&self, target: &str) -> Vec<String> {
        let mut cc = self.cc.clone();
        cc.insert(target.to_string());
        cc.into_iter().collect()
    }

    /// Assemble the outgoing mail for a prepared message
    #[must_use]
    pub fn address(&self, message: &PreparedMessage, subject: &str, body_html: String) -> OutgoingMail {
        let mut to = message.recipients.clone();
        to.sort();
        to.dedup();

        OutgoingMail {
            from: self.from.clone(),
            to,
            cc: self.cc_for(&message.target),
            subject: subject.to_string(),
            body_html,
        }
    }
}

/// Send every prepared message
///
/// Returns the number of messages handed to the mailer. Does nothing when
/// `settings.send` is false. Every envelope is rendered before the first
/// message goes out, so a template failure sends nothing. The first delivery
/// failure stops the loop.
pub fn send_all<R, M>(
    messages: &[PreparedMessage],
    settings: &DeliverySettings,
    renderer: &R,
    mailer: &M,
    title: &str,
    dryrun: bool,
) -> Result<usize, NagError>
where
    R: TemplateRenderer + ?Sized,
    M: Mailer + ?Sized,
{
    if !settings.send {
        info!("sending disabled, {} message(s) not sent", messages.len());
        return Ok(0);
    }

    let mails = messages
        .iter()
        .map(|message| {
            let body = renderer.render_envelope(&EnvelopeContext {
                message: message.body.clone(),
                query_url: None,
                has_table: true,
            })?;
            Ok(settings.address(message, title, body))
        })
        .collect::<Result<Vec<_>, TemplateError>>()?;

    let mut sent = 0;
    for mail in &mails {
        mailer.send(mail, dryrun)?;
        info!(
            "{} nag to {} (cc {})",
            if dryrun { "dry-run" } else { "sent" },
            mail.to.join(", "),
            mail.cc.join(", ")
        );
        sent += 1;
    }

    Ok(sent)
}
