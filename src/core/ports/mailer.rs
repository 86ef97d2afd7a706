//! Notification delivery port

use crate::core::error::DeliveryError;
use crate::core::models::OutgoingMail;

/// Sends rendered messages
///
/// With `dryrun` set, implementations go through the full message assembly
/// but do not transmit anything.
pub trait Mailer: Send + Sync {
    /// Send one message
    fn send(&self, mail: &OutgoingMail, dryrun: bool) -> Result<(), DeliveryError>;
}
