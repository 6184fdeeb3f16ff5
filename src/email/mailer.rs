//! Mail transports.
//!
//! Delivery itself belongs to the host. [`LogMailer`] records each email as a
//! structured log event and [`OutboxMailer`] keeps them in memory.

use super::error::MailError;
use super::message::Email;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::info;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<(), MailError>;
}

/// Writes every email to the log instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        info!(to = %email.to, subject = %email.subject, "Email sent");
        tracing::debug!(body = ?email.body, "Email body");
        Ok(())
    }
}

/// Collects sent emails so they can be inspected later.
#[derive(Debug, Clone, Default)]
pub struct OutboxMailer {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl OutboxMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far, oldest first.
    pub fn sent(&self) -> Vec<Email> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Mailer for OutboxMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        info!(to = %email.to, subject = %email.subject, "Email queued in outbox");
        self.sent
            .lock()
            .map_err(|_| MailError::Transport("outbox lock poisoned".into()))?
            .push(email);
        Ok(())
    }
}
