use crate::email::MailError;
use crate::model::Order;
use async_trait::async_trait;

/// What happened to a notification request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    /// The tracking email channel is switched off.
    Disabled,
    /// The order has no usable billing email.
    NoRecipient,
}

/// Sends the "your order has shipped" message for a freshly added code.
#[async_trait]
pub trait TrackingNotifier: Send + Sync {
    async fn notify(&self, order: &Order, tracking_code: &str)
        -> Result<NotifyOutcome, MailError>;
}
