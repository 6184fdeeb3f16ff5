//! Error types for the tracking manager.

use crate::email::MailError;
use crate::order_actor::OrderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackingError {
    /// The order could not be resolved.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order store failed; nothing is retried.
    #[error("Order store error: {0}")]
    Store(OrderError),

    /// The code and note were saved but the email could not be sent.
    #[error("Tracking code saved, notification failed: {0}")]
    Notification(#[from] MailError),
}

impl From<OrderError> for TrackingError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => TrackingError::NotFound(id),
            other => TrackingError::Store(other),
        }
    }
}
