//! # Tracking Email
//!
//! The "your order has been sent" notification: channel settings, placeholder
//! formatting, rendering and the transports that receive the result.
//!
//! [`EmailDispatcher`] implements [`TrackingNotifier`](crate::tracking::TrackingNotifier),
//! so the tracking manager only ever sees that trait.

pub mod dispatcher;
pub mod error;
pub mod format;
pub mod mailer;
pub mod message;
pub mod settings;

pub use dispatcher::EmailDispatcher;
pub use error::MailError;
pub use mailer::{LogMailer, Mailer, OutboxMailer};
pub use message::{Email, EmailBody};
pub use settings::{EmailType, NotificationSettings};
