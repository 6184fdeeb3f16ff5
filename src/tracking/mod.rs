//! # Tracking State Manager
//!
//! The one place where an order's tracking code is read and written, and where
//! the decision to email the customer is made.
//!
//! The manager never talks to the actor or the mailer directly. It is handed an
//! [`OrderStore`] and a [`TrackingNotifier`], which keeps it testable without a
//! running system:
//!
//! ```rust
//! use jadlog_tracking::tracking::{TrackingManager, Transition};
//! # use jadlog_tracking::tracking::{NotifyOutcome, TrackingNotifier};
//! # use jadlog_tracking::email::MailError;
//! # use jadlog_tracking::model::Order;
//! # use jadlog_tracking::{clients::OrderClient, model::OrderCreate, order_actor};
//! # use std::sync::Arc;
//! # struct Quiet;
//! # #[async_trait::async_trait]
//! # impl TrackingNotifier for Quiet {
//! #     async fn notify(&self, _: &Order, _: &str) -> Result<NotifyOutcome, MailError> {
//! #         Ok(NotifyOutcome::Disabled)
//! #     }
//! # }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new();
//!     tokio::spawn(actor.run(()));
//!     let orders = OrderClient::new(client);
//!     let id = orders.place_order(OrderCreate::default()).await?;
//!
//!     let manager = TrackingManager::new(Arc::new(orders), Arc::new(Quiet));
//!     assert_eq!(manager.write(id, "JD123").await?, Transition::Added);
//!     assert_eq!(manager.read(id).await?.as_deref(), Some("JD123"));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod manager;
pub mod notifier;
pub mod store;

pub use error::TrackingError;
pub use manager::{TrackingManager, Transition, META_KEY};
pub use notifier::{NotifyOutcome, TrackingNotifier};
pub use store::OrderStore;
