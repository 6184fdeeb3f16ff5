//! # Order Actor
//!
//! Stand-in for the host platform's order storage: a single actor owning every
//! [`Order`], exposing metadata reads/writes and an append-only note log.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use jadlog_tracking::clients::OrderClient;
//! use jadlog_tracking::model::OrderCreate;
//! use jadlog_tracking::order_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new();
//!     let client = OrderClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.place_order(OrderCreate::default()).await?;
//!     client.add_note(id, "Paid".into()).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
