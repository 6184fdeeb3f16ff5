//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the running system.
//!
//! [`TrackingSystem::new`] spawns the order-store actor, then builds what
//! hangs off its client: the [`TrackingManager`](crate::tracking::TrackingManager)
//! (with an [`EmailDispatcher`](crate::email::EmailDispatcher) as notifier),
//! the nonce issuer and the template set. [`TrackingSystem::router`] exposes
//! them over HTTP.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - the HTTP server and every `AppState` first
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - [`TrackingSystem::shutdown`] joins the actor task
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the log subscriber; see the [`tracing`](self::tracing) module.

pub mod tracing;
pub mod tracking_system;

pub use self::tracing::*;
pub use self::tracking_system::*;
