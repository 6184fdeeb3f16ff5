//! Single-owner actor plumbing for host-side resources.
//!
//! The order store is the only resource this crate manages, but the plumbing is
//! kept generic over [`ActorEntity`] so the store logic (the entity) stays apart
//! from the message loop, channels and error mapping.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait a stored resource implements
//! - [`ResourceActor`] - Task that owns every entity of one type
//! - [`ResourceClient`] - Cloneable handle that talks to the actor
//! - [`ActorClient`] - Shared `get` for typed client wrappers
//! - [`FrameworkError`] - Plumbing failures (closed actor, unknown id)
//!
//! # Testing
//!
//! See [`mock`] for helpers that stand in for a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
