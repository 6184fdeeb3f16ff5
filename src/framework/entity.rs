//! # ActorEntity Trait
//!
//! The contract a stored resource implements so a [`ResourceActor`](super::ResourceActor)
//! can own it. The host places a resource once (`Create`), reads it back (`Get`) and
//! mutates it only through typed actions (`Action`). There is no generic update or
//! delete: orders are owned by the host and this crate only touches their metadata
//! and notes.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored resource must implement to be managed by `ResourceActor`.
///
/// # Associated Types
/// Each operation gets its own payload type so a caller cannot send an order
/// action to some other resource; the compiler rejects it.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier handed out by the actor on creation.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used when the host places a new resource.
    type Create: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `UpdateMeta`, `AddNote`).
    type Action: Send + Sync + Debug;

    /// Result returned by an action.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook when the actor starts.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Error type raised by the entity's own logic.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the resource from its freshly assigned id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called right after construction, before the resource is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one action to the stored resource.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
