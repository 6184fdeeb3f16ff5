//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](super::ResourceClient) to its
//! [`ResourceActor`](super::ResourceActor). Every request carries a oneshot
//! sender the actor answers on.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Create**: the host places a new resource.
/// - **Get**: snapshot of the resource, `None` when the id is unknown.
/// - **Action**: a typed mutation or lookup defined by the entity.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
