use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;

/// Order access needed by the tracking manager.
///
/// Implemented by [`OrderClient`](crate::clients::OrderClient); tests may
/// supply their own.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Fetches a snapshot of the order. Unknown ids yield [`OrderError::NotFound`].
    async fn order(&self, id: OrderId) -> Result<Order, OrderError>;

    async fn meta(&self, id: OrderId, key: &str) -> Result<Option<String>, OrderError>;

    async fn update_meta(&self, id: OrderId, key: &str, value: &str) -> Result<(), OrderError>;

    async fn delete_meta(&self, id: OrderId, key: &str) -> Result<(), OrderError>;

    /// Appends a line to the order's audit log.
    async fn add_note(&self, id: OrderId, content: String) -> Result<(), OrderError>;
}
