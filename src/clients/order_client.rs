//! # Order Client
//!
//! High-level API for the `Order` actor. It wraps a `ResourceClient<Order>` and
//! turns the action/result enums into plain method calls.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::tracking::OrderStore;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places a new order on behalf of the host platform.
    #[instrument(skip(self))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order placed");
        Ok(id)
    }

    /// Fetches an order, treating an unknown id as an error.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn get_meta(&self, id: OrderId, key: &str) -> Result<Option<String>, OrderError> {
        match self.action(id, OrderAction::GetMeta(key.to_string())).await? {
            OrderActionResult::GetMeta(value) => Ok(value),
            other => Err(OrderError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Stores `value` under `key`, returning the value it replaced.
    #[instrument(skip(self, value))]
    pub async fn update_meta(
        &self,
        id: OrderId,
        key: &str,
        value: &str,
    ) -> Result<Option<String>, OrderError> {
        let action = OrderAction::UpdateMeta {
            key: key.to_string(),
            value: value.to_string(),
        };
        match self.action(id, action).await? {
            OrderActionResult::UpdateMeta(previous) => Ok(previous),
            other => Err(OrderError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_meta(&self, id: OrderId, key: &str) -> Result<Option<String>, OrderError> {
        match self.action(id, OrderAction::DeleteMeta(key.to_string())).await? {
            OrderActionResult::DeleteMeta(removed) => Ok(removed),
            other => Err(OrderError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    #[instrument(skip(self, content))]
    pub async fn add_note(&self, id: OrderId, content: String) -> Result<usize, OrderError> {
        debug!(%content, "Adding order note");
        match self.action(id, OrderAction::AddNote(content)).await? {
            OrderActionResult::AddNote(count) => Ok(count),
            other => Err(OrderError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    async fn action(
        &self,
        id: OrderId,
        action: OrderAction,
    ) -> Result<OrderActionResult, OrderError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get_order(id).await
    }

    async fn meta(&self, id: OrderId, key: &str) -> Result<Option<String>, OrderError> {
        self.get_meta(id, key).await
    }

    async fn update_meta(&self, id: OrderId, key: &str, value: &str) -> Result<(), OrderError> {
        OrderClient::update_meta(self, id, key, value).await.map(|_| ())
    }

    async fn delete_meta(&self, id: OrderId, key: &str) -> Result<(), OrderError> {
        OrderClient::delete_meta(self, id, key).await.map(|_| ())
    }

    async fn add_note(&self, id: OrderId, content: String) -> Result<(), OrderError> {
        OrderClient::add_note(self, id, content).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn get_meta_sends_get_meta_action() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .get_meta(OrderId(3), "_jadlog_tracking_code")
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(3));
        assert!(matches!(action, OrderAction::GetMeta(ref key) if key == "_jadlog_tracking_code"));
        responder
            .send(Ok(OrderActionResult::GetMeta(Some("JD1".into()))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Some("JD1".to_string()));
    }

    #[tokio::test]
    async fn unknown_order_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.add_note(OrderId(9), "x".into()).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound("9".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(OrderError::NotFound("9".to_string()))
        );
    }

    #[tokio::test]
    async fn mismatched_reply_is_reported() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.delete_meta(OrderId(1), "k").await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder.send(Ok(OrderActionResult::AddNote(1))).unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(OrderError::UnexpectedReply(_))
        ));
    }
}
